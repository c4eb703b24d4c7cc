use anyhow::{Context, Result};
use clap::Parser;
use day13::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let pairs = day13::read_packet_pairs(&args.input_path).with_context(|| {
        format!(
            "Failed to read packet pairs from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The sum of indices of pairs in the right order is {}.",
        day13::ordered_index_sum(&pairs)
    );

    Ok(())
}
