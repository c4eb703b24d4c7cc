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
        "The decoder key for the distress signal is {}.",
        day13::decoder_key(&pairs)
    );

    Ok(())
}
