use anyhow::{Context, Result};
use clap::Parser;
use day4::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let pairs = day4::read_pairs(&args.input_path).with_context(|| {
        format!(
            "Failed to read assignment pairs from given file({}).",
            args.input_path.display()
        )
    })?;

    let count = pairs.iter().filter(|p| p.one_contains_other()).count();
    println!("In {} pairs one assignment fully contains the other.", count);

    Ok(())
}
