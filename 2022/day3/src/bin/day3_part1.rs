use anyhow::{Context, Result};
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let rucksacks = day3::read_rucksacks(&args.input_path).with_context(|| {
        format!(
            "Failed to read rucksacks from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = rucksacks
        .iter()
        .map(|r| r.misplaced_priority())
        .sum::<Result<usize, _>>()?;
    println!("The sum of priorities of misplaced items is {}.", sum);

    Ok(())
}
