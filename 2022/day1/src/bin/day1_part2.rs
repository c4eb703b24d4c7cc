use anyhow::{Context, Result};
use clap::Parser;
use day1::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let elves = day1::read_elves(&args.input_path).with_context(|| {
        format!(
            "Failed to read elves from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The top three elves carry {} calories in total.",
        day1::top_n_calories(&elves, 3)
    );

    Ok(())
}
