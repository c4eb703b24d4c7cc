use anyhow::{Context, Result};
use clap::Parser;
use day11::{CLIArgs, Relief};

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let mut troop = day11::read_troop(&args.input_path).with_context(|| {
        format!(
            "Failed to read monkeys from given file({}).",
            args.input_path.display()
        )
    })?;

    troop.play(20, Relief::DivideByThree);
    println!(
        "The level of monkey business after 20 rounds is {}.",
        troop.monkey_business()
    );

    Ok(())
}
