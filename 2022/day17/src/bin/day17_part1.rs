use anyhow::{Context, Result};
use clap::Parser;
use day17::{CLIArgs, PART1_ROCK_N};

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let chamber = day17::read_chamber(&args.input_path).with_context(|| {
        format!(
            "Failed to read jet pattern from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The tower is {} units tall after {} rocks have stopped falling.",
        chamber.tower_height(PART1_ROCK_N),
        PART1_ROCK_N
    );

    Ok(())
}
