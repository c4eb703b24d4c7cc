use anyhow::{Context, Result};
use clap::Parser;
use day12::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let map = day12::read_height_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read height map from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(steps) = map.fewest_steps_from_start() {
        println!(
            "The fewest steps from the start to the best signal position is {}.",
            steps
        );
    } else {
        eprintln!("The best signal position can't be reached from the start.");
    }

    Ok(())
}
