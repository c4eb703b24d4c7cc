use anyhow::{Context, Result};
use clap::Parser;
use day14::{Bottom, CLIArgs};

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let cave = day14::read_cave(&args.input_path).with_context(|| {
        format!(
            "Failed to read cave scan from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The units of sand coming to rest before sand flows into the abyss is {}.",
        cave.pour_sand(Bottom::Abyss)
    );

    Ok(())
}
