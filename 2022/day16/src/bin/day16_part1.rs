use anyhow::{Context, Result};
use clap::Parser;
use day16::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let volcano = day16::read_volcano(&args.input_path).with_context(|| {
        format!(
            "Failed to read valve scan from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The most pressure you can release in 30 minutes is {}.", volcano.max_pressure(30));

    Ok(())
}
