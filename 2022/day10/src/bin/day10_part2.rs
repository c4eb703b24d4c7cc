use anyhow::{Context, Result};
use clap::Parser;
use day10::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let program = day10::read_program(&args.input_path).with_context(|| {
        format!(
            "Failed to read program from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The CRT shows:");
    print!("{}", day10::render(&program));

    Ok(())
}
