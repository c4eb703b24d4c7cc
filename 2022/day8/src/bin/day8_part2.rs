use anyhow::{Context, Result};
use clap::Parser;
use day8::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let forest = day8::read_forest(&args.input_path).with_context(|| {
        format!(
            "Failed to read tree map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The highest scenic score possible for any tree is {}.",
        forest.max_scenic_score()
    );

    Ok(())
}
