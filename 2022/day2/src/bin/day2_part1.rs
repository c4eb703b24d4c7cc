use anyhow::{Context, Result};
use clap::Parser;
use day2::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let rounds = day2::read_rounds(&args.input_path).with_context(|| {
        format!(
            "Failed to read strategy guide from given file({}).",
            args.input_path.display()
        )
    })?;

    let total_score = rounds.iter().map(|r| r.score_as_shape()).sum::<usize>();
    println!("The total score following the guide as shapes is {}.", total_score);

    Ok(())
}
