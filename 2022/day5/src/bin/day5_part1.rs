use anyhow::{Context, Result};
use clap::Parser;
use day5::{CLIArgs, CraneModel};

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let (mut stacks, moves) = day5::read_procedure(&args.input_path).with_context(|| {
        format!(
            "Failed to read rearrangement procedure from given file({}).",
            args.input_path.display()
        )
    })?;

    for (ind, mv) in moves.iter().enumerate() {
        stacks
            .apply(mv, CraneModel::CrateMover9000)
            .with_context(|| format!("Failed to apply move #{}.", ind + 1))?;
    }
    println!(
        "The crates on top of each stack are {}.",
        stacks.tops()
    );

    Ok(())
}
