use anyhow::{Context, Result};
use clap::Parser;
use day9::{CLIArgs, Rope};

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let motions = day9::read_motions(&args.input_path).with_context(|| {
        format!(
            "Failed to read motions from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut rope = Rope::new(10);
    for motion in &motions {
        rope.apply(motion);
    }
    println!(
        "The tail of a rope with 10 knots visits {} positions at least once.",
        rope.tail_visited_n()
    );

    Ok(())
}
