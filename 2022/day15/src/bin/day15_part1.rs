use anyhow::{Context, Result};
use clap::Parser;
use day15::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let sensors = day15::read_sensors(&args.input_path).with_context(|| {
        format!(
            "Failed to read sensor reports from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "In row {}, {} positions cannot contain a beacon.",
        args.row,
        sensors.no_beacon_count(args.row)
    );

    Ok(())
}
