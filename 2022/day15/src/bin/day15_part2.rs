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

    if let Some(beacon) = sensors.distress_beacon(args.bound) {
        println!(
            "The tuning frequency of the distress beacon is {}.",
            beacon.tuning_frequency()
        );
    } else {
        eprintln!(
            "Every position within 0..={} is covered by some sensor.",
            args.bound
        );
    }

    Ok(())
}
