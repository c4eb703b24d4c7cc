use anyhow::{Context, Result};
use clap::Parser;
use day6::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let stream = day6::read_datastream(&args.input_path).with_context(|| {
        format!(
            "Failed to read datastream from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(end) = stream.marker_end(day6::MESSAGE_MARKER_LEN) {
        println!(
            "{} characters are processed before the first start-of-message marker is detected.",
            end
        );
    } else {
        eprintln!("There's no start-of-message marker in the given datastream.");
    }

    Ok(())
}
