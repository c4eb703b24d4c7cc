use anyhow::{Context, Result};
use clap::Parser;
use day7::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let fs = day7::read_file_system(&args.input_path).with_context(|| {
        format!(
            "Failed to read terminal output from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The sum of sizes of directories at most {} is {}.",
        day7::SMALL_DIR_LIMIT,
        fs.small_dirs_size()
    );

    Ok(())
}
