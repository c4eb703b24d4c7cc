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

    if let Some(size) = fs.dir_to_free_size() {
        println!(
            "The smallest directory that frees enough space for the update has size {}.",
            size
        );
    } else {
        eprintln!("No single directory frees enough space for the update.");
    }

    Ok(())
}
