use anyhow::{Context, Result};
use clap::Parser;
use day18::CLIArgs;

fn main() -> Result<()> {
    common::logging::init();
    let args = CLIArgs::parse();
    let droplet = day18::read_droplet(&args.input_path).with_context(|| {
        format!(
            "Failed to read droplet scan from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The surface area of the lava droplet is {}.", droplet.surface_area());

    Ok(())
}
