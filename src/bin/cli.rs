// src/bin/cli.rs
use clap::Parser;
use ufc_scrape::{cli::{self, Cli}, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    log::init_tracing(args.log_file.as_deref())?;
    cli::run(&args)?;
    Ok(())
}
