use anyhow::Result;
use clap::Parser;
use std::io;

use yamlpick::cli::{run, Cli};

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let status = run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    if status != 0 {
        std::process::exit(status);
    }
    Ok(())
}
