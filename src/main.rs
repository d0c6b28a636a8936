//! CLI entry point for drawing separated random numbers

use clap::Parser;
use randsep::io::cli::{Cli, Driver};

// Allow print for the driver's report output
#[allow(clippy::print_stdout)]
fn main() -> randsep::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let driver = Driver::new(Cli::parse())?;
    print!("{}", driver.process()?);
    Ok(())
}
