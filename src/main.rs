use anyhow::Result;
use clap::Parser;
use log::debug;
use optsig::cli::{Cli, CliHandler};

fn main() -> Result<()> {
    env_logger::init();
    debug!("optsig {} starting", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let mut handler = CliHandler::new(std::io::stdout().lock());
    handler.execute(cli)
}
