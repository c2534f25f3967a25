//! bindle - a small JavaScript module bundler.
//!
//! Entry point: parse arguments, initialize logging, load the JSON
//! config, run the bundle and write the output. Any failure propagates
//! through `anyhow` and exits non-zero.

use clap::Parser;
use tracing::info;

use bindle_cli::{cli, config, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let config = config::BundlerConfig::load(&args.config)?;
    let options = config.into_options()?;

    let result = options.bundle().await?;
    let written = result.write()?;

    info!(
        modules = result.modules.len(),
        bytes = result.code.len(),
        output = %written.display(),
        "bundle written"
    );
    Ok(())
}
