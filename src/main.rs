//! CLI entry point for painting images from palette color statistics

use clap::Parser;
use markovpaint::io::cli::{Cli, Runner};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> markovpaint::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let mut runner = Runner::new(cli);
    runner.process()?;
    Ok(())
}
