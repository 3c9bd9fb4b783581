mod config;
mod display;
mod logging;
mod plot;
mod shell;

use std::io;

use anyhow::Context;
use clap::Parser;
use log::info;
use portfolio_tracker_core::PortfolioTracker;

use config::Args;
use plot::TerminalChart;
use shell::Shell;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_level);

    let settings = args.settings();
    let mut tracker = PortfolioTracker::open(settings.clone()).with_context(|| {
        format!(
            "Failed to open portfolio {}",
            settings.portfolio_path.display()
        )
    })?;
    info!("Pricing with {}", tracker.provider_name());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        &mut tracker,
        stdin.lock(),
        stdout.lock(),
        TerminalChart::new(),
    );
    shell.run().await.context("Portfolio session aborted")?;

    Ok(())
}
