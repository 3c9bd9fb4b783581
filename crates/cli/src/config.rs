use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use portfolio_tracker_core::models::settings::{Settings, DEFAULT_PORTFOLIO_FILE};

/// Track a stock portfolio from the terminal.
#[derive(Debug, Parser)]
#[command(name = "portfolio-tracker", version, about)]
pub struct Args {
    /// Holdings file to load at startup and save after every change
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_PORTFOLIO_FILE)]
    pub file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LevelFilter>,
}

impl Args {
    /// Core settings for this run.
    pub fn settings(&self) -> Settings {
        Settings::with_portfolio_path(&self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_portfolio_csv() {
        let args = Args::parse_from(["portfolio-tracker"]);
        assert_eq!(args.file, PathBuf::from("portfolio.csv"));
        assert!(args.log_level.is_none());
        assert_eq!(args.settings(), Settings::default());
    }

    #[test]
    fn file_and_log_level() {
        let args = Args::parse_from([
            "portfolio-tracker",
            "--file",
            "/data/holdings.csv",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.settings().portfolio_path, PathBuf::from("/data/holdings.csv"));
        assert_eq!(args.log_level, Some(LevelFilter::Debug));
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(Args::try_parse_from(["portfolio-tracker", "--log-level", "loud"]).is_err());
    }
}
