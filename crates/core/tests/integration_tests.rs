// ═══════════════════════════════════════════════════════════════════
// Integration Tests — PortfolioTracker facade over a real file
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::PathBuf;

use portfolio_tracker_core::errors::CoreError;
use portfolio_tracker_core::models::holding::Holding;
use portfolio_tracker_core::models::price::{HistoryPeriod, PricePoint};
use portfolio_tracker_core::models::settings::Settings;
use portfolio_tracker_core::providers::traits::PriceProvider;
use portfolio_tracker_core::PortfolioTracker;

// ═══════════════════════════════════════════════════════════════════
// Mock Price Provider (for testing without real API calls)
// ═══════════════════════════════════════════════════════════════════

struct MockPriceProvider {
    latest: HashMap<String, f64>,
}

impl MockPriceProvider {
    fn new(latest: &[(&str, f64)]) -> Self {
        Self {
            latest: latest.iter().map(|(t, p)| (t.to_string(), *p)).collect(),
        }
    }
}

#[async_trait]
impl PriceProvider for MockPriceProvider {
    fn name(&self) -> &str {
        "MockProvider"
    }

    async fn get_latest_close(&self, symbol: &str) -> Result<f64, CoreError> {
        self.latest.get(symbol).copied().ok_or_else(|| CoreError::Api {
            provider: "MockProvider".into(),
            message: format!("No quote data for {symbol}"),
        })
    }

    async fn get_history(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PricePoint>, CoreError> {
        // Flat line at the latest price, one point per week
        let price = self.get_latest_close(symbol).await?;
        let mut points = Vec::new();
        let mut date = from;
        while date <= to {
            points.push(PricePoint { date, price });
            date += chrono::Duration::days(7);
        }
        Ok(points)
    }
}

fn temp_settings(dir: &tempfile::TempDir) -> Settings {
    Settings::with_portfolio_path(dir.path().join("portfolio.csv"))
}

fn open(settings: &Settings, latest: &[(&str, f64)]) -> PortfolioTracker {
    PortfolioTracker::open_with_provider(
        settings.clone(),
        Box::new(MockPriceProvider::new(latest)),
    )
    .unwrap()
}

fn reference_prices() -> Vec<(&'static str, f64)> {
    vec![("AAA", 110.0), ("BBB", 40.0)]
}

// ═══════════════════════════════════════════════════════════════════
// Store behavior
// ═══════════════════════════════════════════════════════════════════

#[test]
fn open_without_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = open(&temp_settings(&dir), &[]);
    assert!(tracker.holdings().is_empty());
    assert_eq!(tracker.path(), dir.path().join("portfolio.csv").as_path());
}

#[test]
fn add_persists_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let settings = temp_settings(&dir);
    let mut tracker = open(&settings, &[]);
    tracker.add_stock("AAPL", 3.0, 187.44).unwrap();

    let reopened = open(&settings, &[]);
    assert_eq!(reopened.holdings(), &[Holding::new("AAPL", 3.0, 187.44)]);
}

#[test]
fn add_then_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&temp_settings(&dir), &[]);
    tracker.add_stock("MSFT", 0.75, 402.1).unwrap();
    tracker.reload().unwrap();
    assert_eq!(tracker.holdings(), &[Holding::new("MSFT", 0.75, 402.1)]);
}

#[test]
fn remove_all_lots_of_a_ticker() {
    let dir = tempfile::tempdir().unwrap();
    let settings = temp_settings(&dir);
    let mut tracker = open(&settings, &[]);
    tracker.add_stock("AAA", 10.0, 100.0).unwrap();
    tracker.add_stock("BBB", 5.0, 50.0).unwrap();
    tracker.add_stock("AAA", 2.0, 90.0).unwrap();
    assert_eq!(tracker.total_shares("AAA"), 12.0);

    assert_eq!(tracker.remove_stock("AAA").unwrap(), 2);
    assert_eq!(tracker.holdings(), &[Holding::new("BBB", 5.0, 50.0)]);

    let reopened = open(&settings, &[]);
    assert_eq!(reopened.holdings(), &[Holding::new("BBB", 5.0, 50.0)]);
}

#[test]
fn remove_unknown_ticker_still_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = temp_settings(&dir);
    let mut tracker = open(&settings, &[]);
    assert_eq!(tracker.remove_stock("ZZZ").unwrap(), 0);
    let text = std::fs::read_to_string(&settings.portfolio_path).unwrap();
    assert_eq!(text, "Ticker,Shares,Purchase Price\n");
}

#[test]
fn corrupt_file_prevents_open() {
    let dir = tempfile::tempdir().unwrap();
    let settings = temp_settings(&dir);
    std::fs::write(&settings.portfolio_path, "not,a,portfolio\n1,2,3\n").unwrap();
    let result =
        PortfolioTracker::open_with_provider(settings, Box::new(MockPriceProvider::new(&[])));
    assert!(matches!(result, Err(CoreError::Csv(_))));
}

#[test]
fn add_into_unwritable_location_reports_error_but_keeps_row() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::with_portfolio_path(PathBuf::from(dir.path()).join("missing/dir.csv"));
    let mut tracker = open(&settings, &[]);
    assert!(tracker.add_stock("AAA", 1.0, 1.0).is_err());
    assert_eq!(tracker.holdings().len(), 1);
}

#[test]
fn debug_shows_summary() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = open(&temp_settings(&dir), &[]);
    let debug = format!("{tracker:?}");
    assert!(debug.contains("PortfolioTracker"));
    assert!(debug.contains("MockProvider"));
}

// ═══════════════════════════════════════════════════════════════════
// Valuation through the facade
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn reference_valuation() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&temp_settings(&dir), &reference_prices());
    tracker.add_stock("AAA", 10.0, 100.0).unwrap();
    tracker.add_stock("BBB", 5.0, 50.0).unwrap();

    assert_eq!(tracker.get_portfolio_value().await.unwrap(), 1300.0);

    let perf = tracker.get_performance().await.unwrap();
    let summary: Vec<(&str, f64, f64)> = perf
        .iter()
        .map(|p| (p.ticker.as_str(), p.current_price, p.gain_loss))
        .collect();
    assert_eq!(summary, vec![("AAA", 110.0, 100.0), ("BBB", 40.0, -50.0)]);

    let report = tracker.get_report().await.unwrap();
    assert_eq!(report.total_value, 1300.0);
    assert_eq!(report.currency_symbol, "$");
}

#[tokio::test]
async fn empty_portfolio_value_is_zero() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = open(&temp_settings(&dir), &[]);
    assert_eq!(tracker.get_portfolio_value().await.unwrap(), 0.0);
}

#[tokio::test]
async fn unknown_ticker_fails_valuation() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&temp_settings(&dir), &reference_prices());
    tracker.add_stock("AAA", 1.0, 1.0).unwrap();
    tracker.add_stock("TYPO", 1.0, 1.0).unwrap();
    assert!(tracker.get_portfolio_value().await.is_err());
    assert!(tracker.get_report().await.is_err());
}

#[tokio::test]
async fn prices_and_chart() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = open(&temp_settings(&dir), &reference_prices());
    assert_eq!(tracker.current_price("AAA").await.unwrap(), 110.0);

    let history = tracker
        .price_history("BBB", HistoryPeriod::OneMonth)
        .await
        .unwrap();
    assert!(!history.is_empty());
    assert!(history.iter().all(|p| p.price == 40.0));

    let chart = tracker.generate_price_chart("AAA").await.unwrap();
    assert_eq!(chart.title, "Historical Prices for AAA");
    assert!(chart.len() >= 52);
}
