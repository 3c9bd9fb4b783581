use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single price data point (date → closing price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Lookback window for a price history request, ending today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryPeriod {
    OneMonth,
    SixMonths,
    /// Used by the price chart
    #[default]
    OneYear,
    FiveYears,
}

impl HistoryPeriod {
    /// Length of the window in calendar days.
    pub fn days(&self) -> i64 {
        match self {
            HistoryPeriod::OneMonth => 30,
            HistoryPeriod::SixMonths => 182,
            HistoryPeriod::OneYear => 365,
            HistoryPeriod::FiveYears => 5 * 365,
        }
    }

    /// First date of the window that ends on `to`.
    pub fn start_from(&self, to: NaiveDate) -> NaiveDate {
        to - chrono::Duration::days(self.days())
    }
}

impl std::fmt::Display for HistoryPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryPeriod::OneMonth => write!(f, "1mo"),
            HistoryPeriod::SixMonths => write!(f, "6mo"),
            HistoryPeriod::OneYear => write!(f, "1y"),
            HistoryPeriod::FiveYears => write!(f, "5y"),
        }
    }
}

/// Latest closing prices keyed by ticker, taken once per valuation request.
///
/// Every row sharing a ticker is valued with the same quote, so the total
/// and the per-row performance of one report are consistent with each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSnapshot {
    prices: HashMap<String, f64>,
}

impl QuoteSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ticker: impl Into<String>, price: f64) {
        self.prices.insert(ticker.into(), price);
    }

    pub fn get(&self, ticker: &str) -> Option<f64> {
        self.prices.get(ticker).copied()
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.prices.contains_key(ticker)
    }

    /// Number of distinct tickers quoted.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
