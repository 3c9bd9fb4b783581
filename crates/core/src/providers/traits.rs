use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::price::PricePoint;

/// Trait abstraction for the market data source.
///
/// The tracker only needs two capabilities: the latest daily close and a
/// daily close series over a date range. Yahoo Finance is the production
/// implementation; tests plug in fixed-price mocks.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Most recent daily closing price of `symbol`.
    async fn get_latest_close(&self, symbol: &str) -> Result<f64, CoreError>;

    /// Daily closing prices between `from` and `to` (inclusive), sorted by date.
    async fn get_history(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PricePoint>, CoreError>;
}
