use chrono::NaiveDate;
use log::{debug, warn};

use crate::errors::CoreError;
use crate::models::price::{HistoryPeriod, PricePoint};
use crate::providers::traits::PriceProvider;

/// Fetches prices from the configured provider.
///
/// No caching and no retries: every call goes to the provider, and a
/// provider failure is returned as-is. Returned prices are checked to be
/// finite and non-negative.
pub struct PriceService {
    provider: Box<dyn PriceProvider>,
}

impl PriceService {
    pub fn new(provider: Box<dyn PriceProvider>) -> Self {
        Self { provider }
    }

    /// Name of the provider behind this service.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Most recent daily close of `ticker`.
    pub async fn current_price(&self, ticker: &str) -> Result<f64, CoreError> {
        Self::check_ticker(ticker)?;
        debug!("Fetching latest close for {ticker} from {}", self.provider.name());

        let price = self.provider.get_latest_close(ticker).await?;
        if !price.is_finite() || price < 0.0 {
            warn!("Rejected price {price} for {ticker}");
            return Err(CoreError::Api {
                provider: self.provider.name().to_string(),
                message: format!(
                    "Invalid price returned for {ticker}: {price} (must be finite and non-negative)"
                ),
            });
        }
        Ok(price)
    }

    /// Daily closes for the `period` window ending today.
    pub async fn history(
        &self,
        ticker: &str,
        period: HistoryPeriod,
    ) -> Result<Vec<PricePoint>, CoreError> {
        let today = chrono::Utc::now().date_naive();
        self.history_until(ticker, period, today).await
    }

    /// Daily closes for the `period` window ending on `to`.
    /// An empty series is an error.
    pub async fn history_until(
        &self,
        ticker: &str,
        period: HistoryPeriod,
        to: NaiveDate,
    ) -> Result<Vec<PricePoint>, CoreError> {
        Self::check_ticker(ticker)?;
        let from = period.start_from(to);
        debug!(
            "Fetching {period} history for {ticker} ({from}..={to}) from {}",
            self.provider.name()
        );

        let mut points = self.provider.get_history(ticker, from, to).await?;
        points.retain(|p| p.price.is_finite());
        if points.is_empty() {
            return Err(CoreError::PriceNotAvailable {
                symbol: ticker.to_string(),
                period: period.to_string(),
            });
        }
        points.sort_by_key(|p| p.date);
        Ok(points)
    }

    fn check_ticker(ticker: &str) -> Result<(), CoreError> {
        if ticker.trim().is_empty() {
            return Err(CoreError::ValidationError("Ticker must not be empty".into()));
        }
        Ok(())
    }
}
