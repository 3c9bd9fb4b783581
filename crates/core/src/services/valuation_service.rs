use log::debug;

use crate::errors::CoreError;
use crate::models::performance::{PerformanceRecord, PortfolioReport};
use crate::models::portfolio::Portfolio;
use crate::models::price::QuoteSnapshot;
use crate::services::price_service::PriceService;

/// Computes portfolio value and per-row gain/loss from live quotes.
///
/// Quotes are fetched sequentially, once per distinct ticker per request.
/// The first failed lookup aborts the whole computation; there is no
/// partial result.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch the latest close for every distinct ticker in the portfolio.
    pub async fn quote_snapshot(
        &self,
        portfolio: &Portfolio,
        price_service: &PriceService,
    ) -> Result<QuoteSnapshot, CoreError> {
        let mut snapshot = QuoteSnapshot::new();
        for ticker in portfolio.distinct_tickers() {
            let price = price_service.current_price(ticker).await?;
            snapshot.insert(ticker, price);
        }
        debug!("Quoted {} distinct ticker(s)", snapshot.len());
        Ok(snapshot)
    }

    /// Sum of `current_price × shares` over all rows. Empty portfolio → 0.
    pub async fn total_value(
        &self,
        portfolio: &Portfolio,
        price_service: &PriceService,
    ) -> Result<f64, CoreError> {
        let snapshot = self.quote_snapshot(portfolio, price_service).await?;
        self.value_with(portfolio, &snapshot)
    }

    /// One performance record per row, in row order.
    pub async fn performance(
        &self,
        portfolio: &Portfolio,
        price_service: &PriceService,
    ) -> Result<Vec<PerformanceRecord>, CoreError> {
        let snapshot = self.quote_snapshot(portfolio, price_service).await?;
        self.performance_with(portfolio, &snapshot)
    }

    /// Holdings, total value and performance, all priced from one snapshot.
    pub async fn report(
        &self,
        portfolio: &Portfolio,
        price_service: &PriceService,
        currency_symbol: &str,
    ) -> Result<PortfolioReport, CoreError> {
        let snapshot = self.quote_snapshot(portfolio, price_service).await?;
        let total_value = self.value_with(portfolio, &snapshot)?;
        let performance = self.performance_with(portfolio, &snapshot)?;

        Ok(PortfolioReport {
            holdings: portfolio.holdings.clone(),
            total_value,
            performance,
            currency_symbol: currency_symbol.to_string(),
        })
    }

    /// Total value against an already-fetched snapshot.
    pub fn value_with(
        &self,
        portfolio: &Portfolio,
        snapshot: &QuoteSnapshot,
    ) -> Result<f64, CoreError> {
        portfolio.holdings.iter().try_fold(0.0, |total, holding| -> Result<f64, CoreError> {
            let price = Self::quote_for(snapshot, &holding.ticker)?;
            Ok(total + price * holding.shares)
        })
    }

    /// Performance records against an already-fetched snapshot.
    pub fn performance_with(
        &self,
        portfolio: &Portfolio,
        snapshot: &QuoteSnapshot,
    ) -> Result<Vec<PerformanceRecord>, CoreError> {
        portfolio
            .holdings
            .iter()
            .map(|holding| {
                let price = Self::quote_for(snapshot, &holding.ticker)?;
                Ok(PerformanceRecord::from_holding(holding, price))
            })
            .collect()
    }

    fn quote_for(snapshot: &QuoteSnapshot, ticker: &str) -> Result<f64, CoreError> {
        snapshot
            .get(ticker)
            .ok_or_else(|| CoreError::PriceNotAvailable {
                symbol: ticker.to_string(),
                period: "latest close".to_string(),
            })
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
