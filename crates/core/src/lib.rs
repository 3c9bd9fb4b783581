pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::path::Path;

use log::info;
use models::{
    chart::ChartSeries,
    holding::Holding,
    performance::{PerformanceRecord, PortfolioReport},
    portfolio::Portfolio,
    price::{HistoryPeriod, PricePoint},
    settings::Settings,
};
use providers::{traits::PriceProvider, yahoo_finance::YahooFinanceProvider};
use services::{
    chart_service::ChartService, portfolio_service::PortfolioService,
    price_service::PriceService, valuation_service::ValuationService,
};
use storage::manager::StorageManager;

use errors::CoreError;

/// Main entry point for the Portfolio Tracker core library.
/// Holds the holdings table, its backing file and all services needed to operate on it.
#[must_use]
pub struct PortfolioTracker {
    portfolio: Portfolio,
    settings: Settings,
    portfolio_service: PortfolioService,
    price_service: PriceService,
    valuation_service: ValuationService,
    chart_service: ChartService,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("holdings", &self.portfolio.len())
            .field("settings", &self.settings)
            .field("provider", &self.price_service.provider_name())
            .finish()
    }
}

impl PortfolioTracker {
    /// Load the portfolio named in `settings` and price it with Yahoo Finance.
    /// A missing file starts an empty portfolio.
    pub fn open(settings: Settings) -> Result<Self, CoreError> {
        let provider = YahooFinanceProvider::new()?;
        Self::open_with_provider(settings, Box::new(provider))
    }

    /// Load the portfolio named in `settings` and price it with `provider`.
    pub fn open_with_provider(
        settings: Settings,
        provider: Box<dyn PriceProvider>,
    ) -> Result<Self, CoreError> {
        let portfolio = StorageManager::load_from_file(&settings.portfolio_path)?;
        info!(
            "Opened portfolio {} ({} holding(s))",
            settings.portfolio_path.display(),
            portfolio.len()
        );
        Ok(Self::build(portfolio, settings, provider))
    }

    // ── Holdings ────────────────────────────────────────────────────

    /// Append a holding row and save the full table.
    pub fn add_stock(
        &mut self,
        ticker: impl Into<String>,
        shares: f64,
        purchase_price: f64,
    ) -> Result<(), CoreError> {
        let holding = Holding::new(ticker, shares, purchase_price);
        self.portfolio_service
            .add_holding(&mut self.portfolio, holding);
        self.save()
    }

    /// Remove every row for `ticker` (exact match) and save the full table.
    /// Returns the number of rows removed; an unknown ticker removes nothing.
    pub fn remove_stock(&mut self, ticker: &str) -> Result<usize, CoreError> {
        let removed = self
            .portfolio_service
            .remove_ticker(&mut self.portfolio, ticker);
        self.save()?;
        Ok(removed)
    }

    /// Overwrite the backing file with the current table.
    pub fn save(&self) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.portfolio, &self.settings.portfolio_path)
    }

    /// Discard in-memory rows and re-read the backing file.
    pub fn reload(&mut self) -> Result<(), CoreError> {
        self.portfolio = StorageManager::load_from_file(&self.settings.portfolio_path)?;
        Ok(())
    }

    /// Holding rows in insertion order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.portfolio.holdings
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Shares held of `ticker` summed across its rows.
    #[must_use]
    pub fn total_shares(&self, ticker: &str) -> f64 {
        self.portfolio_service.total_shares(&self.portfolio, ticker)
    }

    // ── Prices ──────────────────────────────────────────────────────

    /// Latest daily close of `ticker`.
    pub async fn current_price(&self, ticker: &str) -> Result<f64, CoreError> {
        self.price_service.current_price(ticker).await
    }

    /// Daily closes of `ticker` over `period`, ending today.
    pub async fn price_history(
        &self,
        ticker: &str,
        period: HistoryPeriod,
    ) -> Result<Vec<PricePoint>, CoreError> {
        self.price_service.history(ticker, period).await
    }

    // ── Valuation ───────────────────────────────────────────────────

    /// Total market value of all rows at the latest closes.
    pub async fn get_portfolio_value(&self) -> Result<f64, CoreError> {
        self.valuation_service
            .total_value(&self.portfolio, &self.price_service)
            .await
    }

    /// Gain/loss per row at the latest closes, in row order.
    pub async fn get_performance(&self) -> Result<Vec<PerformanceRecord>, CoreError> {
        self.valuation_service
            .performance(&self.portfolio, &self.price_service)
            .await
    }

    /// Holdings, total value and performance priced from a single set of quotes.
    pub async fn get_report(&self) -> Result<PortfolioReport, CoreError> {
        self.valuation_service
            .report(
                &self.portfolio,
                &self.price_service,
                &self.settings.currency_symbol,
            )
            .await
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Chart of `ticker`'s closes over the configured chart period.
    pub async fn generate_price_chart(&self, ticker: &str) -> Result<ChartSeries, CoreError> {
        self.chart_service
            .generate_price_chart(&self.price_service, ticker, self.settings.chart_period)
            .await
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Backing file of this portfolio.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.settings.portfolio_path
    }

    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.price_service.provider_name()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(portfolio: Portfolio, settings: Settings, provider: Box<dyn PriceProvider>) -> Self {
        Self {
            portfolio,
            settings,
            portfolio_service: PortfolioService::new(),
            price_service: PriceService::new(provider),
            valuation_service: ValuationService::new(),
            chart_service: ChartService::new(),
        }
    }
}
