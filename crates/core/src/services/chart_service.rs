use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::chart::ChartSeries;
use crate::models::price::{HistoryPeriod, PricePoint};
use crate::services::price_service::PriceService;

/// Number of horizontal grid lines, bottom and top edges included.
const GRID_LINES: usize = 5;

/// Fraction of the price range added above and below the series.
const Y_PADDING: f64 = 0.05;

const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// Turns a ticker's price history into chart-ready data.
///
/// The core computes all the numbers and the frontend only renders them:
/// points on a numeric day axis, axis bounds, tick labels and grid levels.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch `period` of daily closes for `ticker` and build its chart.
    pub async fn generate_price_chart(
        &self,
        price_service: &PriceService,
        ticker: &str,
        period: HistoryPeriod,
    ) -> Result<ChartSeries, CoreError> {
        let history = price_service.history(ticker, period).await?;
        self.build_series(ticker, &history)
    }

    /// Build a chart from an already-fetched, date-sorted series.
    pub fn build_series(&self, ticker: &str, history: &[PricePoint]) -> Result<ChartSeries, CoreError> {
        let (first, last) = match (history.first(), history.last()) {
            (Some(first), Some(last)) => (first.date, last.date),
            _ => {
                return Err(CoreError::ValidationError(format!(
                    "No price history to chart for {ticker}"
                )))
            }
        };

        let points: Vec<(f64, f64)> = history
            .iter()
            .map(|p| ((p.date - first).num_days() as f64, p.price))
            .collect();

        let span_days = (last - first).num_days();
        let x_bounds = [0.0, (span_days.max(1)) as f64];

        let (min, max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        let y_bounds = Self::padded_bounds(min, max);

        let mid_date = first + chrono::Duration::days(span_days / 2);
        let x_labels = if span_days == 0 {
            vec![Self::date_label(first)]
        } else {
            vec![
                Self::date_label(first),
                Self::date_label(mid_date),
                Self::date_label(last),
            ]
        };

        let y_mid = (y_bounds[0] + y_bounds[1]) / 2.0;
        let y_labels = [y_bounds[0], y_mid, y_bounds[1]]
            .iter()
            .map(|v| format!("{v:.2}"))
            .collect();

        let step = (y_bounds[1] - y_bounds[0]) / (GRID_LINES - 1) as f64;
        let grid_levels = (0..GRID_LINES)
            .map(|i| y_bounds[0] + step * i as f64)
            .collect();

        Ok(ChartSeries {
            title: format!("Historical Prices for {ticker}"),
            series_label: ticker.to_string(),
            x_label: "Date".to_string(),
            y_label: "Price (USD)".to_string(),
            points,
            x_bounds,
            y_bounds,
            x_labels,
            y_labels,
            grid_levels,
            first_date: first,
            last_date: last,
        })
    }

    /// Pad the price range so the line never sits on the frame.
    /// A flat series still gets a visible band around it.
    fn padded_bounds(min: f64, max: f64) -> [f64; 2] {
        let range = max - min;
        let pad = if range > 0.0 {
            range * Y_PADDING
        } else {
            (max.abs() * Y_PADDING).max(0.5)
        };

        let lower = if min >= 0.0 { (min - pad).max(0.0) } else { min - pad };
        [lower, max + pad]
    }

    fn date_label(date: NaiveDate) -> String {
        date.format(DATE_LABEL_FORMAT).to_string()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
