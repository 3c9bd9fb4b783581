use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A render-ready line chart of one ticker's closing prices.
///
/// The core computes all the numbers; the frontend only draws. `points`
/// use `x` = days since `first_date` so any plotting backend can place them
/// on a numeric axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Chart title, e.g. "Historical Prices for AAPL"
    pub title: String,

    /// Legend label for the single line series (the ticker)
    pub series_label: String,

    pub x_label: String,
    pub y_label: String,

    /// (days since first_date, close)
    pub points: Vec<(f64, f64)>,

    pub x_bounds: [f64; 2],

    /// Price range with a little headroom above and below
    pub y_bounds: [f64; 2],

    /// Date tick labels: first, middle, last
    pub x_labels: Vec<String>,

    /// Price tick labels: bottom, middle, top of `y_bounds`
    pub y_labels: Vec<String>,

    /// Price levels at which horizontal grid lines are drawn
    pub grid_levels: Vec<f64>,

    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last closing price in the series.
    pub fn last_price(&self) -> Option<f64> {
        self.points.last().map(|&(_, y)| y)
    }
}
