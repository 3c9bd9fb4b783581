use std::io::{BufRead, Write};

use log::warn;
use portfolio_tracker_core::PortfolioTracker;
use thiserror::Error;

use crate::display;
use crate::plot::ChartRenderer;

const MENU: &str = "\nOptions:\n\
                    1. Add Stock\n\
                    2. Remove Stock\n\
                    3. Display Portfolio\n\
                    4. Plot Stock Price\n\
                    5. Exit";

/// Console input problems. These end the session.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("'{value}' is not a valid number for {field}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed")]
    EndOfInput,
}

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStock,
    RemoveStock,
    DisplayPortfolio,
    PlotStock,
    Exit,
}

impl MenuChoice {
    /// Map a menu line ("1".."5", surrounding whitespace ignored) to a choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddStock),
            "2" => Some(MenuChoice::RemoveStock),
            "3" => Some(MenuChoice::DisplayPortfolio),
            "4" => Some(MenuChoice::PlotStock),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Blocking read-eval loop over the numbered menu.
///
/// Input errors end the loop and are returned. Storage and provider errors
/// only abort the current option; the message is printed and the menu shown again.
pub struct Shell<'a, R, W, C> {
    tracker: &'a mut PortfolioTracker,
    input: R,
    output: W,
    charts: C,
}

impl<'a, R: BufRead, W: Write, C: ChartRenderer> Shell<'a, R, W, C> {
    pub fn new(tracker: &'a mut PortfolioTracker, input: R, output: W, charts: C) -> Self {
        Self {
            tracker,
            input,
            output,
            charts,
        }
    }

    /// Run until the exit option is chosen or input runs out.
    pub async fn run(&mut self) -> Result<(), InputError> {
        match self.run_loop().await {
            Err(InputError::EndOfInput) => Ok(()),
            other => other,
        }
    }

    async fn run_loop(&mut self) -> Result<(), InputError> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let line = self.prompt("Choose an option: ")?;

            match MenuChoice::parse(&line) {
                Some(MenuChoice::AddStock) => self.add_stock()?,
                Some(MenuChoice::RemoveStock) => self.remove_stock()?,
                Some(MenuChoice::DisplayPortfolio) => self.display_portfolio().await?,
                Some(MenuChoice::PlotStock) => self.plot_stock().await?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting the portfolio tracker.")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    /// Give back the output sink and chart renderer.
    #[cfg(test)]
    pub fn into_parts(self) -> (W, C) {
        (self.output, self.charts)
    }

    // ── Menu options ────────────────────────────────────────────────

    fn add_stock(&mut self) -> Result<(), InputError> {
        let ticker = self.prompt("Enter stock ticker: ")?;
        let shares = self.prompt_number("Enter number of shares: ", "shares")?;
        let price = self.prompt_number("Enter purchase price per share: ", "purchase price")?;

        if let Err(e) = self.tracker.add_stock(ticker, shares, price) {
            self.report_failure("save the portfolio", &e)?;
        }
        Ok(())
    }

    fn remove_stock(&mut self) -> Result<(), InputError> {
        let ticker = self.prompt("Enter stock ticker to remove: ")?;
        if let Err(e) = self.tracker.remove_stock(&ticker) {
            self.report_failure("save the portfolio", &e)?;
        }
        Ok(())
    }

    async fn display_portfolio(&mut self) -> Result<(), InputError> {
        match self.tracker.get_report().await {
            Ok(report) => write!(self.output, "{}", display::render_report(&report))?,
            Err(e) => self.report_failure("value the portfolio", &e)?,
        }
        Ok(())
    }

    async fn plot_stock(&mut self) -> Result<(), InputError> {
        let ticker = self.prompt("Enter stock ticker to plot: ")?;
        let series = match self.tracker.generate_price_chart(&ticker).await {
            Ok(series) => series,
            Err(e) => return self.report_failure("load price history", &e),
        };

        self.output.flush()?;
        if let Err(e) = self.charts.render(&series) {
            self.report_failure("draw the chart", &e)?;
        }
        Ok(())
    }

    // ── Console helpers ─────────────────────────────────────────────

    /// Print `label`, read one line, return it without surrounding whitespace.
    fn prompt(&mut self, label: &str) -> Result<String, InputError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_number(&mut self, label: &str, field: &'static str) -> Result<f64, InputError> {
        let value = self.prompt(label)?;
        parse_number(&value, field)
    }

    fn report_failure(
        &mut self,
        action: &str,
        error: &dyn std::fmt::Display,
    ) -> Result<(), InputError> {
        warn!("Could not {action}: {error}");
        writeln!(self.output, "Error: could not {action}: {error}")?;
        Ok(())
    }
}

/// Parse a numeric console answer. Non-finite values are rejected too.
pub fn parse_number(value: &str, field: &'static str) -> Result<f64, InputError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| InputError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
