use csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::portfolio::{Portfolio, COLUMNS};

// ═══════════════════════════════════════════════════════════════════
// Portfolio File Format
// ═══════════════════════════════════════════════════════════════════
//
// Plain comma-separated text, one holding per row:
//
//   Ticker,Shares,Purchase Price
//   AAPL,10.0,150.25
//   MSFT,2.5,310.0
//
// The header row is always written, even for an empty portfolio.
// Columns are matched by name on read, so extra columns are ignored
// and column order does not matter.

/// Serialize a portfolio into CSV bytes.
pub fn write_file(portfolio: &Portfolio) -> Result<Vec<u8>, CoreError> {
    // Header is written by hand so an empty table still gets one
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for holding in &portfolio.holdings {
        writer.serialize(holding)?;
    }

    writer
        .into_inner()
        .map_err(|e| CoreError::FileIO(format!("Failed to flush portfolio data: {e}")))
}

/// Parse CSV bytes into a portfolio, keeping row order.
///
/// A zero-length input is an empty portfolio. Anything else must carry
/// all of the expected columns.
pub fn read_file(data: &[u8]) -> Result<Portfolio, CoreError> {
    if data.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Portfolio::default());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::Csv(format!(
            "missing column(s) {} (expected header: {})",
            missing.join(", "),
            COLUMNS.join(",")
        )));
    }

    let holdings = reader
        .deserialize::<Holding>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Portfolio::from_holdings(holdings))
}
