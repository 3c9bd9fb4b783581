use std::path::Path;

use log::debug;

use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;

use super::format;

/// High-level storage operations: save/load the holdings table to/from a CSV file.
pub struct StorageManager;

impl StorageManager {
    /// Load a portfolio from disk.
    ///
    /// A missing file is not an error: the tracker starts with an empty table.
    /// An unreadable or malformed file is.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Portfolio, CoreError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No portfolio file at {}, starting empty", path.display());
            return Ok(Portfolio::default());
        }

        let bytes = std::fs::read(path)?;
        let portfolio = format::read_file(&bytes)?;
        debug!(
            "Loaded {} holding(s) from {}",
            portfolio.len(),
            path.display()
        );
        Ok(portfolio)
    }

    /// Write the full table to disk, replacing whatever was there.
    pub fn save_to_file(portfolio: &Portfolio, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        let bytes = format::write_file(portfolio)?;
        std::fs::write(path, bytes)?;
        debug!(
            "Saved {} holding(s) to {}",
            portfolio.len(),
            path.display()
        );
        Ok(())
    }
}
