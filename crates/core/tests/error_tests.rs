// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use portfolio_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn csv() {
        let err = CoreError::Csv("missing column(s) Shares".into());
        assert_eq!(
            err.to_string(),
            "Portfolio file error: missing column(s) Shares"
        );
    }

    #[test]
    fn api() {
        let err = CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: "No quote data for ZZZZ".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (Yahoo Finance): No quote data for ZZZZ"
        );
    }

    #[test]
    fn price_not_available() {
        let err = CoreError::PriceNotAvailable {
            symbol: "AAPL".into(),
            period: "1y".into(),
        };
        assert_eq!(err.to_string(), "No price data for AAPL over 1y");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("Ticker must not be empty".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: Ticker must not be empty"
        );
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CoreError = io.into();
        match err {
            CoreError::FileIO(msg) => assert!(msg.contains("gone")),
            other => panic!("Expected FileIO, got {other:?}"),
        }
    }

    #[test]
    fn from_csv_parse_error() {
        let data = "Ticker,Shares,Purchase Price\nAAPL,ten,150\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: Result<(String, f64, f64), csv::Error> =
            reader.deserialize().next().expect("one row");
        let err: CoreError = row.unwrap_err().into();
        assert!(matches!(err, CoreError::Csv(_)), "got {err:?}");
    }

    #[test]
    fn from_csv_io_error_stays_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        let err: CoreError = csv::Error::from(io).into();
        assert!(matches!(err, CoreError::FileIO(_)), "got {err:?}");
    }

    #[test]
    fn errors_are_debug() {
        let err = CoreError::ValidationError("x".into());
        assert!(format!("{err:?}").contains("ValidationError"));
    }
}
