//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Cache operations themselves never fail; errors only come from
/// construction arguments and from the file/date handling of the
/// passport and word-count companions.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A cache must hold at least one page.
    #[error("Invalid cache capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// A date string was not in ISO `YYYY-MM-DD` form.
    #[error("Invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(
            format!("{}", err),
            "Invalid cache capacity: 0 (must be at least 1)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_invalid_date_has_source() {
        use std::error::Error as _;

        let source = "not-a-date"
            .parse::<chrono::NaiveDate>()
            .unwrap_err();
        let err = Error::InvalidDate {
            value: "not-a-date".to_string(),
            source,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
