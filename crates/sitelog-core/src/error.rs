//! Unified error handling for sitelog-core

use crate::models::FormTab;
use thiserror::Error;

/// Core error type for sitelog-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Validation error on the {tab} tab: {message}")]
    Validation { tab: FormTab, message: String },

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for sitelog-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }

    /// Create a validation error pointing at a form tab
    pub fn validation(tab: FormTab, msg: impl Into<String>) -> Self {
        Error::Validation { tab, message: msg.into() }
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// The form tab a validation error points at, if any
    pub fn tab(&self) -> Option<FormTab> {
        match self {
            Error::Validation { tab, .. } => Some(*tab),
            _ => None,
        }
    }
}

// Convert to String for embedding hosts that surface plain messages
impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("report xyz");
        assert_eq!(err.to_string(), "Not found: report xyz");
    }

    #[test]
    fn test_validation_error_names_the_tab() {
        let err = Error::validation(FormTab::Activities, "bad permit");
        assert!(err.to_string().contains("activities"));
        assert_eq!(err.tab(), Some(FormTab::Activities));
    }

    #[test]
    fn test_error_conversion_to_string() {
        let err = Error::storage("quota exceeded");
        let s: String = err.into();
        assert!(s.contains("Storage error"));
    }
}
