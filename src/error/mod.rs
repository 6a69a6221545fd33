// src/error/mod.rs
use thiserror::Error;

/// Errors raised by the I/O edges of the crate (snapshot loading, report
/// export, configuration). The analytics themselves are total and never fail.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Filesystem errors while reading snapshots or writing reports
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot or report JSON could not be (de)serialized
    #[error("Parse Error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Config Error: {0}")]
    Config(String),

    /// Invalid input parameters (bad CLI values, unparseable timestamps)
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::Parse(format!("JSON serialization/deserialization error: {}", err))
    }
}

impl AnalyticsError {
    /// Whether the caller can fix the problem by changing its input
    /// rather than its environment.
    pub fn is_user_error(&self) -> bool {
        match self {
            AnalyticsError::Io(_) => false,
            AnalyticsError::Parse(_) => true,
            AnalyticsError::Config(_) => true,
            AnalyticsError::InvalidInput(_) => true,
        }
    }

    /// Short category label used in log lines.
    pub fn category(&self) -> &'static str {
        match self {
            AnalyticsError::Io(_) => "io",
            AnalyticsError::Parse(_) => "data",
            AnalyticsError::Config(_) => "configuration",
            AnalyticsError::InvalidInput(_) => "input",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_becomes_parse_error() {
        let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let converted: AnalyticsError = err.into();
        assert!(matches!(converted, AnalyticsError::Parse(_)));
        assert!(converted.is_user_error());
        assert_eq!(converted.category(), "data");
    }

    #[test]
    fn test_io_error_is_not_user_error() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let converted: AnalyticsError = err.into();
        assert!(!converted.is_user_error());
        assert!(converted.to_string().starts_with("IO Error"));
    }
}
