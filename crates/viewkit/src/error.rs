//! Error types for building and exporting view models.
//!
//! Rendering itself never fails: unknown icon keys resolve to `null` and
//! missing values render empty. Errors are limited to configuration mistakes
//! caught by [`Builder::build`](crate::table::Builder::build) and to
//! serialization at the output boundary.

use thiserror::Error;

/// Error type for view-model construction and serialization.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Two fields in one table share an id.
    #[error("duplicate field id '{id}'")]
    DuplicateField { id: String },

    /// A footer mode was configured on a field kind that cannot honor it.
    #[error("field '{id}' of kind {kind} cannot use a sum footer")]
    InvalidFooter { id: String, kind: &'static str },

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Output could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for viewkit operations.
pub type Result<T> = std::result::Result<T, ViewError>;

impl From<serde_json::Error> for ViewError {
    fn from(err: serde_json::Error) -> Self {
        ViewError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for ViewError {
    fn from(err: serde_yaml::Error) -> Self {
        ViewError::Config(err.to_string())
    }
}

impl From<csv::Error> for ViewError {
    fn from(err: csv::Error) -> Self {
        ViewError::Serialization(err.to_string())
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for ViewError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        ViewError::Serialization(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ViewError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ViewError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ViewError::DuplicateField {
            id: "distance".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate field id 'distance'");

        let err = ViewError::InvalidFooter {
            id: "name".to_string(),
            kind: "text",
        };
        assert!(err.to_string().contains("cannot use a sum footer"));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<u32>("[not, a, number]").unwrap_err();
        let err: ViewError = yaml_err.into();
        assert!(matches!(err, ViewError::Config(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("{").unwrap_err();
        let err: ViewError = json_err.into();
        assert!(matches!(err, ViewError::Serialization(_)));
    }
}
