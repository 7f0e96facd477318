use thiserror::Error;

/// Main error type for the answer engine
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Regex compilation errors (normalizer construction)
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Threshold configuration errors
    #[error("Invalid threshold '{name}': {value}")]
    Threshold { name: String, value: f64 },

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for ValidatorError {
    fn from(s: String) -> Self {
        ValidatorError::Other(s)
    }
}

impl From<&str> for ValidatorError {
    fn from(s: &str) -> Self {
        ValidatorError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ValidatorError>;
