/// Errors that can occur during tagrunner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value {value:?} for option '{option}' in [{section}]")]
    InvalidValue {
        section: String,
        option: String,
        value: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for tagrunner operations
pub type Result<T> = std::result::Result<T, Error>;
