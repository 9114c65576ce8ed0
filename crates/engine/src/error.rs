use connector::error::ConnectorError;
use thiserror::Error;

/// Configuration problems, all surfaced before the first network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse sync config: {0}")]
    Parse(String),

    #[error("No output columns configured")]
    NoColumns,

    #[error("Unsupported type '{column_type}' for column '{column}'")]
    UnsupportedType { column: String, column_type: String },

    #[error("Invalid watermark '{0}': expected an RFC 3339 or 'YYYY-MM-DD HH:MM:SS' timestamp")]
    InvalidWatermark(String),
}

/// Session-level failure. Every fetch error is fatal to the run; the caller
/// decides whether to retry a whole session from its last watermark.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Connector(#[from] ConnectorError),
}
