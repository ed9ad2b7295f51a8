//! Error types for qs-core

use thiserror::Error;

/// Core error type for QlikScan
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Document root is neither a mapping nor a sequence
    #[error("[E001] Document root in {path} is not a mapping or sequence")]
    UnsupportedRoot { path: String },

    /// E002: Type resolution against the catalog failed
    #[error("[E002] Type resolution failed: {message}")]
    TypeResolution { message: String },

    /// E003: IO error
    #[error("[E003] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E004: YAML parse error
    #[error("[E004] YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
