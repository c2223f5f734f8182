use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all gomend operations.
#[derive(Debug, Error, Diagnostic)]
pub enum GomendError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest could not be located or read.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Run gomend from a Go module directory or pass --manifest"))]
    Manifest { message: String },

    /// The global configuration file is unreadable or malformed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.gomend/config.toml for syntax errors"))]
    Config { message: String },

    /// An external process could not be started.
    #[error("Process error: {message}")]
    Process { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
