use std::error::Error;
use std::io;

/// Common result type for theme operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for theme operations
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON input or output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sitemap error: {0}")]
    Sitemap(String),

    /// CSS minification error
    #[error("CSS error: {0}")]
    Css(String),

    /// Git command failure
    #[error("Git error: {0}")]
    Git(String),

    #[error("{0}")]
    Generic(String),
}
