//! Unified error handling for the documentation bundler.

use thiserror::Error;

/// Result type alias for traversal operations.
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Errors that abort a traversal or the surrounding run.
///
/// Per-page failures never surface here; they are contained by the crawl
/// loop as [`RenderError`] and logged.
#[derive(Error, Debug)]
pub enum CrawlError {
    /// The seed URL was empty or blank
    #[error("seed URL must not be empty")]
    EmptySeed,

    /// Could not establish the WebDriver session
    #[error("WebDriver session error: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Export-stage failure
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

/// A per-page rendering failure. The traversal skips the page and continues.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The page body did not appear within the wait bound
    #[error("timed out waiting for {url}")]
    Timeout { url: String },

    /// Navigation or page-source retrieval failed
    #[error("failed to load {url}: {source}")]
    Navigation {
        url: String,
        source: fantoccini::error::CmdError,
    },
}

/// Errors raised while assembling export artifacts.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing an artifact to disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the page records failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The PDF engine reported a rendering failure
    #[error("PDF engine error: {0}")]
    Engine(#[from] anyhow::Error),
}
