//! Error taxonomy for document loading, rendering, and export

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FieldmarkError>;

#[derive(Debug, Error)]
pub enum FieldmarkError {
    /// The selected file is not a PDF; nothing was loaded
    #[error("not a PDF file")]
    InvalidFileType,

    /// No document has been loaded into the session yet
    #[error("no document loaded")]
    NoDocument,

    /// No page raster is available to compose an overlay on
    #[error("no page has been rendered yet")]
    NoPageRendered,

    /// The rendering collaborator failed; prior session state is untouched
    #[error("page render failed: {0}")]
    RenderFailure(String),

    /// pdftoppm is not on PATH
    #[error("pdftoppm not found (install poppler-utils)")]
    RendererUnavailable,

    #[error(transparent)]
    Submission(#[from] SubmissionFailure),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Export submission failures, split by whether a retry could help
#[derive(Debug, Error)]
pub enum SubmissionFailure {
    /// Transport-level failure; the caller may retry
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status; not retryable. The
    /// body is kept so the failing selections can be shown to the user.
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}
