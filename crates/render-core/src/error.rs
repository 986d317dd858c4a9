use thiserror::Error;

/// Errors surfaced while encoding or persisting a document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF generation error: {0}")]
    Pdf(String),

    #[error("render error: {0}")]
    Other(String),
}

// lopdf's error type lives in the backend crate's dependency tree, but
// the conversion has to sit next to RenderError for coherence.
impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
