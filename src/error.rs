use angebot_render_core::RenderError;
use thiserror::Error;

/// Failures while turning a quote into a PDF on disk.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
