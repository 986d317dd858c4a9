//! Backend seam between the layout engine and concrete encoders.
//!
//! A [`PageEncoder`] takes a finished [`angebot_layout::Page`] and
//! produces the bytes of a document. Keeping the trait and the error
//! type here lets the generator stay independent of any one backend.

pub mod error;
pub mod traits;

pub use error::RenderError;
pub use traits::PageEncoder;
