use angebot_layout::Page;

use crate::error::RenderError;

/// Encodes one laid-out page into the bytes of a document.
///
/// Implementations must be deterministic: the same page must always
/// produce the same bytes.
pub trait PageEncoder {
    fn encode(&self, page: &Page) -> Result<Vec<u8>, RenderError>;
}
