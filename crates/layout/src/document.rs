//! Whole-document composition.

use angebot_domain::Quote;

use crate::config::DocumentConfig;
use crate::cursor::LayoutCursor;
use crate::elements::Page;
use crate::{sections, table};

/// Lay out a quote onto one fixed-size page.
///
/// Sections run top to bottom in a fixed order with fixed gaps in
/// between. The layout is size-bounded by construction; no overflow
/// check is performed.
pub fn lay_out_quote(quote: &Quote, config: &DocumentConfig) -> Page {
    let mut page = Page::new(config.metrics.width, config.metrics.height);
    let mut cursor = LayoutCursor::new(config.metrics.margin);

    sections::company_header(&mut page, &mut cursor, config);
    cursor.advance(20.0);
    sections::quote_info(&mut page, &mut cursor, config, quote);
    cursor.advance(20.0);
    sections::customer_info(&mut page, &mut cursor, config, quote);
    cursor.advance(30.0);
    sections::title(&mut page, &mut cursor, config);
    cursor.advance(20.0);
    table::items_table(&mut page, &mut cursor, config, quote);
    cursor.advance(20.0);
    sections::summary(&mut page, &mut cursor, config, quote);
    cursor.advance(30.0);
    sections::footer(&mut page, &mut cursor, config, quote);

    log::debug!(
        "laid out quote {} with {} areas as {} elements, final y {:.1}",
        quote.number(),
        quote.areas().len(),
        page.elements.len(),
        cursor.y()
    );

    page
}
