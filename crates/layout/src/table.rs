//! The service-area table.
//!
//! Fixed column positions, a filled header band and parity-shaded body
//! rows. Body rows are one and a half header rows tall so the area
//! cell fits a second line with the size.

use angebot_domain::Quote;

use crate::config::{theme, DocumentConfig};
use crate::cursor::LayoutCursor;
use crate::elements::Page;
use crate::geometry::Rect;
use crate::style::TextStyle;

pub const HEADER_ROW_HEIGHT: f32 = 25.0;
pub const BODY_ROW_HEIGHT: f32 = HEADER_ROW_HEIGHT * 1.5;

// Column x offsets from the left margin.
pub const COL_NAME: f32 = 5.0;
pub const COL_TYPE: f32 = 150.0;
pub const COL_FREQUENCY: f32 = 280.0;
pub const COL_UNIT_PRICE: f32 = 370.0;
pub const COL_MONTHLY: f32 = 450.0;

/// Top edge of body row `index`, relative to the table top.
pub fn row_top(index: usize) -> f32 {
    HEADER_ROW_HEIGHT + index as f32 * BODY_ROW_HEIGHT
}

/// Rows shade on even indices, starting with the first.
pub fn is_shaded(index: usize) -> bool {
    index % 2 == 0
}

/// Draw the full table at the cursor and advance past it.
pub fn items_table(
    page: &mut Page,
    cursor: &mut LayoutCursor,
    config: &DocumentConfig,
    quote: &Quote,
) {
    let margin = config.metrics.margin;
    let width = config.metrics.content_width();
    let header_style = TextStyle::bold(9.0, crate::Color::WHITE);
    let cell_style = TextStyle::regular(9.0, theme::TEXT);
    let price_style = TextStyle::bold(9.0, theme::TEXT);

    page.fill_rect(
        Rect::new(margin, cursor.y(), width, HEADER_ROW_HEIGHT),
        theme::ACCENT,
    );
    let header_baseline = cursor.y() + 17.0;
    page.text(margin + COL_NAME, header_baseline, "Bereich", header_style);
    page.text(margin + COL_TYPE, header_baseline, "Art / Fläche", header_style);
    page.text(margin + COL_FREQUENCY, header_baseline, "Häufigkeit", header_style);
    page.text(margin + COL_UNIT_PRICE, header_baseline, "Preis/m²", header_style);
    page.text(margin + COL_MONTHLY, header_baseline, "Monatlich", header_style);
    cursor.advance(HEADER_ROW_HEIGHT);

    for (index, area) in quote.areas().iter().enumerate() {
        if is_shaded(index) {
            page.fill_rect(
                Rect::new(margin, cursor.y(), width, BODY_ROW_HEIGHT),
                theme::ROW_SHADE,
            );
        }

        let first_line = cursor.y() + 15.0;
        let second_line = cursor.y() + 27.0;
        page.text(margin + COL_NAME, first_line, &area.name, cell_style);
        page.text(margin + COL_TYPE, first_line, &area.area_type, cell_style);
        page.text(
            margin + COL_TYPE,
            second_line,
            format!("{} m²", area.size_sqm),
            cell_style,
        );
        page.text(margin + COL_FREQUENCY, first_line, &area.frequency, cell_style);
        page.text(
            margin + COL_UNIT_PRICE,
            first_line,
            config.currency.format(area.price_per_sqm),
            cell_style,
        );
        page.text(
            margin + COL_MONTHLY,
            first_line,
            config.currency.format(area.monthly_price()),
            price_style,
        );

        cursor.advance(BODY_ROW_HEIGHT);
        page.stroke_line(margin, cursor.y(), width, 1.0, theme::RULE);
    }

    cursor.advance(10.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::LayoutElement;
    use angebot_domain::{Customer, ServiceArea};

    fn quote_with(areas: Vec<ServiceArea>) -> Quote {
        let customer = Customer {
            name: "Musterfirma GmbH".into(),
            address: "Beispielweg 7".into(),
            city: "54321 Beispielstadt".into(),
            email: "kontakt@musterfirma.de".into(),
            phone: String::new(),
        };
        Quote::new(customer, areas)
    }

    fn three_areas() -> Vec<ServiceArea> {
        vec![
            ServiceArea::new("Büroetage", 100.0, "Büro", "Wöchentlich", 1.0),
            ServiceArea::new("Lager", 50.0, "Lager", "Monatlich", 2.0),
            ServiceArea::new("Empfang", 25.0, "Empfang", "Täglich", 1.5),
        ]
    }

    #[test]
    fn row_geometry_is_fixed() {
        assert_eq!(row_top(0), 25.0);
        assert_eq!(row_top(1), 62.5);
        assert_eq!(row_top(2), 100.0);
        assert!(is_shaded(0));
        assert!(!is_shaded(1));
        assert!(is_shaded(2));
    }

    #[test]
    fn shades_every_other_row() {
        let config = DocumentConfig::default();
        let mut page = Page::new(595.0, 842.0);
        let mut cursor = LayoutCursor::new(0.0);

        items_table(&mut page, &mut cursor, &config, &quote_with(three_areas()));

        let shaded: Vec<f32> = page
            .elements
            .iter()
            .filter_map(|el| match &el.element {
                LayoutElement::Rect(rect) if rect.fill == theme::ROW_SHADE => Some(el.y),
                _ => None,
            })
            .collect();
        // Rows 0 and 2 of 3.
        assert_eq!(shaded, [row_top(0), row_top(2)]);
    }

    #[test]
    fn draws_a_rule_under_every_row() {
        let config = DocumentConfig::default();
        let mut page = Page::new(595.0, 842.0);
        let mut cursor = LayoutCursor::new(0.0);

        items_table(&mut page, &mut cursor, &config, &quote_with(three_areas()));

        let rules = page
            .elements
            .iter()
            .filter(|el| matches!(&el.element, LayoutElement::Line(line) if line.color == theme::RULE))
            .count();
        assert_eq!(rules, 3);
    }

    #[test]
    fn advances_past_the_table_plus_gap() {
        let config = DocumentConfig::default();
        let mut page = Page::new(595.0, 842.0);
        let mut cursor = LayoutCursor::new(200.0);

        items_table(&mut page, &mut cursor, &config, &quote_with(three_areas()));

        assert_eq!(cursor.y(), 200.0 + 25.0 + 3.0 * 37.5 + 10.0);
    }

    #[test]
    fn empty_quote_still_gets_the_header_band() {
        let config = DocumentConfig::default();
        let mut page = Page::new(595.0, 842.0);
        let mut cursor = LayoutCursor::new(0.0);

        items_table(&mut page, &mut cursor, &config, &quote_with(Vec::new()));

        let header_texts: Vec<_> = page.text_runs().map(|(_, t)| t.content.as_str()).collect();
        assert_eq!(
            header_texts,
            ["Bereich", "Art / Fläche", "Häufigkeit", "Preis/m²", "Monatlich"]
        );
        assert_eq!(cursor.y(), 35.0);
    }
}
