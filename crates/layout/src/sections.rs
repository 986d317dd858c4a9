//! The non-tabular document sections.
//!
//! Each section draws at the cursor and advances past its own content.
//! Advance amounts are fixed per line; nothing is measured.

use angebot_domain::Quote;

use crate::config::{theme, DocumentConfig};
use crate::cursor::LayoutCursor;
use crate::elements::Page;
use crate::format::format_date;
use crate::style::TextStyle;

/// Issuer letterhead with an accent rule underneath.
pub fn company_header(page: &mut Page, cursor: &mut LayoutCursor, config: &DocumentConfig) {
    let margin = config.metrics.margin;
    let title = TextStyle::bold(20.0, theme::ACCENT);
    let contact = TextStyle::regular(10.0, theme::MUTED);

    page.text(margin, cursor.y(), &config.company.name, title);
    cursor.advance(25.0);
    page.text(margin, cursor.y(), &config.company.address, contact);
    cursor.advance(15.0);
    page.text(margin, cursor.y(), &config.company.city, contact);
    cursor.advance(15.0);
    page.text(margin, cursor.y(), &config.company.phone, contact);
    cursor.advance(15.0);
    page.text(margin, cursor.y(), &config.company.email, contact);
    cursor.advance(20.0);

    page.stroke_line(
        margin,
        cursor.y(),
        config.metrics.content_width(),
        2.0,
        theme::ACCENT,
    );
    cursor.advance(10.0);
}

/// Quote number, issue date and the italic validity line.
pub fn quote_info(
    page: &mut Page,
    cursor: &mut LayoutCursor,
    config: &DocumentConfig,
    quote: &Quote,
) {
    let margin = config.metrics.margin;
    let bold = TextStyle::bold(10.0, theme::TEXT);
    let normal = TextStyle::regular(10.0, theme::TEXT);
    let validity = TextStyle::italic(9.0, theme::MUTED);

    page.text(margin, cursor.y(), "Angebotsnummer:", bold);
    cursor.advance(15.0);
    page.text(margin, cursor.y(), quote.number(), normal);
    cursor.advance(20.0);
    page.text(
        margin,
        cursor.y(),
        format!("Datum: {}", format_date(quote.created_at())),
        normal,
    );
    cursor.advance(15.0);
    page.text(
        margin,
        cursor.y(),
        format!("Gültig bis: {}", format_date(quote.valid_until())),
        validity,
    );
    cursor.advance(10.0);
}

/// Recipient block.
pub fn customer_info(
    page: &mut Page,
    cursor: &mut LayoutCursor,
    config: &DocumentConfig,
    quote: &Quote,
) {
    let margin = config.metrics.margin;
    let heading = TextStyle::bold(11.0, theme::TEXT);
    let normal = TextStyle::regular(10.0, theme::TEXT);
    let customer = quote.customer();

    page.text(margin, cursor.y(), "Kunde:", heading);
    cursor.advance(20.0);
    page.text(margin, cursor.y(), &customer.name, normal);
    cursor.advance(15.0);
    page.text(margin, cursor.y(), &customer.address, normal);
    cursor.advance(15.0);
    page.text(margin, cursor.y(), &customer.city, normal);
    cursor.advance(15.0);
    page.text(margin, cursor.y(), format!("E-Mail: {}", customer.email), normal);
    cursor.advance(15.0);
    page.text(margin, cursor.y(), format!("Tel: {}", customer.phone), normal);
    cursor.advance(10.0);
}

/// Document title line.
pub fn title(page: &mut Page, cursor: &mut LayoutCursor, config: &DocumentConfig) {
    let style = TextStyle::bold(16.0, theme::ACCENT);
    page.text(
        config.metrics.margin,
        cursor.y(),
        "Angebot für Reinigungsleistungen",
        style,
    );
    cursor.advance(10.0);
}

/// Monthly and yearly totals with the VAT note.
pub fn summary(
    page: &mut Page,
    cursor: &mut LayoutCursor,
    config: &DocumentConfig,
    quote: &Quote,
) {
    let margin = config.metrics.margin;
    let label_x = margin + 200.0;
    let value_x = margin + 450.0;

    page.text(
        label_x,
        cursor.y(),
        "Monatlicher Gesamtpreis (netto)",
        TextStyle::bold(11.0, theme::TEXT),
    );
    page.text(
        value_x,
        cursor.y(),
        config.currency.format(quote.monthly_total()),
        TextStyle::bold(14.0, theme::ACCENT),
    );
    cursor.advance(25.0);

    page.text(
        label_x,
        cursor.y(),
        "Jährlicher Gesamtpreis (netto)",
        TextStyle::regular(10.0, theme::TEXT),
    );
    page.text(
        value_x,
        cursor.y(),
        config.currency.format(quote.yearly_total()),
        TextStyle::bold(11.0, theme::TEXT),
    );
    cursor.advance(20.0);

    page.text(
        label_x,
        cursor.y(),
        "zzgl. gesetzlicher Mehrwertsteuer",
        TextStyle::italic(9.0, theme::MUTED),
    );
    cursor.advance(10.0);
}

/// General terms and the closing greeting.
pub fn footer(
    page: &mut Page,
    cursor: &mut LayoutCursor,
    config: &DocumentConfig,
    quote: &Quote,
) {
    let margin = config.metrics.margin;
    let note = TextStyle::regular(8.0, theme::MUTED);
    let bold = TextStyle::bold(10.0, theme::TEXT);

    cursor.advance(20.0);
    page.text(margin, cursor.y(), "Allgemeine Hinweise:", bold);
    cursor.advance(15.0);

    let notes = [
        "• Alle Preise verstehen sich als Nettopreise zzgl. der gesetzlichen Mehrwertsteuer"
            .to_string(),
        "• Die Reinigung erfolgt außerhalb der regulären Geschäftszeiten".to_string(),
        "• Reinigungsmaterial und -geräte werden von uns gestellt".to_string(),
        "• Vertragslaufzeit: 24 Monate mit 3-monatiger Kündigungsfrist".to_string(),
        format!(
            "• Dieses Angebot ist gültig bis {}",
            format_date(quote.valid_until())
        ),
    ];
    for line in notes {
        page.text(margin, cursor.y(), line, note);
        cursor.advance(12.0);
    }
    cursor.advance(15.0);

    page.text(
        margin,
        cursor.y(),
        "Wir freuen uns auf eine erfolgreiche Zusammenarbeit!",
        bold,
    );
    cursor.advance(20.0);
    page.text(margin, cursor.y(), "Mit freundlichen Grüßen", note);
    cursor.advance(15.0);
    page.text(margin, cursor.y(), &config.company.name, note);
}
