//! Page geometry, issuer identity and document theme.

use crate::color::Color;
use crate::format::EuroFormatter;

/// Fixed page geometry in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageMetrics {
    /// A4 at 72 dpi with a 40pt margin on every side.
    pub const A4: PageMetrics = PageMetrics {
        width: 595.0,
        height: 842.0,
        margin: 40.0,
    };

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

/// Issuer identity printed in the header and footer.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Weiner Gebäudeservice GmbH".into(),
            address: "Musterstraße 123".into(),
            city: "12345 Musterstadt".into(),
            phone: "Tel: +49 123 456789".into(),
            email: "E-Mail: info@weiner-gebaeudeservice.de".into(),
        }
    }
}

/// Everything the layout needs besides the quote itself.
#[derive(Debug, Clone, Default)]
pub struct DocumentConfig {
    pub metrics: PageMetrics,
    pub company: CompanyInfo,
    pub currency: EuroFormatter,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self::A4
    }
}

/// Document color palette.
pub mod theme {
    use super::Color;

    /// Corporate blue used for headings and the table header band.
    pub const ACCENT: Color = Color::rgb(25, 118, 210);
    pub const TEXT: Color = Color::BLACK;
    /// Secondary text such as contact lines and legal notes.
    pub const MUTED: Color = Color::gray(68);
    /// Background of every other table row.
    pub const ROW_SHADE: Color = Color::gray(245);
    /// Hairline rules between table rows.
    pub const RULE: Color = Color::gray(204);
}
