//! Fixed single-page layout for quote documents.
//!
//! [`lay_out_quote`] turns an immutable quote into a [`Page`] of
//! positioned text runs, rectangles and lines. Sections advance a
//! single [`LayoutCursor`] in a fixed order on one fixed-size page;
//! there is no overflow detection and no reflow. Encoding the page to
//! an output format is a separate concern behind the render crates.

pub mod color;
pub mod config;
pub mod cursor;
pub mod document;
pub mod elements;
pub mod format;
pub mod geometry;
pub mod sections;
pub mod style;
pub mod table;

pub use color::Color;
pub use config::{theme, CompanyInfo, DocumentConfig, PageMetrics};
pub use cursor::LayoutCursor;
pub use document::lay_out_quote;
pub use elements::{
    LayoutElement, LineElement, Page, PositionedElement, RectElement, TextElement,
};
pub use format::{format_date, EuroFormatter};
pub use geometry::Rect;
pub use style::{FontSlant, FontWeight, TextStyle};
