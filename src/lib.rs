//! Quote PDF generation for a building-services company.
//!
//! The workspace splits the pipeline into three stages behind this
//! facade: the domain model prices service areas and freezes quotes
//! (`angebot-domain`), the layout engine places every text run, rect
//! and rule on one fixed A4 page (`angebot-layout`), and the encoder
//! turns the page into PDF bytes (`angebot-render-lopdf` behind the
//! `PageEncoder` trait). [`QuotePdfGenerator`] wires the stages
//! together and writes the finished `Angebot_<number>.pdf` atomically.

pub mod error;
pub mod generator;

pub use angebot_domain::{Customer, DraftError, Quote, QuoteDraft, ServiceArea, VALIDITY_DAYS};
pub use angebot_layout::{lay_out_quote, CompanyInfo, DocumentConfig, PageMetrics};
pub use angebot_render_core::{PageEncoder, RenderError};
pub use angebot_render_lopdf::LopdfEncoder;
pub use error::GenerateError;
pub use generator::{quote_file_name, QuoteArtifact, QuotePdfGenerator};
