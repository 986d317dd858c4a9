//! End-to-end quote PDF generation.

use std::path::{Path, PathBuf};

use angebot_domain::Quote;
use angebot_layout::{lay_out_quote, DocumentConfig};
use angebot_render_core::PageEncoder;
use angebot_render_lopdf::{write_artifact, LopdfEncoder};

use crate::error::GenerateError;

/// A quote document written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteArtifact {
    pub path: PathBuf,
    pub file_name: String,
}

/// File name derived from the quote number, `Angebot_<number>.pdf`.
///
/// Quote numbers only contain ASCII letters, digits and dashes, so the
/// name is safe on every filesystem without escaping.
pub fn quote_file_name(quote: &Quote) -> String {
    format!("Angebot_{}.pdf", quote.number())
}

/// Lays out quotes and encodes them through a [`PageEncoder`].
///
/// The encoder is a type parameter so tests can substitute a fake
/// backend; production code uses the default [`LopdfEncoder`].
pub struct QuotePdfGenerator<E: PageEncoder = LopdfEncoder> {
    config: DocumentConfig,
    encoder: E,
}

impl QuotePdfGenerator {
    pub fn new(config: DocumentConfig) -> Self {
        Self::with_encoder(config, LopdfEncoder::new())
    }
}

impl<E: PageEncoder> QuotePdfGenerator<E> {
    pub fn with_encoder(config: DocumentConfig, encoder: E) -> Self {
        Self { config, encoder }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Encode the quote document into PDF bytes.
    pub fn render(&self, quote: &Quote) -> Result<Vec<u8>, GenerateError> {
        let page = lay_out_quote(quote, &self.config);
        let bytes = self.encoder.encode(&page)?;
        log::info!("rendered quote {} ({} bytes)", quote.number(), bytes.len());
        Ok(bytes)
    }

    /// Render the quote and write it into `dir` under its canonical
    /// file name. The write is atomic.
    pub fn write_to_dir(&self, quote: &Quote, dir: &Path) -> Result<QuoteArtifact, GenerateError> {
        let bytes = self.render(quote)?;
        let file_name = quote_file_name(quote);
        let path = write_artifact(dir, &file_name, &bytes)?;
        Ok(QuoteArtifact { path, file_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angebot_domain::{Customer, ServiceArea};
    use angebot_layout::Page;
    use angebot_render_core::RenderError;
    use chrono::NaiveDate;
    use uuid::Uuid;

    struct FailingEncoder;

    impl PageEncoder for FailingEncoder {
        fn encode(&self, _page: &Page) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::Pdf("boom".into()))
        }
    }

    fn quote() -> Quote {
        let customer = Customer {
            name: "Musterfirma GmbH".into(),
            address: "Beispielweg 7".into(),
            city: "54321 Beispielstadt".into(),
            email: "kontakt@musterfirma.de".into(),
            phone: String::new(),
        };
        Quote::with_parts(
            Uuid::from_u128(0xdeadbeef_0000_0000_0000_000000000000),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            customer,
            vec![ServiceArea::new("Büro", 100.0, "Büro", "Wöchentlich", 1.0)],
        )
    }

    #[test]
    fn file_name_embeds_the_quote_number() {
        assert_eq!(quote_file_name(&quote()), "Angebot_ANG-20250314-DEADBE.pdf");
    }

    #[test]
    fn encoder_failures_surface_as_render_errors() {
        let generator = QuotePdfGenerator::with_encoder(DocumentConfig::default(), FailingEncoder);
        let err = generator.render(&quote()).unwrap_err();
        assert!(matches!(err, GenerateError::Render(_)));
    }

    #[test]
    fn renders_pdf_bytes_with_the_default_encoder() {
        let generator = QuotePdfGenerator::new(DocumentConfig::default());
        let bytes = generator.render(&quote()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
