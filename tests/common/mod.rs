pub mod pdf_assertions;

use angebot::{Customer, DocumentConfig, Quote, QuotePdfGenerator, ServiceArea};
use chrono::NaiveDate;
use lopdf::Document as LopdfDocument;
use uuid::Uuid;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

pub fn sample_customer() -> Customer {
    Customer {
        name: "Musterfirma GmbH".into(),
        address: "Beispielweg 7".into(),
        city: "54321 Beispielstadt".into(),
        email: "kontakt@musterfirma.de".into(),
        phone: "+49 30 1234567".into(),
    }
}

/// Two areas with easy numbers: 100 × 1.0 × 4 + 50 × 2.0 × 1 = 500/month.
pub fn sample_areas() -> Vec<ServiceArea> {
    vec![
        ServiceArea::new("Büroetage", 100.0, "Büro", "Wöchentlich", 1.0),
        ServiceArea::new("Lager", 50.0, "Lager", "Monatlich", 2.0),
    ]
}

/// A quote with pinned id and date for stable numbers and output.
pub fn pinned_quote(areas: Vec<ServiceArea>) -> Quote {
    Quote::with_parts(
        Uuid::from_u128(0xdeadbeef_0000_0000_0000_000000000000),
        NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"),
        sample_customer(),
        areas,
    )
}

pub fn generate(quote: &Quote) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();
    let generator = QuotePdfGenerator::new(DocumentConfig::default());
    GeneratedPdf::from_bytes(generator.render(quote)?)
}
