//! Renders a sample quote PDF into a directory.
//!
//! Usage: `angebot [output-dir]` (defaults to the current directory).

use std::path::PathBuf;

use angebot::{Customer, DocumentConfig, QuoteDraft, QuotePdfGenerator, ServiceArea};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir: PathBuf = std::env::args().nth(1).unwrap_or_else(|| ".".into()).into();

    let mut draft = QuoteDraft::new();
    draft.customer = Customer {
        name: "Musterfirma GmbH".into(),
        address: "Beispielweg 7".into(),
        city: "54321 Beispielstadt".into(),
        email: "kontakt@musterfirma.de".into(),
        phone: "+49 30 1234567".into(),
    };
    draft.add_area(ServiceArea::new("Büroetage 1", 250.0, "Büro", "Täglich", 0.8));
    draft.add_area(ServiceArea::new("Empfangsbereich", 80.0, "Empfang", "Wöchentlich", 1.2));
    draft.add_area(ServiceArea::new("Lagerhalle", 600.0, "Lager", "Monatlich", 0.5));

    let quote = draft.freeze()?;
    println!("Angebot {}", quote.number());
    println!("Monatlich: {:.2} EUR", quote.monthly_total());
    println!("Jährlich:  {:.2} EUR", quote.yearly_total());

    let generator = QuotePdfGenerator::new(DocumentConfig::default());
    let artifact = generator.write_to_dir(&quote, &out_dir)?;
    println!("Geschrieben: {}", artifact.path.display());

    Ok(())
}
