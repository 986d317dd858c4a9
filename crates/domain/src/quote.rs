use crate::{Customer, ServiceArea};
use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How many calendar days a quote stays valid.
pub const VALIDITY_DAYS: u64 = 30;

/// An immutable priced proposal for a customer.
///
/// All derived values (totals, number, validity window) are pure
/// functions of the stored fields; nothing is cached and nothing can be
/// mutated after construction. Item order is preserved and is the
/// render order of the document table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    id: Uuid,
    customer: Customer,
    areas: Vec<ServiceArea>,
    created_at: NaiveDate,
}

impl Quote {
    /// Snapshot a quote with a fresh id, dated today.
    pub fn new(customer: Customer, areas: Vec<ServiceArea>) -> Self {
        Self::with_parts(Uuid::new_v4(), Local::now().date_naive(), customer, areas)
    }

    /// Snapshot with a caller-chosen id and creation date.
    ///
    /// Lets callers pin identity for deterministic output (tests,
    /// re-issuing a stored quote).
    pub fn with_parts(
        id: Uuid,
        created_at: NaiveDate,
        customer: Customer,
        areas: Vec<ServiceArea>,
    ) -> Self {
        Self { id, customer, areas, created_at }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn areas(&self) -> &[ServiceArea] {
        &self.areas
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    /// End of the validity window: exactly 30 calendar days after
    /// creation, not one month.
    pub fn valid_until(&self) -> NaiveDate {
        self.created_at + Days::new(VALIDITY_DAYS)
    }

    /// Sum of the monthly prices of all areas, in render order.
    pub fn monthly_total(&self) -> f64 {
        self.areas.iter().map(ServiceArea::monthly_price).sum()
    }

    /// Always `monthly_total() × 12`; there is no second computation
    /// path for the yearly figure.
    pub fn yearly_total(&self) -> f64 {
        self.monthly_total() * 12.0
    }

    /// Stable quote number, `ANG-YYYYMMDD-XXXXXX`.
    ///
    /// The suffix is the first six hex digits of the id, uppercased. A
    /// `Uuid`'s simple form is always 32 hex chars, so the slice cannot
    /// under-run.
    pub fn number(&self) -> String {
        let hex = self.id.simple().to_string();
        format!(
            "ANG-{}-{}",
            self.created_at.format("%Y%m%d"),
            hex[..6].to_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency;

    fn customer() -> Customer {
        Customer {
            name: "Musterfirma GmbH".into(),
            address: "Beispielweg 7".into(),
            city: "54321 Beispielstadt".into(),
            email: "kontakt@musterfirma.de".into(),
            phone: String::new(),
        }
    }

    fn areas() -> Vec<ServiceArea> {
        vec![
            ServiceArea::new("Büroetage", 100.0, "Büro", frequency::WEEKLY, 1.0),
            ServiceArea::new("Lager", 50.0, "Lager", frequency::MONTHLY, 2.0),
        ]
    }

    #[test]
    fn monthly_total_sums_item_prices() {
        let quote = Quote::new(customer(), areas());
        // 100 × 1.0 × 4 + 50 × 2.0 × 1
        assert_eq!(quote.monthly_total(), 500.0);
    }

    #[test]
    fn yearly_total_is_exactly_twelve_months() {
        let quote = Quote::new(customer(), areas());
        assert_eq!(quote.yearly_total(), quote.monthly_total() * 12.0);
    }

    #[test]
    fn empty_quote_totals_are_zero() {
        let quote = Quote::new(customer(), Vec::new());
        assert_eq!(quote.monthly_total(), 0.0);
        assert_eq!(quote.yearly_total(), 0.0);
    }

    #[test]
    fn number_has_date_segment_and_hex_suffix() {
        let id = Uuid::from_u128(0xdeadbeef_0000_0000_0000_000000000000);
        let created = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let quote = Quote::with_parts(id, created, customer(), areas());

        let number = quote.number();
        assert_eq!(number, "ANG-20250314-DEADBE");
        let (prefix, rest) = number.split_at(4);
        assert_eq!(prefix, "ANG-");
        let (date, suffix) = rest.split_at(8);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
        assert!(
            suffix[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn validity_is_thirty_days_across_year_boundary() {
        let created = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        let quote = Quote::with_parts(Uuid::new_v4(), created, customer(), areas());
        assert_eq!(
            quote.valid_until(),
            NaiveDate::from_ymd_opt(2025, 1, 14).unwrap()
        );
        assert_eq!((quote.valid_until() - quote.created_at()).num_days(), 30);
    }

    #[test]
    fn fresh_quotes_get_distinct_ids() {
        let a = Quote::new(customer(), Vec::new());
        let b = Quote::new(customer(), Vec::new());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.created_at(), b.created_at());
    }
}
