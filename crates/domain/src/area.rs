use crate::frequency;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One priced service unit within a quote (a "cleaning area").
///
/// Pricing model: area in m² times price per m², scaled to a monthly
/// price by the frequency multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    /// Stable identity, generated at creation. The draft removes areas
    /// by this id, never by list position.
    pub id: Uuid,
    pub name: String,
    pub size_sqm: f64,
    pub area_type: String,
    pub frequency: String,
    pub price_per_sqm: f64,
}

impl ServiceArea {
    pub fn new(
        name: impl Into<String>,
        size_sqm: f64,
        area_type: impl Into<String>,
        frequency: impl Into<String>,
        price_per_sqm: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            size_sqm,
            area_type: area_type.into(),
            frequency: frequency.into(),
            price_per_sqm,
        }
    }

    /// Monthly price: `size_sqm × price_per_sqm × frequency multiplier`.
    ///
    /// Trusts the validity contract; no rounding is applied here.
    pub fn monthly_price(&self) -> f64 {
        self.size_sqm * self.price_per_sqm * frequency::multiplier(&self.frequency)
    }

    /// Name, type and frequency must be non-blank, size and price
    /// strictly positive.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.size_sqm > 0.0
            && !self.area_type.trim().is_empty()
            && !self.frequency.trim().is_empty()
            && self.price_per_sqm > 0.0
    }
}
