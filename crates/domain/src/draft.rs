use crate::error::DraftError;
use crate::{Customer, Quote, ServiceArea};
use uuid::Uuid;

/// The editable pre-quote state owned by the UI layer.
///
/// Areas are removed by id rather than by list index, so edits against
/// a stale view can never delete the wrong row. [`QuoteDraft::freeze`]
/// validates the draft and snapshots it by value into an immutable
/// [`Quote`]; further edits to the draft do not affect the snapshot.
#[derive(Debug, Clone, Default)]
pub struct QuoteDraft {
    pub customer: Customer,
    areas: Vec<ServiceArea>,
}

impl QuoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn areas(&self) -> &[ServiceArea] {
        &self.areas
    }

    pub fn add_area(&mut self, area: ServiceArea) {
        self.areas.push(area);
    }

    /// Remove by identity. Returns whether an area was removed.
    pub fn remove_area(&mut self, id: Uuid) -> bool {
        let before = self.areas.len();
        self.areas.retain(|area| area.id != id);
        self.areas.len() != before
    }

    /// Running total for on-screen display. Same pricing path the
    /// frozen quote uses.
    pub fn monthly_total(&self) -> f64 {
        self.areas.iter().map(ServiceArea::monthly_price).sum()
    }

    pub fn yearly_total(&self) -> f64 {
        self.monthly_total() * 12.0
    }

    /// Validate and snapshot the draft into an immutable quote with a
    /// fresh id, dated today.
    pub fn freeze(&self) -> Result<Quote, DraftError> {
        if !self.customer.is_valid() {
            return Err(DraftError::InvalidCustomer);
        }
        if self.areas.is_empty() {
            return Err(DraftError::NoAreas);
        }
        if let Some(bad) = self.areas.iter().find(|area| !area.is_valid()) {
            return Err(DraftError::InvalidArea { name: bad.name.clone() });
        }
        Ok(Quote::new(self.customer.clone(), self.areas.clone()))
    }
}
