use serde::{Deserialize, Serialize};

/// A quote recipient.
///
/// Built and edited by the surrounding UI; immutable once a quote
/// snapshot has been taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub city: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    /// Name, address, city and email are required; phone is optional.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.address.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.email.trim().is_empty()
    }
}
