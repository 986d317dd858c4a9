use thiserror::Error;

/// Validation failures raised when freezing a draft into a quote.
///
/// These are the caller-facing precondition checks; the layout and
/// encoding pipeline itself trusts the frozen quote.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("customer is incomplete: name, address, city and email are required")]
    InvalidCustomer,
    #[error("a quote needs at least one service area")]
    NoAreas,
    #[error("service area '{name}' is incomplete or has a non-positive size or price")]
    InvalidArea { name: String },
}
