//! Domain model for cleaning-service quotes.
//!
//! A [`Customer`] and a list of priced [`ServiceArea`]s are edited
//! freely inside a [`QuoteDraft`]; freezing the draft validates it and
//! snapshots an immutable [`Quote`], whose totals, number and validity
//! window are pure functions of its fields.

pub mod area;
pub mod customer;
pub mod draft;
pub mod error;
pub mod frequency;
pub mod quote;

pub use area::ServiceArea;
pub use customer::Customer;
pub use draft::QuoteDraft;
pub use error::DraftError;
pub use quote::{Quote, VALIDITY_DAYS};
