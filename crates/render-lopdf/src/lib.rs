//! PDF backend built on `lopdf`.
//!
//! [`LopdfEncoder`] encodes a laid-out page into a single-page PDF
//! using the base-14 Helvetica family, and [`write_artifact`] persists
//! encoded bytes atomically next to their final path.

pub mod artifact;
pub mod encoder;

pub use artifact::write_artifact;
pub use encoder::LopdfEncoder;
