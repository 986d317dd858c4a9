//! The frequency multiplier table.
//!
//! Converts a per-session price into a monthly recurring price. This
//! table is the single source of truth for that conversion; pricing
//! multiplies by it and rendering prints the stored label verbatim, so
//! the two can never diverge. Labels are case-sensitive.

pub const DAILY: &str = "Täglich";
pub const THRICE_WEEKLY: &str = "3x pro Woche";
pub const TWICE_WEEKLY: &str = "2x pro Woche";
pub const WEEKLY: &str = "Wöchentlich";
pub const BIWEEKLY: &str = "14-tägig";
pub const MONTHLY: &str = "Monatlich";

/// All labels the surrounding UI offers, in menu order.
pub const LABELS: [&str; 6] = [
    DAILY,
    THRICE_WEEKLY,
    TWICE_WEEKLY,
    WEEKLY,
    BIWEEKLY,
    MONTHLY,
];

/// Sessions per month for a frequency label.
///
/// Unrecognized labels fall back to 1 rather than failing, so a stored
/// quote with a stale label still prices as a monthly service.
pub fn multiplier(label: &str) -> f64 {
    match label {
        DAILY => 22.0, // ~22 working days per month
        THRICE_WEEKLY => 13.0,
        TWICE_WEEKLY => 8.0,
        WEEKLY => 4.0,
        BIWEEKLY => 2.0,
        MONTHLY => 1.0,
        _ => 1.0,
    }
}
