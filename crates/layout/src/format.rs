//! German-locale value formatting for document text.

use chrono::NaiveDate;

/// Formats amounts as German euro strings, e.g. `1.234,56 €`.
///
/// Amounts are rounded to whole cents first so that values like
/// `0.125` do not truncate to `0,12`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuroFormatter;

impl EuroFormatter {
    pub fn format(&self, amount: f64) -> String {
        let cents = (amount * 100.0).round() as i64;
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.abs();
        let euros = cents / 100;
        let rest = cents % 100;

        // Group the euro digits in threes with '.' separators.
        let digits = euros.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        format!("{sign}{grouped},{rest:02} €")
    }
}

/// German date form, e.g. `14.03.2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
