//! Bank holiday record.

use serde::{Deserialize, Serialize};

use super::DateKey;

/// A designated non-working public holiday.
///
/// The field names follow the published gov.uk feed, so a table copied from
/// there deserializes directly.
///
/// # Example
///
/// ```
/// use office_attendance::models::BankHoliday;
///
/// let holiday: BankHoliday =
///     serde_json::from_str(r#"{ "title": "Boxing Day", "date": "2024-12-26" }"#).unwrap();
/// assert_eq!(holiday.date.to_string(), "2024-12-26");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankHoliday {
    /// The name of the holiday (e.g., "Christmas Day").
    pub title: String,
    /// The day of the holiday.
    pub date: DateKey,
}

impl BankHoliday {
    /// Creates a holiday record.
    pub fn new(title: impl Into<String>, date: DateKey) -> Self {
        Self {
            title: title.into(),
            date,
        }
    }
}
