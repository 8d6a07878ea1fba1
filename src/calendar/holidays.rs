//! Bank holiday lookup.
//!
//! The classifier never hardcodes a holiday calendar. It asks a
//! [`HolidayLookup`] instead, so a different region's table can be swapped in
//! without touching the classification logic.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{BankHoliday, DateKey};

/// Source of bank holiday information.
///
/// A year missing from the source means "no holidays known" for that year,
/// never an error.
pub trait HolidayLookup {
    /// All holidays recorded for `year`, in table order. Empty when the year is
    /// not covered.
    fn holidays_for_year(&self, year: i32) -> &[BankHoliday];

    /// The holiday falling exactly on `date`, if any.
    fn holiday_on(&self, date: NaiveDate) -> Option<&BankHoliday> {
        let key = DateKey::new(date);
        self.holidays_for_year(date.year())
            .iter()
            .find(|holiday| holiday.date == key)
    }
}

/// A static per-year holiday table.
///
/// Keys are four-digit years as strings, matching the shape of the
/// `bank_holidays.yaml` configuration file.
///
/// # Example
///
/// ```
/// use office_attendance::calendar::{HolidayLookup, HolidayTable};
/// use chrono::NaiveDate;
///
/// let table = HolidayTable::england();
/// let early_may = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
/// assert_eq!(table.holiday_on(early_may).unwrap().title, "Early May Bank Holiday");
/// assert!(table.holidays_for_year(2030).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayTable {
    years: BTreeMap<String, Vec<BankHoliday>>,
}

impl HolidayTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday under the year of its date.
    pub fn insert(&mut self, holiday: BankHoliday) {
        self.years
            .entry(holiday.date.date().year().to_string())
            .or_default()
            .push(holiday);
    }

    /// The years covered by the table, ascending.
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.years.keys().map(String::as_str)
    }

    /// Total number of holidays across all years.
    pub fn len(&self) -> usize {
        self.years.values().map(Vec::len).sum()
    }

    /// Whether the table holds no holidays at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Holidays between `start` and `end`, both inclusive, in date order.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&BankHoliday> {
        let (start_key, end_key) = (DateKey::new(start), DateKey::new(end));
        let mut found: Vec<&BankHoliday> = (start.year()..=end.year())
            .flat_map(|year| self.holidays_for_year(year))
            .filter(|holiday| holiday.date >= start_key && holiday.date <= end_key)
            .collect();
        found.sort_by_key(|holiday| holiday.date);
        found
    }

    /// England bank holidays for 2024 and 2025, as published on gov.uk.
    pub fn england() -> Self {
        const ENGLAND: &[(&str, i32, u32, u32)] = &[
            ("New Year's Day", 2024, 1, 1),
            ("Good Friday", 2024, 3, 29),
            ("Easter Monday", 2024, 4, 1),
            ("Early May Bank Holiday", 2024, 5, 6),
            ("Spring Bank Holiday", 2024, 5, 27),
            ("Summer Bank Holiday", 2024, 8, 26),
            ("Christmas Day", 2024, 12, 25),
            ("Boxing Day", 2024, 12, 26),
            ("New Year's Day", 2025, 1, 1),
            ("Good Friday", 2025, 4, 18),
            ("Easter Monday", 2025, 4, 21),
            ("Early May Bank Holiday", 2025, 5, 5),
            ("Spring Bank Holiday", 2025, 5, 26),
            ("Summer Bank Holiday", 2025, 8, 25),
            ("Christmas Day", 2025, 12, 25),
            ("Boxing Day", 2025, 12, 26),
        ];

        let mut table = Self::new();
        for &(title, year, month, day) in ENGLAND {
            if let Some(date) = DateKey::from_ymd(year, month, day) {
                table.insert(BankHoliday::new(title, date));
            }
        }
        table
    }
}

impl HolidayLookup for HolidayTable {
    fn holidays_for_year(&self, year: i32) -> &[BankHoliday] {
        self.years
            .get(&year.to_string())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
