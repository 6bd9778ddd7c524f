//! Month and day helpers for the request form

use crate::error::{Error, Result};
use chrono::{Datelike, Months, NaiveDate};

/// Number of months offered, starting with the current one
pub const MONTH_OPTION_COUNT: u32 = 3;

/// A month the user can request shifts for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthOption {
    /// First day of the month
    pub first_day: NaiveDate,
}

impl MonthOption {
    /// `YYYY-MM` label
    pub fn label(&self) -> String {
        self.first_day.format("%Y-%m").to_string()
    }
}

/// Current month plus the next two, as of `today`
pub fn month_options(today: NaiveDate) -> Vec<MonthOption> {
    let first = today.with_day(1).unwrap_or(today);
    (0..MONTH_OPTION_COUNT)
        .filter_map(|i| first.checked_add_months(Months::new(i)))
        .map(|first_day| MonthOption { first_day })
        .collect()
}

/// Parse a `YYYY-MM` label into the first day of that month
pub fn parse_month(month: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map_err(|_| Error::InvalidRequest(format!("month must be YYYY-MM, got {month:?}")))
}

/// Every date of the given `YYYY-MM` month, in order
pub fn days_in_month(month: &str) -> Result<Vec<NaiveDate>> {
    let first = parse_month(month)?;
    Ok(first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .collect())
}

/// Whether `date` falls within the `YYYY-MM` month
pub fn contains(month: &str, date: NaiveDate) -> Result<bool> {
    let first = parse_month(month)?;
    Ok(date.year() == first.year() && date.month() == first.month())
}

/// Label shown next to each day's shop selection, e.g. `06/01 (Sun)`
pub fn day_label(date: NaiveDate) -> String {
    date.format("%m/%d (%a)").to_string()
}
