//! Submission planning
//!
//! Turns a shift request into the (date, shop) pairs to publish and the
//! summary text to post. Pure; no I/O.

use crate::types::{ShiftDay, ShiftEntry, ShiftRequest};
use std::fmt::Write;

/// Placeholder line when no day has a selected shop
pub const NO_DAYS_SELECTED: &str = "（希望日なし）";

/// Placeholder remarks when the remarks field is empty
pub const NO_REMARKS: &str = "なし";

/// Submission plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPlan {
    /// Staff member submitting
    pub staff_name: String,
    /// Target month (`YYYY-MM`)
    pub month: String,
    /// Pairs to publish, in date-then-shop order
    pub entries: Vec<ShiftEntry>,
    /// Remarks attached to every page
    pub remarks: String,
    /// Aggregated summary text
    pub summary: String,
}

/// Create a submission plan from a request
pub fn create_submission_plan(request: &ShiftRequest) -> SubmissionPlan {
    SubmissionPlan {
        staff_name: request.staff_name.clone(),
        month: request.month.clone(),
        entries: shift_entries(&request.days),
        remarks: request.remarks.clone(),
        summary: build_summary_text(&request.days, &request.remarks),
    }
}

/// Days sorted by date; the sort is stable so input order breaks ties
fn sorted_days(days: &[ShiftDay]) -> Vec<&ShiftDay> {
    let mut sorted: Vec<&ShiftDay> = days.iter().collect();
    sorted.sort_by_key(|d| d.date);
    sorted
}

/// Flatten the day × shop selection into ordered pairs
///
/// Days with no selected shop contribute nothing.
pub fn shift_entries(days: &[ShiftDay]) -> Vec<ShiftEntry> {
    sorted_days(days)
        .into_iter()
        .flat_map(|day| {
            day.desired_shops.iter().map(|shop| ShiftEntry {
                date: day.date,
                shop: shop.clone(),
            })
        })
        .collect()
}

/// Build the summary text posted to chat
///
/// One `"{date} : {shops}"` line per day with a selection, in date order,
/// followed by the remarks line.
pub fn build_summary_text(days: &[ShiftDay], remarks: &str) -> String {
    let mut text = String::new();

    let selected: Vec<&ShiftDay> = sorted_days(days)
        .into_iter()
        .filter(|d| !d.desired_shops.is_empty())
        .collect();

    if selected.is_empty() {
        let _ = writeln!(text, "{NO_DAYS_SELECTED}");
    } else {
        for day in selected {
            let _ = writeln!(
                text,
                "{} : {}",
                day.date.format("%Y-%m-%d"),
                day.desired_shops.join(", ")
            );
        }
    }

    let remarks = if remarks.is_empty() {
        NO_REMARKS
    } else {
        remarks
    };
    let _ = write!(text, "備考: {remarks}");

    text
}
