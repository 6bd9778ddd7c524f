//! Structural checks for requests loaded from outside the form

use crate::calendar;
use crate::error::{Error, Result};
use crate::types::ShiftRequest;
use std::collections::HashSet;

/// Check that a request is well-formed
///
/// Staff name present, month parses, every date inside the month, no
/// date listed twice. Shop names are left for Notion to judge.
pub fn validate_request(request: &ShiftRequest) -> Result<()> {
    if request.staff_name.trim().is_empty() {
        return Err(Error::InvalidRequest("staff name is empty".to_string()));
    }

    let mut seen = HashSet::new();
    for day in &request.days {
        if !calendar::contains(&request.month, day.date)? {
            return Err(Error::InvalidRequest(format!(
                "{} is outside {}",
                day.date, request.month
            )));
        }
        if !seen.insert(day.date) {
            return Err(Error::InvalidRequest(format!("{} listed twice", day.date)));
        }
    }

    // A request with no days still needs a valid month
    calendar::parse_month(&request.month)?;
    Ok(())
}
