//! Form session state machine
//!
//! `Editing` collects selections; a successful submit moves to
//! `Submitted`, which keeps the request for display. `reset` returns to
//! an empty `Editing` form. The configuration is borrowed, never reset.

use crate::calendar;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::services::{ChatNotifier, PagePublisher};
use crate::submit::{ProgressCallback, execute_submission, validate_request};
use crate::types::{ShiftDay, ShiftRequest, SubmissionOutcome};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Transient selections of one request being edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftForm {
    /// Chosen staff member
    pub staff_name: Option<String>,
    /// Chosen month (`YYYY-MM`)
    pub month: Option<String>,
    /// Shops chosen per day
    pub selections: BTreeMap<NaiveDate, Vec<String>>,
    /// Remarks text
    pub remarks: String,
}

impl ShiftForm {
    /// Load a complete request into a form
    pub fn from_request(request: &ShiftRequest) -> Result<Self> {
        validate_request(request)?;
        Ok(Self {
            staff_name: Some(request.staff_name.clone()),
            month: Some(request.month.clone()),
            selections: request
                .days
                .iter()
                .map(|d| (d.date, d.desired_shops.clone()))
                .collect(),
            remarks: request.remarks.clone(),
        })
    }

    /// Choose the staff member
    pub fn select_staff(&mut self, name: &str) {
        self.staff_name = Some(name.to_string());
    }

    /// Choose the month; selections outside it are dropped
    pub fn select_month(&mut self, month: &str) -> Result<()> {
        let first = calendar::parse_month(month)?;
        self.selections
            .retain(|date, _| calendar::contains(month, *date).unwrap_or(false));
        debug!("Month set to {}", first.format("%Y-%m"));
        self.month = Some(month.to_string());
        Ok(())
    }

    /// Set the shops chosen for one day
    pub fn set_shops(&mut self, date: NaiveDate, shops: Vec<String>) -> Result<()> {
        let month = self
            .month
            .as_deref()
            .ok_or_else(|| Error::InvalidRequest("choose a month first".to_string()))?;
        if !calendar::contains(month, date)? {
            return Err(Error::InvalidRequest(format!("{date} is outside {month}")));
        }
        self.selections.insert(date, shops);
        Ok(())
    }

    /// Set the remarks text
    pub fn set_remarks(&mut self, remarks: &str) {
        self.remarks = remarks.to_string();
    }

    /// Snapshot the form as a request
    pub fn to_request(&self) -> Result<ShiftRequest> {
        let staff_name = self
            .staff_name
            .clone()
            .ok_or_else(|| Error::InvalidRequest("no staff member chosen".to_string()))?;
        let month = self
            .month
            .clone()
            .ok_or_else(|| Error::InvalidRequest("no month chosen".to_string()))?;

        Ok(ShiftRequest {
            staff_name,
            month,
            days: self
                .selections
                .iter()
                .map(|(date, shops)| ShiftDay {
                    date: *date,
                    desired_shops: shops.clone(),
                })
                .collect(),
            remarks: self.remarks.clone(),
        })
    }
}

/// Session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Collecting selections
    Editing(ShiftForm),
    /// Request sent; kept for display until reset
    Submitted {
        /// What was sent
        request: ShiftRequest,
        /// How it went
        outcome: SubmissionOutcome,
    },
}

/// One user's form session
pub struct FormSession<'a> {
    config: &'a AppConfig,
    state: FormState,
}

impl<'a> FormSession<'a> {
    /// Start a session with an empty form
    pub fn new(config: &'a AppConfig) -> Self {
        Self {
            config,
            state: FormState::Editing(ShiftForm::default()),
        }
    }

    /// Static configuration the session was started with
    pub const fn config(&self) -> &AppConfig {
        self.config
    }

    /// Current state
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Whether the last submission completed
    pub const fn is_submitted(&self) -> bool {
        matches!(self.state, FormState::Submitted { .. })
    }

    /// The form being edited, `None` once submitted
    pub fn form_mut(&mut self) -> Option<&mut ShiftForm> {
        match &mut self.state {
            FormState::Editing(form) => Some(form),
            FormState::Submitted { .. } => None,
        }
    }

    /// Submit the current form
    ///
    /// Fails with `ConfigurationMissing` before any external call when
    /// Notion or Chatwork settings are absent. Service failures come back
    /// inside the outcome; the session only moves to `Submitted` when the
    /// whole submission succeeded.
    pub async fn submit(
        &mut self,
        publisher: &dyn PagePublisher,
        notifier: &dyn ChatNotifier,
        progress: &dyn ProgressCallback,
        dry_run: bool,
    ) -> Result<SubmissionOutcome> {
        let FormState::Editing(form) = &self.state else {
            return Err(Error::InvalidRequest(
                "request already submitted; reset the form first".to_string(),
            ));
        };

        self.config.validate_outbound()?;
        let request = form.to_request()?;

        let outcome = execute_submission(&request, publisher, notifier, progress, dry_run).await;

        if outcome.success && !dry_run {
            self.state = FormState::Submitted {
                request,
                outcome: outcome.clone(),
            };
        }

        Ok(outcome)
    }

    /// Clear all selections and return to editing
    pub fn reset(&mut self) {
        self.state = FormState::Editing(ShiftForm::default());
    }
}
