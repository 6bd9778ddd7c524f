//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (interactive form, one-shot
//! command, tests) to receive progress updates during a submission.

use crate::types::{NotionPage, ShiftEntry};
use async_trait::async_trait;
use std::fmt;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building pairs and summary
    Planning,
    /// Creating Notion pages
    CreatingPages,
    /// Posting the Chatwork summary
    Notifying,
    /// Submission complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planning => write!(f, "Planning"),
            Self::CreatingPages => write!(f, "Creating Notion pages"),
            Self::Notifying => write!(f, "Posting Chatwork summary"),
            Self::Complete => write!(f, "Done"),
        }
    }
}

/// Page-creation status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    /// Request sent
    Started,
    /// Page created
    Created(NotionPage),
    /// Creation failed with error message
    Failed(String),
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called around each page-creation call
    async fn on_page(&self, entry: &ShiftEntry, status: PageStatus);

    /// Called when the summary post fails
    async fn on_notify_failed(&self, message: &str);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_page(&self, _entry: &ShiftEntry, _status: PageStatus) {}
    async fn on_notify_failed(&self, _message: &str) {}
    async fn on_message(&self, _message: &str) {}
}
