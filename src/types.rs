//! Core types for shift-request

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of a shift request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShiftDay {
    /// Calendar date (serialized as `YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Shops the staff member can work at on this day, in selection order
    #[serde(default)]
    pub desired_shops: Vec<String>,
}

/// A staff member's declared availability for one month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShiftRequest {
    /// Staff member submitting the request
    pub staff_name: String,
    /// Target month (`YYYY-MM`)
    pub month: String,
    /// Per-day selections; dates fall within `month` and are unique
    pub days: Vec<ShiftDay>,
    /// Free-text remarks (may be empty)
    #[serde(default)]
    pub remarks: String,
}

/// A single (date, shop) pair, one Notion page each
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftEntry {
    /// Calendar date
    pub date: NaiveDate,
    /// Shop name
    pub shop: String,
}

/// A page created in the Notion database
///
/// Both fields are empty when Notion confirmed creation without a readable body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotionPage {
    /// Page ID
    pub id: String,
    /// Web URL for the page
    #[serde(default)]
    pub url: String,
}

/// Outcome of one page-creation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResult {
    /// Calendar date
    pub date: NaiveDate,
    /// Shop name
    pub shop: String,
    /// Whether the page was created
    pub success: bool,
}

/// Why a submission did not complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// A page-creation call failed; later pairs were not attempted
    Notion {
        /// Date of the failing pair
        date: NaiveDate,
        /// Shop of the failing pair
        shop: String,
        /// Error description
        message: String,
    },
    /// All pages were created but the summary post failed
    Chatwork {
        /// Error description
        message: String,
    },
}

impl std::fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Notion {
                date,
                shop,
                message,
            } => write!(f, "{date} の {shop} への送信に失敗しました: {message}"),
            Self::Chatwork { message } => {
                write!(f, "Chatwork への通知に失敗しました: {message}")
            }
        }
    }
}

/// Aggregate result of a submission, drives user feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// Whether every page was created and the summary was posted
    pub success: bool,
    /// Attempted pairs, in attempt order
    pub item_results: Vec<ItemResult>,
    /// Whether the Chatwork summary was posted
    pub chatwork_success: bool,
    /// The failure that stopped the submission, if any
    pub failure: Option<SubmissionFailure>,
}

/// External service kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Service {
    /// Notion database
    Notion,
    /// Chatwork chat room
    Chatwork,
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Notion => write!(f, "Notion"),
            Self::Chatwork => write!(f, "Chatwork"),
        }
    }
}
