//! Submission workflow
//!
//! Handles sending a shift request out:
//! 1. Planning - derive (date, shop) pairs and the summary text
//! 2. Execution - create Notion pages, then post the Chatwork summary
//! 3. Session - the Editing/Submitted state around repeated submissions

mod execute;
mod plan;
mod progress;
mod session;
mod validate;

pub use execute::execute_submission;
pub use plan::{
    NO_DAYS_SELECTED, NO_REMARKS, SubmissionPlan, build_summary_text, create_submission_plan,
    shift_entries,
};
pub use progress::{NoopProgress, PageStatus, Phase, ProgressCallback};
pub use session::{FormSession, FormState, ShiftForm};
pub use validate::validate_request;
