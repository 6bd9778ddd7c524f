//! Outbound services for Notion and Chatwork
//!
//! Each service sits behind a trait so the submission workflow can run
//! against real APIs or test doubles.

mod chatwork;
mod factory;
mod notion;

pub use chatwork::{ChatworkService, format_chatwork_message, test_chatwork_auth};
pub use factory::{Services, create_services};
pub use notion::{NOTION_VERSION, NotionPageRequest, NotionService, test_notion_auth};

use crate::error::Result;
use crate::types::{NotionPage, ShiftDay};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared HTTP client with the default timeout
fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Creates one database record per (date, shop) pair
#[async_trait]
pub trait PagePublisher: Send + Sync {
    /// Create a page for `staff` working at `shop` on `date`
    async fn create_page(
        &self,
        date: NaiveDate,
        staff: &str,
        shop: &str,
        memo: &str,
    ) -> Result<NotionPage>;
}

/// Posts the aggregated summary of a submission
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    /// Post one summary message for the whole request
    async fn post_summary(&self, staff: &str, days: &[ShiftDay], memo: &str) -> Result<()>;
}
