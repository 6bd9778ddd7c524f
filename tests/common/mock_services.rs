//! Mock Notion and Chatwork services for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use shift_request::error::{Error, Result};
use shift_request::services::{ChatNotifier, PagePublisher};
use shift_request::submit::{PageStatus, Phase, ProgressCallback};
use shift_request::types::{NotionPage, ShiftDay, ShiftEntry};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `create_page`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePageCall {
    pub date: NaiveDate,
    pub staff: String,
    pub shop: String,
    pub memo: String,
}

/// Call record for `post_summary`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummaryCall {
    pub staff: String,
    pub days: Vec<ShiftDay>,
    pub memo: String,
}

/// Mock page publisher
///
/// - Auto-incrementing page IDs
/// - Call tracking for verification
/// - Error injection for a specific (date, shop) pair or every call
pub struct MockPublisher {
    next_id: AtomicU64,
    calls: Mutex<Vec<CreatePageCall>>,
    fail_on: Mutex<Option<(NaiveDate, String)>>,
    fail_all: Mutex<Option<String>>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            calls: Mutex::new(Vec::new()),
            fail_on: Mutex::new(None),
            fail_all: Mutex::new(None),
        }
    }

    /// Make `create_page` fail for one pair
    pub fn fail_on(&self, date: NaiveDate, shop: &str) {
        *self.fail_on.lock().unwrap() = Some((date, shop.to_string()));
    }

    /// Make every `create_page` call fail
    pub fn fail_all(&self, msg: &str) {
        *self.fail_all.lock().unwrap() = Some(msg.to_string());
    }

    /// Get all `create_page` calls
    pub fn get_calls(&self) -> Vec<CreatePageCall> {
        self.calls.lock().unwrap().clone()
    }

    /// (date, shop) pairs in call order
    pub fn called_pairs(&self) -> Vec<(NaiveDate, String)> {
        self.get_calls()
            .into_iter()
            .map(|c| (c.date, c.shop))
            .collect()
    }
}

#[async_trait]
impl PagePublisher for MockPublisher {
    async fn create_page(
        &self,
        date: NaiveDate,
        staff: &str,
        shop: &str,
        memo: &str,
    ) -> Result<NotionPage> {
        self.calls.lock().unwrap().push(CreatePageCall {
            date,
            staff: staff.to_string(),
            shop: shop.to_string(),
            memo: memo.to_string(),
        });

        if let Some(msg) = self.fail_all.lock().unwrap().as_ref() {
            return Err(Error::NotionApi {
                status: 503,
                body: msg.clone(),
            });
        }

        if let Some((d, s)) = self.fail_on.lock().unwrap().as_ref() {
            if *d == date && s == shop {
                return Err(Error::NotionApi {
                    status: 400,
                    body: "validation_error".to_string(),
                });
            }
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(NotionPage {
            id: format!("page-{id}"),
            url: format!("https://www.notion.so/page-{id}"),
        })
    }
}

/// Mock summary notifier
pub struct MockNotifier {
    calls: Mutex<Vec<PostSummaryCall>>,
    error: Mutex<Option<u16>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            error: Mutex::new(None),
        }
    }

    /// Make `post_summary` fail with the given status
    pub fn fail_with_status(&self, status: u16) {
        *self.error.lock().unwrap() = Some(status);
    }

    /// Get all `post_summary` calls
    pub fn get_calls(&self) -> Vec<PostSummaryCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatNotifier for MockNotifier {
    async fn post_summary(&self, staff: &str, days: &[ShiftDay], memo: &str) -> Result<()> {
        self.calls.lock().unwrap().push(PostSummaryCall {
            staff: staff.to_string(),
            days: days.to_vec(),
            memo: memo.to_string(),
        });

        if let Some(status) = *self.error.lock().unwrap() {
            return Err(Error::ChatworkApi {
                status,
                body: "internal error".to_string(),
            });
        }
        Ok(())
    }
}

/// Progress callback that records what it was told
pub struct RecordingProgress {
    pub phases: Mutex<Vec<Phase>>,
    pub pages: Mutex<Vec<(ShiftEntry, PageStatus)>>,
    pub notify_failures: Mutex<Vec<String>>,
    pub messages: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self {
            phases: Mutex::new(Vec::new()),
            pages: Mutex::new(Vec::new()),
            notify_failures: Mutex::new(Vec::new()),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn phases(&self) -> Vec<Phase> {
        self.phases.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }

    async fn on_page(&self, entry: &ShiftEntry, status: PageStatus) {
        self.pages.lock().unwrap().push((entry.clone(), status));
    }

    async fn on_notify_failed(&self, message: &str) {
        self.notify_failures
            .lock()
            .unwrap()
            .push(message.to_string());
    }

    async fn on_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
