//! Chatwork summary notifier

use crate::config::ChatworkCredentials;
use crate::error::{Error, Result};
use crate::services::{ChatNotifier, http_client};
use crate::submit::build_summary_text;
use crate::types::ShiftDay;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

const TOKEN_HEADER: &str = "X-ChatWorkToken";

/// Wrap a summary in an info block titled with the sender
pub fn format_chatwork_message(staff: &str, summary: &str) -> String {
    format!("[info][title]{staff} さんからシフト申請が届きました[/title]{summary}[/info]")
}

/// Chatwork service using reqwest
pub struct ChatworkService {
    client: Client,
    api_token: String,
    room_id: String,
    api_base: String,
}

impl ChatworkService {
    /// Create a new Chatwork service
    pub fn new(credentials: &ChatworkCredentials) -> Self {
        Self {
            client: http_client(),
            api_token: credentials.api_token.clone(),
            room_id: credentials.room_id.clone(),
            api_base: credentials.api_base.clone(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/v2/rooms/{}/messages",
            self.api_base,
            urlencoding::encode(&self.room_id)
        )
    }
}

#[async_trait]
impl ChatNotifier for ChatworkService {
    async fn post_summary(&self, staff: &str, days: &[ShiftDay], memo: &str) -> Result<()> {
        let body = format_chatwork_message(staff, &build_summary_text(days, memo));
        debug!("Posting Chatwork summary to room {}", self.room_id);

        let response = self
            .client
            .post(self.messages_url())
            .header(TOKEN_HEADER, &self.api_token)
            .form(&[("body", body.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            warn!("Chatwork post failed: {} {}", status.as_u16(), body);
            return Err(Error::ChatworkApi {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[derive(Deserialize)]
struct ChatworkAccount {
    name: String,
}

/// Test Chatwork authentication
///
/// Returns the account name the token belongs to.
pub async fn test_chatwork_auth(credentials: &ChatworkCredentials) -> Result<String> {
    let url = format!("{}/v2/me", credentials.api_base);

    let response = http_client()
        .get(&url)
        .header(TOKEN_HEADER, &credentials.api_token)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::ChatworkApi {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        });
    }

    let account: ChatworkAccount = response.json().await?;
    Ok(account.name)
}
