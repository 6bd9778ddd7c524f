//! Notion page publisher

use crate::config::NotionCredentials;
use crate::error::{Error, Result};
use crate::services::{PagePublisher, http_client};
use crate::types::NotionPage;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Notion API version sent with every request
pub const NOTION_VERSION: &str = "2022-06-28";

/// Page-creation body for the shift database
#[derive(Debug, Serialize)]
pub struct NotionPageRequest {
    parent: Parent,
    properties: Properties,
}

#[derive(Debug, Serialize)]
struct Parent {
    database_id: String,
}

#[derive(Debug, Serialize)]
struct Properties {
    #[serde(rename = "タイトル")]
    title: TitleProperty,
    #[serde(rename = "日付")]
    date: DateProperty,
    #[serde(rename = "スタッフ名")]
    staff: SelectProperty,
    #[serde(rename = "店舗")]
    shop: SelectProperty,
    #[serde(rename = "備考")]
    remarks: RichTextProperty,
}

#[derive(Debug, Serialize)]
struct TitleProperty {
    title: Vec<TextContent>,
}

#[derive(Debug, Serialize)]
struct RichTextProperty {
    rich_text: Vec<TextContent>,
}

#[derive(Debug, Serialize)]
struct TextContent {
    text: Text,
}

#[derive(Debug, Serialize)]
struct Text {
    content: String,
}

#[derive(Debug, Serialize)]
struct SelectProperty {
    select: SelectOption,
}

#[derive(Debug, Serialize)]
struct SelectOption {
    name: String,
}

#[derive(Debug, Serialize)]
struct DateProperty {
    date: DateValue,
}

#[derive(Debug, Serialize)]
struct DateValue {
    start: String,
}

fn text(content: &str) -> Vec<TextContent> {
    vec![TextContent {
        text: Text {
            content: content.to_string(),
        },
    }]
}

impl NotionPageRequest {
    /// Build the body for one (date, shop) record
    pub fn new(database_id: &str, date: NaiveDate, staff: &str, shop: &str, memo: &str) -> Self {
        Self {
            parent: Parent {
                database_id: database_id.to_string(),
            },
            properties: Properties {
                title: TitleProperty {
                    title: text(staff),
                },
                date: DateProperty {
                    date: DateValue {
                        start: date.format("%Y-%m-%d").to_string(),
                    },
                },
                staff: SelectProperty {
                    select: SelectOption {
                        name: staff.to_string(),
                    },
                },
                shop: SelectProperty {
                    select: SelectOption {
                        name: shop.to_string(),
                    },
                },
                remarks: RichTextProperty {
                    rich_text: text(memo),
                },
            },
        }
    }
}

/// Notion service using reqwest
pub struct NotionService {
    client: Client,
    api_key: String,
    database_id: String,
    api_base: String,
}

impl NotionService {
    /// Create a new Notion service
    pub fn new(credentials: &NotionCredentials) -> Self {
        Self {
            client: http_client(),
            api_key: credentials.api_key.clone(),
            database_id: credentials.database_id.clone(),
            api_base: credentials.api_base.clone(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v1{}", self.api_base, path)
    }
}

#[async_trait]
impl PagePublisher for NotionService {
    async fn create_page(
        &self,
        date: NaiveDate,
        staff: &str,
        shop: &str,
        memo: &str,
    ) -> Result<NotionPage> {
        let payload = NotionPageRequest::new(&self.database_id, date, staff, shop, memo);
        debug!("Creating Notion page for {date} / {shop}");

        let response = self
            .client
            .post(self.api_url("/pages"))
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            warn!("Notion page creation failed: {} {}", status.as_u16(), body);
            return Err(Error::NotionApi {
                status: status.as_u16(),
                body,
            });
        }

        // The page exists once Notion answers 200/201, whatever the body says
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            warn!("Notion created a page for {date} / {shop} but the response was unreadable: {e}");
            NotionPage::default()
        }))
    }
}

#[derive(Deserialize)]
struct NotionUser {
    name: Option<String>,
    id: String,
}

/// Test Notion authentication
///
/// Returns the integration's display name.
pub async fn test_notion_auth(credentials: &NotionCredentials) -> Result<String> {
    let url = format!("{}/v1/users/me", credentials.api_base);

    let response = http_client()
        .get(&url)
        .bearer_auth(&credentials.api_key)
        .header("Notion-Version", NOTION_VERSION)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::NotionApi {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        });
    }

    let user: NotionUser = response.json().await?;
    Ok(user.name.unwrap_or(user.id))
}
