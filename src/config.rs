//! Application configuration
//!
//! Loaded once at startup from a JSON file, then overridden by environment
//! variables. The resulting [`AppConfig`] is passed by reference to
//! everything that needs it.
//!
//! ```json
//! {
//!   "staff": ["山田", "佐藤"],
//!   "shops": ["渋谷", "上野"],
//!   "notion": { "api_key": "secret_...", "database_id": "..." },
//!   "chatwork": { "api_token": "...", "room_id": "123456" }
//! }
//! ```

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Default Notion API base URL
pub const DEFAULT_NOTION_API_BASE: &str = "https://api.notion.com";

/// Default Chatwork API base URL
pub const DEFAULT_CHATWORK_API_BASE: &str = "https://api.chatwork.com";

const CONFIG_DIR: &str = "shiftreq";
const CONFIG_FILENAME: &str = "config.json";

fn default_notion_api_base() -> String {
    DEFAULT_NOTION_API_BASE.to_string()
}

fn default_chatwork_api_base() -> String {
    DEFAULT_CHATWORK_API_BASE.to_string()
}

/// Notion settings
#[derive(Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Integration token (`NOTION_API_KEY`)
    pub api_key: Option<String>,
    /// Database ID or database URL (`NOTION_DATABASE_ID`)
    pub database_id: Option<String>,
    /// API base URL
    #[serde(default = "default_notion_api_base")]
    pub api_base: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            database_id: None,
            api_base: default_notion_api_base(),
        }
    }
}

// Tokens never reach logs or debug output
impl fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("database_id", &self.database_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Chatwork settings
#[derive(Clone, Serialize, Deserialize)]
pub struct ChatworkConfig {
    /// API token (`CHATWORK_API_TOKEN`)
    pub api_token: Option<String>,
    /// Target room ID (`CHATWORK_ROOM_ID`)
    pub room_id: Option<String>,
    /// API base URL
    #[serde(default = "default_chatwork_api_base")]
    pub api_base: String,
}

impl Default for ChatworkConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            room_id: None,
            api_base: default_chatwork_api_base(),
        }
    }
}

impl fmt::Debug for ChatworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatworkConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("room_id", &self.room_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Staff names offered in the form
    #[serde(default)]
    pub staff: Vec<String>,
    /// Shop names offered for each day
    #[serde(default)]
    pub shops: Vec<String>,
    /// Notion settings
    #[serde(default)]
    pub notion: NotionConfig,
    /// Chatwork settings
    #[serde(default)]
    pub chatwork: ChatworkConfig,
}

/// Resolved Notion credentials
#[derive(Clone)]
pub struct NotionCredentials {
    /// Integration token
    pub api_key: String,
    /// Bare database ID
    pub database_id: String,
    /// API base URL
    pub api_base: String,
}

/// Resolved Chatwork credentials
#[derive(Clone)]
pub struct ChatworkCredentials {
    /// API token
    pub api_token: String,
    /// Target room ID
    pub room_id: String,
    /// API base URL
    pub api_base: String,
}

impl AppConfig {
    /// Default config file location (`<config dir>/shiftreq/config.json`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Load configuration
    ///
    /// Priority for the file:
    /// 1. explicit `path`
    /// 2. `SHIFTREQ_CONFIG` environment variable
    /// 3. [`AppConfig::default_path`], skipped silently when absent
    ///
    /// Environment variables are applied on top of the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| env::var("SHIFTREQ_CONFIG").ok().map(PathBuf::from));

        let mut config = match explicit {
            Some(p) => Self::from_file(&p)?,
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env();
        Ok(config)
    }

    /// Read a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading config from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("invalid config {}: {e}", path.display())))
    }

    /// Override secrets from environment variables
    pub fn apply_env(&mut self) {
        if let Some(v) = non_empty_env("NOTION_API_KEY") {
            self.notion.api_key = Some(v);
        }
        if let Some(v) = non_empty_env("NOTION_DATABASE_ID") {
            self.notion.database_id = Some(v);
        }
        if let Some(v) = non_empty_env("CHATWORK_API_TOKEN") {
            self.chatwork.api_token = Some(v);
        }
        if let Some(v) = non_empty_env("CHATWORK_ROOM_ID") {
            self.chatwork.room_id = Some(v);
        }
    }

    /// Notion credentials, or `ConfigurationMissing`
    pub fn notion_credentials(&self) -> Result<NotionCredentials> {
        let api_key = required(self.notion.api_key.as_deref(), "notion.api_key (NOTION_API_KEY)")?;
        let database_id = required(
            self.notion.database_id.as_deref(),
            "notion.database_id (NOTION_DATABASE_ID)",
        )?;

        Ok(NotionCredentials {
            api_key,
            database_id: parse_database_id(&database_id)?,
            api_base: self.notion.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Chatwork credentials, or `ConfigurationMissing`
    pub fn chatwork_credentials(&self) -> Result<ChatworkCredentials> {
        let api_token = required(
            self.chatwork.api_token.as_deref(),
            "chatwork.api_token (CHATWORK_API_TOKEN)",
        )?;
        let room_id = required(
            self.chatwork.room_id.as_deref(),
            "chatwork.room_id (CHATWORK_ROOM_ID)",
        )?;

        Ok(ChatworkCredentials {
            api_token,
            room_id,
            api_base: self.chatwork.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Check that everything a submission sends to is configured
    pub fn validate_outbound(&self) -> Result<()> {
        self.notion_credentials()?;
        self.chatwork_credentials()?;
        Ok(())
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required(value: Option<&str>, name: &str) -> Result<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| Error::ConfigurationMissing(name.to_string()))
}

fn bare_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[0-9a-fA-F]{32}|[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12})$")
            .expect("hardcoded database id pattern is valid")
    })
}

fn url_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([0-9a-fA-F]{32})$").expect("hardcoded database url pattern is valid")
    })
}

/// Extract a Notion database ID from a bare ID or a database URL
///
/// Accepts `0123…cdef` (32 hex), the dashed UUID form, or a URL such as
/// `https://www.notion.so/workspace/Shifts-0123…cdef?v=…`.
pub fn parse_database_id(input: &str) -> Result<String> {
    let input = input.trim();
    if bare_id_regex().is_match(input) {
        return Ok(input.to_string());
    }

    let last_segment = url::Url::parse(input)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|mut segs| segs.rfind(|s| !s.is_empty()).map(ToString::to_string))
        })
        .ok_or_else(|| Error::Config(format!("cannot parse Notion database id: {input}")))?;

    url_id_regex()
        .captures(&last_segment)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::Config(format!("no database id in Notion URL: {input}")))
}
