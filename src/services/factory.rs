//! Service factory
//!
//! Creates the outbound services from configuration.

use crate::config::AppConfig;
use crate::error::Result;
use crate::services::{ChatNotifier, ChatworkService, NotionService, PagePublisher};

/// The pair of services a submission talks to
pub struct Services {
    /// Notion page publisher
    pub publisher: Box<dyn PagePublisher>,
    /// Chatwork summary notifier
    pub notifier: Box<dyn ChatNotifier>,
}

/// Create both services from configuration
///
/// Fails with `ConfigurationMissing` before any client is built.
pub fn create_services(config: &AppConfig) -> Result<Services> {
    let notion = config.notion_credentials()?;
    let chatwork = config.chatwork_credentials()?;

    Ok(Services {
        publisher: Box::new(NotionService::new(&notion)),
        notifier: Box::new(ChatworkService::new(&chatwork)),
    })
}
