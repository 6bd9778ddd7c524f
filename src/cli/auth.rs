//! Auth command - test and explain API credentials

use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use clap::Subcommand;
use indicatif::ProgressBar;
use shift_request::config::AppConfig;
use shift_request::error::Result;
use shift_request::services::{test_chatwork_auth, test_notion_auth};
use shift_request::types::Service;
use std::time::Duration;

/// What to do with a service's credentials
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    /// Test authentication
    Test,
    /// Show setup instructions
    Setup,
}

/// Run the auth test command
pub async fn run_auth_test(config: &AppConfig, service: Service) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Testing {service} authentication..."));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = match service {
        Service::Notion => match config.notion_credentials() {
            Ok(creds) => test_notion_auth(&creds)
                .await
                .map(|name| (name, creds.database_id)),
            Err(e) => Err(e),
        },
        Service::Chatwork => match config.chatwork_credentials() {
            Ok(creds) => test_chatwork_auth(&creds)
                .await
                .map(|name| (name, creds.room_id)),
            Err(e) => Err(e),
        },
    };
    spinner.finish_and_clear();

    let (name, target) = result?;
    println!("{} Authenticated as: {}", check(), name.accent());
    let label = match service {
        Service::Notion => "Database",
        Service::Chatwork => "Room",
    };
    println!("{}", format!("{label}: {target}").muted());
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup(service: Service) {
    let config_path = AppConfig::default_path()
        .map_or_else(|| "<config dir>/shiftreq/config.json".to_string(), |p| p.display().to_string());

    match service {
        Service::Notion => {
            println!("{}", "Notion Setup".emphasis());
            println!("============");
            println!();
            println!("1. Create an internal integration: https://www.notion.so/my-integrations");
            println!("2. Share the shift database with the integration");
            println!("3. The database needs these properties:");
            println!("     タイトル (title), 日付 (date), スタッフ名 (select),");
            println!("     店舗 (select), 備考 (rich text)");
            println!();
            println!("Then either set NOTION_API_KEY and NOTION_DATABASE_ID,");
            println!("or fill in \"notion\" in {config_path}");
            println!("The database id may also be given as the database URL.");
        }
        Service::Chatwork => {
            println!("{}", "Chatwork Setup".emphasis());
            println!("==============");
            println!();
            println!("1. Issue an API token: Chatwork > Service integration > API token");
            println!("2. Find the room id in the room URL (#!rid<room id>)");
            println!();
            println!("Then either set CHATWORK_API_TOKEN and CHATWORK_ROOM_ID,");
            println!("or fill in \"chatwork\" in {config_path}");
        }
    }
}

/// Wrapper for auth commands
pub async fn run_auth(config: &AppConfig, service: Service, action: AuthAction) -> Result<()> {
    match action {
        AuthAction::Test => run_auth_test(config, service).await,
        AuthAction::Setup => {
            run_auth_setup(service);
            Ok(())
        }
    }
}
