//! Submit command - send a request read from a JSON file

use crate::cli::progress::{CliProgress, print_outcome};
use crate::cli::style::Stylize;
use anstream::println;
use shift_request::config::AppConfig;
use shift_request::error::Result;
use shift_request::services::create_services;
use shift_request::submit::{FormSession, ShiftForm, shift_entries};
use shift_request::types::ShiftRequest;
use std::path::Path;

/// Run the submit command
///
/// Returns whether the submission succeeded.
pub async fn run_submit(config: &AppConfig, request_path: &Path, dry_run: bool) -> Result<bool> {
    let contents = std::fs::read_to_string(request_path)?;
    let request: ShiftRequest = serde_json::from_str(&contents)?;
    let form = ShiftForm::from_request(&request)?;

    let pages = shift_entries(&request.days).len();
    println!(
        "Submitting {} for {} ({} page{}):",
        request.month.accent(),
        request.staff_name.accent(),
        pages,
        if pages == 1 { "" } else { "s" }
    );
    println!();

    let services = create_services(config)?;
    let mut session = FormSession::new(config);
    if let Some(editing) = session.form_mut() {
        *editing = form;
    }

    let outcome = session
        .submit(
            services.publisher.as_ref(),
            services.notifier.as_ref(),
            &CliProgress,
            dry_run,
        )
        .await?;

    if !dry_run {
        print_outcome(&outcome);
    }

    Ok(outcome.success)
}
