//! Shared CLI progress callback and outcome report

use crate::cli::style::{Stream, Stylize, check, cross, hyperlink};
use anstream::{eprintln, print, println};
use async_trait::async_trait;
use shift_request::submit::{PageStatus, Phase, ProgressCallback};
use shift_request::types::{ShiftEntry, SubmissionFailure, SubmissionOutcome};
use std::io::Write;

/// CLI progress callback that prints to stdout with styled output
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Planning => {}
            Phase::Complete => println!("{}", phase.to_string().success()),
            _ => println!("{}...", phase.to_string().emphasis()),
        }
    }

    async fn on_page(&self, entry: &ShiftEntry, status: PageStatus) {
        match status {
            PageStatus::Started => {
                print!("  {} {}... ", entry.date.accent(), entry.shop.accent());
                let _ = std::io::stdout().flush();
            }
            PageStatus::Created(page) => {
                println!("{} {}", check(), hyperlink(Stream::Stdout, "created", &page.url));
            }
            PageStatus::Failed(msg) => {
                println!("{}", cross().for_stdout());
                eprintln!("    {}", msg.error());
            }
        }
    }

    async fn on_notify_failed(&self, message: &str) {
        eprintln!("  {} {}", cross(), message.error());
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}

/// Print the final result of a submission
pub fn print_outcome(outcome: &SubmissionOutcome) {
    println!();

    if outcome.success {
        println!(
            "{} {}",
            check(),
            "すべてのシフト申請が正常に送信されました！".success()
        );
        let count = outcome.item_results.len();
        println!(
            "{}",
            format!(
                "{count} page{} created, summary posted to Chatwork",
                if count == 1 { "" } else { "s" }
            )
            .muted()
        );
        return;
    }

    match &outcome.failure {
        Some(failure @ SubmissionFailure::Notion { .. }) => {
            eprintln!("{} {}", cross(), failure.to_string().error());
            let created = outcome.item_results.iter().filter(|r| r.success).count();
            if created > 0 {
                eprintln!(
                    "  {created} page{} already created will stay in Notion",
                    if created == 1 { "" } else { "s" }
                );
            }
            eprintln!("  Chatwork was not notified");
        }
        Some(failure @ SubmissionFailure::Chatwork { .. }) => {
            eprintln!("{} {}", cross(), failure.to_string().error());
            eprintln!(
                "  All {} Notion page(s) were created",
                outcome.item_results.len()
            );
        }
        None => eprintln!("{} {}", cross(), "Submission failed".error()),
    }
}
