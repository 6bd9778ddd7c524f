//! Submission execution
//!
//! Publishes one Notion page per (date, shop) pair, then posts the
//! Chatwork summary. Stops at the first failed page: later pairs are not
//! attempted and no summary is posted. Pages already created stay.

use crate::services::{ChatNotifier, PagePublisher, format_chatwork_message};
use crate::submit::{PageStatus, Phase, ProgressCallback, SubmissionPlan, create_submission_plan};
use crate::types::{ItemResult, ShiftRequest, SubmissionFailure, SubmissionOutcome};
use tracing::{info, warn};

/// Execute a submission
///
/// Every external-call error is captured in the returned outcome.
pub async fn execute_submission(
    request: &ShiftRequest,
    publisher: &dyn PagePublisher,
    notifier: &dyn ChatNotifier,
    progress: &dyn ProgressCallback,
    dry_run: bool,
) -> SubmissionOutcome {
    progress.on_phase(Phase::Planning).await;
    let plan = create_submission_plan(request);

    let mut outcome = SubmissionOutcome {
        success: true,
        item_results: Vec::with_capacity(plan.entries.len()),
        chatwork_success: false,
        failure: None,
    };

    if dry_run {
        progress.on_message("Dry run - nothing will be sent").await;
        report_dry_run(&plan, progress).await;
        return outcome;
    }

    info!(
        "Submitting {} page(s) for {} ({})",
        plan.entries.len(),
        plan.staff_name,
        plan.month
    );

    // Phase: Notion pages
    progress.on_phase(Phase::CreatingPages).await;

    for entry in &plan.entries {
        progress.on_page(entry, PageStatus::Started).await;

        match publisher
            .create_page(entry.date, &plan.staff_name, &entry.shop, &plan.remarks)
            .await
        {
            Ok(page) => {
                progress.on_page(entry, PageStatus::Created(page)).await;
                outcome.item_results.push(ItemResult {
                    date: entry.date,
                    shop: entry.shop.clone(),
                    success: true,
                });
            }
            Err(e) => {
                let message = e.to_string();
                warn!("Page for {} / {} failed: {message}", entry.date, entry.shop);
                progress
                    .on_page(entry, PageStatus::Failed(message.clone()))
                    .await;
                outcome.item_results.push(ItemResult {
                    date: entry.date,
                    shop: entry.shop.clone(),
                    success: false,
                });
                outcome.success = false;
                outcome.failure = Some(SubmissionFailure::Notion {
                    date: entry.date,
                    shop: entry.shop.clone(),
                    message,
                });
                return outcome;
            }
        }
    }

    // Phase: Chatwork summary
    progress.on_phase(Phase::Notifying).await;

    if let Err(e) = notifier
        .post_summary(&plan.staff_name, &request.days, &plan.remarks)
        .await
    {
        let message = e.to_string();
        warn!("Chatwork summary failed: {message}");
        progress.on_notify_failed(&message).await;
        outcome.success = false;
        outcome.failure = Some(SubmissionFailure::Chatwork { message });
        return outcome;
    }

    outcome.chatwork_success = true;
    progress.on_phase(Phase::Complete).await;

    outcome
}

/// Report what would be sent in a dry run
async fn report_dry_run(plan: &SubmissionPlan, progress: &dyn ProgressCallback) {
    if plan.entries.is_empty() {
        progress.on_message("No Notion pages to create").await;
    } else {
        progress.on_message("Would create Notion pages:").await;
        for entry in &plan.entries {
            progress
                .on_message(&format!("  - {} {} ({})", entry.date, entry.shop, plan.staff_name))
                .await;
        }
    }

    progress.on_message("Would post to Chatwork:").await;
    progress
        .on_message(&format_chatwork_message(&plan.staff_name, &plan.summary))
        .await;
}
