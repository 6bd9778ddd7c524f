//! Interactive shift request form (default command)

use crate::cli::progress::{CliProgress, print_outcome};
use crate::cli::style::Stylize;
use anstream::println;
use chrono::Local;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use shift_request::calendar::{self, MonthOption, month_options};
use shift_request::config::AppConfig;
use shift_request::error::{Error, Result};
use shift_request::services::create_services;
use shift_request::submit::{FormSession, FormState, ShiftForm, build_summary_text};

/// Run the interactive form
///
/// Loops between editing and submitted until the user stops. Missing
/// credentials are reported before the first prompt.
pub async fn run_form(config: &AppConfig) -> Result<()> {
    if config.staff.is_empty() {
        return Err(Error::ConfigurationMissing("staff list".to_string()));
    }
    if config.shops.is_empty() {
        return Err(Error::ConfigurationMissing("shop list".to_string()));
    }
    let services = create_services(config)?;

    let theme = ColorfulTheme::default();
    let mut session = FormSession::new(config);

    println!("{}", "アルバイト シフト申請フォーム".emphasis());
    println!();

    loop {
        if let FormState::Submitted { request, .. } = session.state() {
            println!();
            println!(
                "{}",
                format!("{} さん / {} の申請内容", request.staff_name, request.month).emphasis()
            );
            println!("{}", build_summary_text(&request.days, &request.remarks));
            println!();

            let again = Confirm::with_theme(&theme)
                .with_prompt("新しい申請を作成しますか？")
                .default(false)
                .interact()?;
            if !again {
                return Ok(());
            }
            session.reset();
            continue;
        }

        if let Some(form) = session.form_mut() {
            edit_form(&theme, config, form)?;
        }

        let preview = match session.state() {
            FormState::Editing(form) => form.to_request()?,
            FormState::Submitted { request, .. } => request.clone(),
        };
        println!();
        println!("{}", build_summary_text(&preview.days, &preview.remarks).muted());
        println!();

        let send = Confirm::with_theme(&theme)
            .with_prompt("シフト申請を送信しますか？")
            .default(true)
            .interact()?;
        if !send {
            continue;
        }

        let outcome = session
            .submit(
                services.publisher.as_ref(),
                services.notifier.as_ref(),
                &CliProgress,
                false,
            )
            .await?;
        print_outcome(&outcome);

        if !outcome.success {
            let retry = Confirm::with_theme(&theme)
                .with_prompt("内容を修正して再送信しますか？")
                .default(true)
                .interact()?;
            if !retry {
                return Ok(());
            }
        }
    }
}

/// Prompt for every field, pre-filled with the current values
fn edit_form(theme: &ColorfulTheme, config: &AppConfig, form: &mut ShiftForm) -> Result<()> {
    let staff_default = form
        .staff_name
        .as_ref()
        .and_then(|name| config.staff.iter().position(|s| s == name))
        .unwrap_or(0);
    let staff_idx = Select::with_theme(theme)
        .with_prompt("スタッフ名を選んでください")
        .items(&config.staff)
        .default(staff_default)
        .interact()?;
    form.select_staff(&config.staff[staff_idx]);

    let months: Vec<String> = month_options(Local::now().date_naive())
        .iter()
        .map(MonthOption::label)
        .collect();
    let month_default = form
        .month
        .as_ref()
        .and_then(|m| months.iter().position(|label| label == m))
        .unwrap_or(0);
    let month_idx = Select::with_theme(theme)
        .with_prompt("申請する月を選んでください")
        .items(&months)
        .default(month_default)
        .interact()?;
    let month = &months[month_idx];
    form.select_month(month)?;

    for date in calendar::days_in_month(month)? {
        let current = form.selections.get(&date).cloned().unwrap_or_default();
        let defaults: Vec<bool> = config.shops.iter().map(|s| current.contains(s)).collect();

        let picked = MultiSelect::with_theme(theme)
            .with_prompt(format!("{} の勤務希望店舗", calendar::day_label(date)))
            .items(&config.shops)
            .defaults(&defaults)
            .interact()?;

        let shops = picked.into_iter().map(|i| config.shops[i].clone()).collect();
        form.set_shops(date, shops)?;
    }

    let remarks: String = Input::with_theme(theme)
        .with_prompt("備考欄（任意）")
        .with_initial_text(form.remarks.clone())
        .allow_empty(true)
        .interact_text()?;
    form.set_remarks(&remarks);

    Ok(())
}
