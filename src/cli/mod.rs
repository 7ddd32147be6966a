pub mod lease_menu;
pub mod main_menu;
pub mod property_menu;
pub mod tenant_menu;

use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};

pub(crate) fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

pub(crate) fn prompt_date(prompt: &str) -> anyhow::Result<NaiveDate> {
    loop {
        let raw: String = Input::with_theme(&theme())
            .with_prompt(format!("{} (YYYY-MM-DD)", prompt))
            .interact_text()?;
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => return Ok(date),
            Err(_) => println!("{}", "Invalid date format. Use YYYY-MM-DD.".red()),
        }
    }
}

/// Empty input means "not supplied".
pub(crate) fn prompt_optional(prompt: &str) -> anyhow::Result<Option<String>> {
    let raw: String = Input::with_theme(&theme())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let trimmed = raw.trim();
    Ok(if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    })
}

pub(crate) fn report_error(err: &impl std::fmt::Display) {
    println!("{} {}", "Error:".red().bold(), err);
}
