//! Terminal helpers shared by the interactive commands.

use anyhow::Result;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, InquireError, Select, Text};
use std::io::{self, Write};

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Result type for form inputs that can be cancelled
pub enum FormResult<T> {
    Value(T),
    Cancelled,
}

/// Prompt for a field, trimmed. Empty input yields an empty string.
pub fn prompt_field(field: &str) -> Result<FormResult<String>> {
    let prompt = format!("{}: ", field);

    let result = Text::new(&prompt)
        .with_render_config(minimal_render_config())
        .prompt();

    match result {
        Ok(input) => Ok(FormResult::Value(input.trim().to_string())),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(FormResult::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Prompt for a field, mapping empty input to `None`.
/// Returns `Ok(None)` from the outer option when the user cancels.
pub fn prompt_optional(field: &str) -> Result<Option<Option<String>>> {
    match prompt_field(field)? {
        FormResult::Value(v) if v.is_empty() => Ok(Some(None)),
        FormResult::Value(v) => Ok(Some(Some(v))),
        FormResult::Cancelled => Ok(None),
    }
}

/// Let the user pick one of `options`; `None` on Escape.
pub fn select<T: std::fmt::Display + Clone>(prompt: &str, options: Vec<T>) -> Result<Option<T>> {
    let page_size = options.len().max(1);
    let result = Select::new(prompt, options)
        .with_render_config(minimal_render_config())
        .with_page_size(page_size)
        .with_vim_mode(true)
        .prompt_skippable()?;
    Ok(result)
}

/// Wait for user to press enter to continue
pub fn wait_for_continue() {
    println!();
    let _ = Text::new("[enter]")
        .with_render_config(minimal_render_config())
        .prompt_skippable();
}
