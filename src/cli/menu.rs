//! Main menu for phonebook
//!
//! Uses inquire for clean, reliable terminal interaction.

use anyhow::{anyhow, Result};
use std::io::{self, IsTerminal};
use tracing::warn;

use crate::cli::ui::{clear_screen, prompt_field, select, wait_for_continue, FormResult};
use crate::cli::{
    run_add, run_bulk, run_delete, run_import, run_list, run_page, run_search, run_update,
};
use crate::config::Config;
use crate::db::Database;

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    ImportCsv,
    Add,
    Bulk,
    Update,
    Query,
    Page,
    Delete,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::ImportCsv,
        MenuOption::Add,
        MenuOption::Bulk,
        MenuOption::Update,
        MenuOption::Query,
        MenuOption::Page,
        MenuOption::Delete,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::ImportCsv => "Add data from CSV",
            MenuOption::Add => "Add data via console",
            MenuOption::Bulk => "Add data from list",
            MenuOption::Update => "Update data",
            MenuOption::Query => "Query data",
            MenuOption::Page => "Paginated query",
            MenuOption::Delete => "Delete data",
            MenuOption::Quit => "Exit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }
}

/// Run the interactive main menu
pub fn run_menu(db: &Database, config: &Config) -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            phonebook list\n  \
            phonebook bulk <name> <phone> ...\n  \
            phonebook import <file.csv>\n  \
            Run 'phonebook --help' for all options."
        ));
    }

    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();

    loop {
        // Clear screen - if this fails, continue anyway (degraded but functional)
        let _ = clear_screen();

        let Some(choice_label) = select("phonebook", menu_labels.clone())? else {
            // User pressed Escape
            return Ok(());
        };

        let Some(choice) = MenuOption::from_label(choice_label) else {
            continue;
        };

        if choice == MenuOption::Quit {
            return Ok(());
        }

        // Any command error, storage failures included, is shown and the loop continues
        if let Err(e) = execute_command(db, config, choice) {
            warn!(command = choice.label(), error = %e, "command failed");
            eprintln!("\nError: {}", e);
        }
        wait_for_continue();
    }
}

fn execute_command(db: &Database, config: &Config, choice: MenuOption) -> Result<()> {
    match choice {
        MenuOption::ImportCsv => {
            let Some(path) = prompt_required("CSV file path")? else {
                return Ok(());
            };
            run_import(db, &path, false)
        }
        MenuOption::Add => run_add(db, None, None, None),
        MenuOption::Bulk => run_bulk(db, Vec::new()),
        MenuOption::Update => {
            let Some(field) = select("update", vec!["first name", "phone"])? else {
                return Ok(());
            };
            let Some(id) = prompt_number::<i64>("record ID")? else {
                return Ok(());
            };
            let Some(value) = prompt_required(&format!("new {}", field))? else {
                return Ok(());
            };
            if field == "phone" {
                run_update(db, id, None, Some(value))
            } else {
                run_update(db, id, Some(value), None)
            }
        }
        MenuOption::Query => {
            let Some(mode) = select("filter", vec!["by pattern", "all records"])? else {
                return Ok(());
            };
            if mode == "all records" {
                return run_list(db, false);
            }
            match prompt_field("pattern (part of first name, last name or phone)")? {
                FormResult::Value(pattern) => run_search(db, &pattern, false),
                FormResult::Cancelled => Ok(()),
            }
        }
        MenuOption::Page => {
            let limit = prompt_number_or("limit", config.page_size)?;
            let offset = prompt_number_or("offset", 0u32)?;
            match (limit, offset) {
                (Some(limit), Some(offset)) => run_page(db, limit, offset, false),
                _ => Ok(()),
            }
        }
        MenuOption::Delete => {
            let Some(key) = select("delete by", vec!["first name", "phone"])? else {
                return Ok(());
            };
            let Some(value) = prompt_required(key)? else {
                return Ok(());
            };
            if key == "phone" {
                run_delete(db, None, Some(value))
            } else {
                run_delete(db, Some(value), None)
            }
        }
        MenuOption::Quit => Ok(()),
    }
}

/// Prompt for a non-empty value; `None` when cancelled or left empty
fn prompt_required(label: &str) -> Result<Option<String>> {
    match prompt_field(label)? {
        FormResult::Value(v) if !v.is_empty() => Ok(Some(v)),
        _ => Ok(None),
    }
}

fn prompt_number<T: std::str::FromStr>(label: &str) -> Result<Option<T>> {
    let Some(raw) = prompt_required(label)? else {
        return Ok(None);
    };
    raw.parse()
        .map(Some)
        .map_err(|_| anyhow!("{} must be a number, got {:?}", label, raw))
}

/// Like `prompt_number`, but empty input picks `default`
fn prompt_number_or<T: std::str::FromStr + std::fmt::Display>(
    label: &str,
    default: T,
) -> Result<Option<T>> {
    match prompt_field(&format!("{} [{}]", label, default))? {
        FormResult::Value(v) if v.is_empty() => Ok(Some(default)),
        FormResult::Value(v) => v
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("{} must be a number, got {:?}", label, v)),
        FormResult::Cancelled => Ok(None),
    }
}
