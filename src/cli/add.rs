use anyhow::{anyhow, Result};

use crate::cli::ui::prompt_optional;
use crate::db::Database;
use crate::models::validate_contact;

/// Execute the add command: insert a contact, or update the one with this first name.
pub fn run_add(
    db: &Database,
    first: Option<String>,
    last: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    // If no options provided, run interactive mode
    let (first, last, phone) = if first.is_none() && last.is_none() && phone.is_none() {
        match interactive_mode()? {
            Some(fields) => fields,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    } else {
        (first, last, phone)
    };

    // Names are trimmed, the phone is validated as written
    let first = first
        .map(|f| f.trim().to_string())
        .ok_or_else(|| anyhow!("First name is required."))?;
    let phone = phone.ok_or_else(|| anyhow!("Phone number is required."))?;
    let last = last
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());

    validate_contact(&first, last.as_deref(), &phone)?;

    let existed = db.find_by_name(&first)?.is_some();
    db.upsert_contact(&first, last.as_deref(), &phone)?;

    if existed {
        println!("Updated: {}", first);
    } else {
        println!("Created: {}", first);
    }
    Ok(())
}

fn interactive_mode() -> Result<Option<(Option<String>, Option<String>, Option<String>)>> {
    let Some(first) = prompt_optional("first name")? else {
        return Ok(None);
    };
    let Some(last) = prompt_optional("last name (or leave empty)")? else {
        return Ok(None);
    };
    let Some(phone) = prompt_optional("phone")? else {
        return Ok(None);
    };
    Ok(Some((first, last, phone)))
}
