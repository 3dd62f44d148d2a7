use anyhow::Result;

use crate::models::{BatchResult, Contact};

/// One line per contact, in the phonebook's fixed row format.
pub fn format_contact(contact: &Contact) -> String {
    format!(
        "ID: {}, First Name: {}, Last Name: {}, Phone: {}",
        contact.id,
        contact.first_name,
        contact.last_name_or_na(),
        contact.phone
    )
}

pub fn print_contacts(contacts: &[Contact], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No records found.");
        return Ok(());
    }

    for contact in contacts {
        println!("{}", format_contact(contact));
    }
    Ok(())
}

/// Lines shown after a bulk operation.
pub fn batch_summary(result: &BatchResult) -> Vec<String> {
    let mut lines = vec![format!("Accepted: {}", result.accepted_count)];

    if result.is_clean() {
        lines.push("All users inserted/updated successfully.".to_string());
    } else {
        lines.push("Incorrect entries:".to_string());
        for (name, phone) in &result.rejected {
            lines.push(format!("{} — {}", name, phone));
        }
    }
    lines
}

pub fn print_batch_result(result: &BatchResult) {
    for line in batch_summary(result) {
        println!("{}", line);
    }
}
