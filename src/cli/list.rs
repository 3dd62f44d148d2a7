use anyhow::{anyhow, Result};

use crate::cli::display::print_contacts;
use crate::db::Database;

/// Execute the list command (all records, by id)
pub fn run_list(db: &Database, json: bool) -> Result<()> {
    let contacts = db.list_contacts()?;
    print_contacts(&contacts, json)
}

/// Execute the search command
pub fn run_search(db: &Database, pattern: &str, json: bool) -> Result<()> {
    let contacts = db.search_contacts(pattern.trim())?;
    print_contacts(&contacts, json)
}

/// Execute the page command: `limit` records starting after `offset`
pub fn run_page(db: &Database, limit: u32, offset: u32, json: bool) -> Result<()> {
    if limit == 0 {
        return Err(anyhow!("Limit must be greater than zero."));
    }

    let contacts = db.list_contacts_page(limit, offset)?;
    if !json && !contacts.is_empty() {
        let total = db.count_contacts()?;
        let last = offset.saturating_add(contacts.len() as u32);
        println!("Records {}-{} of {}", offset.saturating_add(1), last, total);
    }
    print_contacts(&contacts, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_on_empty_db() {
        let db = Database::open_memory().unwrap();
        run_list(&db, false).unwrap();
        run_search(&db, "ann", true).unwrap();
        run_page(&db, 10, 0, false).unwrap();
    }

    #[test]
    fn test_page_rejects_zero_limit() {
        let db = Database::open_memory().unwrap();
        assert!(run_page(&db, 0, 0, false).is_err());
    }

    #[test]
    fn test_page_past_end() {
        let db = Database::open_memory().unwrap();
        db.upsert_contact("Ann", None, "1234567890").unwrap();
        run_page(&db, 5, 100, false).unwrap();
    }
}
