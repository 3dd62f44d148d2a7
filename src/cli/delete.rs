use anyhow::{anyhow, Result};

use crate::db::Database;

/// Execute the delete command by first name or by phone.
pub fn run_delete(db: &Database, name: Option<String>, phone: Option<String>) -> Result<()> {
    let deleted = match (name, phone) {
        (Some(name), None) => {
            let name = name.trim();
            if name.is_empty() {
                return Err(anyhow!("Name cannot be empty."));
            }
            db.delete_by_name(name)?
        }
        (None, Some(phone)) => {
            let phone = phone.trim();
            if phone.is_empty() {
                return Err(anyhow!("Phone cannot be empty."));
            }
            db.delete_by_phone(phone)?
        }
        _ => return Err(anyhow!("Delete by exactly one of --name or --phone.")),
    };

    if deleted == 0 {
        println!("No records found for deletion.");
    } else {
        println!("Deleted {} record(s).", deleted);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Database {
        let db = Database::open_memory().unwrap();
        db.upsert_contact("Ann", None, "1234567890").unwrap();
        db.upsert_contact("Bob", None, "5551234567").unwrap();
        db.upsert_contact("Cy", None, "5551234567").unwrap();
        db
    }

    #[test]
    fn test_delete_by_name() {
        let db = setup_test_db();
        run_delete(&db, Some("Ann".to_string()), None).unwrap();
        assert!(db.find_by_name("Ann").unwrap().is_none());
        assert_eq!(db.count_contacts().unwrap(), 2);
    }

    #[test]
    fn test_delete_by_phone_removes_all_matches() {
        let db = setup_test_db();
        run_delete(&db, None, Some("5551234567".to_string())).unwrap();
        assert_eq!(db.count_contacts().unwrap(), 1);
    }

    #[test]
    fn test_delete_nonexistent() {
        let db = setup_test_db();
        run_delete(&db, Some("Nobody".to_string()), None).unwrap();
        assert_eq!(db.count_contacts().unwrap(), 3);
    }

    #[test]
    fn test_empty_identifier_error() {
        let db = setup_test_db();
        assert!(run_delete(&db, Some("   ".to_string()), None).is_err());
        assert!(run_delete(&db, None, None).is_err());
    }
}
