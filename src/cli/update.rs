use anyhow::{anyhow, Result};

use crate::db::Database;
use crate::error::ValidationFailure;
use crate::models::{is_valid_first_name, is_valid_phone};

/// Execute the update command for the contact with `id`.
pub fn run_update(
    db: &Database,
    id: i64,
    first: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    let updated = match (first, phone) {
        (Some(first), None) => {
            let first = first.trim().to_string();
            if !is_valid_first_name(&first) {
                return Err(ValidationFailure::FirstName(first).into());
            }
            db.update_first_name(id, &first)?
        }
        (None, Some(phone)) => {
            if !is_valid_phone(&phone) {
                return Err(ValidationFailure::Phone(phone).into());
            }
            db.update_phone(id, &phone)?
        }
        (None, None) => return Err(anyhow!("No updates provided. Use --first or --phone.")),
        (Some(_), Some(_)) => {
            return Err(anyhow!("Update one field at a time: --first or --phone."))
        }
    };

    if updated {
        println!("Record updated successfully.");
    } else {
        println!("No contact found with ID: {}", id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> (Database, i64) {
        let db = Database::open_memory().unwrap();
        db.upsert_contact("Ann", Some("Lee"), "1234567890").unwrap();
        let id = db.find_by_name("Ann").unwrap().unwrap().id;
        (db, id)
    }

    #[test]
    fn test_update_phone() {
        let (db, id) = setup_test_db();

        run_update(&db, id, None, Some("+15550001111".to_string())).unwrap();

        assert_eq!(db.get_contact(id).unwrap().unwrap().phone, "+15550001111");
    }

    #[test]
    fn test_update_first_name() {
        let (db, id) = setup_test_db();

        run_update(&db, id, Some("Anna".to_string()), None).unwrap();

        let contact = db.get_contact(id).unwrap().unwrap();
        assert_eq!(contact.first_name, "Anna");
        assert_eq!(contact.last_name.as_deref(), Some("Lee"));
    }

    #[test]
    fn test_update_rejects_invalid_phone() {
        let (db, id) = setup_test_db();

        assert!(run_update(&db, id, None, Some("12345".to_string())).is_err());
        assert_eq!(db.get_contact(id).unwrap().unwrap().phone, "1234567890");
    }

    #[test]
    fn test_update_rejects_padded_phone() {
        let (db, id) = setup_test_db();

        let err = run_update(&db, id, None, Some(" 0987654321".to_string())).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ValidationFailure>(),
            Some(&ValidationFailure::Phone(" 0987654321".to_string()))
        );
        assert_eq!(db.get_contact(id).unwrap().unwrap().phone, "1234567890");
    }

    #[test]
    fn test_update_requires_exactly_one_field() {
        let (db, id) = setup_test_db();

        assert!(run_update(&db, id, None, None).is_err());
        let both = run_update(&db, id, Some("X".to_string()), Some("1234567890".to_string()));
        assert!(both.is_err());
    }

    #[test]
    fn test_update_missing_id_is_not_an_error() {
        let (db, _) = setup_test_db();
        run_update(&db, 9999, None, Some("1234567890".to_string())).unwrap();
    }
}
