use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;
use super::is_valid_phone;

pub const NAME_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: String,
}

impl Contact {
    /// Last name for display, `N/A` when absent.
    pub fn last_name_or_na(&self) -> &str {
        self.last_name.as_deref().unwrap_or("N/A")
    }
}

/// First name rule: 1 to 50 characters, no control characters.
pub fn is_valid_first_name(name: &str) -> bool {
    let len = name.chars().count();
    (1..=NAME_MAX_CHARS).contains(&len) && !has_control_chars(name)
}

/// Last name rule: at most 50 characters, no control characters.
pub fn is_valid_last_name(name: &str) -> bool {
    name.chars().count() <= NAME_MAX_CHARS && !has_control_chars(name)
}

// SQLite's length() stops at NUL, so such names would slip past the CHECK constraints
fn has_control_chars(name: &str) -> bool {
    name.chars().any(char::is_control)
}

/// Check every field of a single contact, failing on the first bad one.
pub fn validate_contact(
    first_name: &str,
    last_name: Option<&str>,
    phone: &str,
) -> Result<(), ValidationFailure> {
    if !is_valid_first_name(first_name) {
        return Err(ValidationFailure::FirstName(first_name.to_string()));
    }
    if let Some(last) = last_name {
        if !is_valid_last_name(last) {
            return Err(ValidationFailure::LastName(last.to_string()));
        }
    }
    if !is_valid_phone(phone) {
        return Err(ValidationFailure::Phone(phone.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_length() {
        assert!(!is_valid_first_name(""));
        assert!(is_valid_first_name("A"));
        assert!(is_valid_first_name(&"a".repeat(50)));
        assert!(!is_valid_first_name(&"a".repeat(51)));
        // Counted in characters, not bytes
        assert!(is_valid_first_name(&"é".repeat(50)));
    }

    #[test]
    fn test_names_reject_control_characters() {
        assert!(!is_valid_first_name("\0Ann"));
        assert!(!is_valid_first_name("An\tn"));
        assert!(!is_valid_first_name("Ann\n"));
        assert!(!is_valid_last_name("Le\0e"));
        assert!(is_valid_last_name("O'Neil-Smith"));
    }

    #[test]
    fn test_last_name_may_be_empty() {
        assert!(is_valid_last_name(""));
        assert!(!is_valid_last_name(&"b".repeat(51)));
    }

    #[test]
    fn test_validate_contact_reports_field() {
        assert_eq!(validate_contact("Ann", None, "1234567890"), Ok(()));
        assert_eq!(
            validate_contact("", None, "1234567890"),
            Err(ValidationFailure::FirstName(String::new()))
        );
        assert_eq!(
            validate_contact("Ann", Some(&"x".repeat(60)), "1234567890"),
            Err(ValidationFailure::LastName("x".repeat(60)))
        );
        assert_eq!(
            validate_contact("Ann", Some("Lee"), "123"),
            Err(ValidationFailure::Phone("123".to_string()))
        );
    }

    #[test]
    fn test_last_name_display() {
        let mut contact = Contact {
            id: 1,
            first_name: "Ann".to_string(),
            last_name: None,
            phone: "1234567890".to_string(),
        };
        assert_eq!(contact.last_name_or_na(), "N/A");
        contact.last_name = Some("Lee".to_string());
        assert_eq!(contact.last_name_or_na(), "Lee");
    }
}
