use regex::Regex;
use std::sync::OnceLock;

/// Optional leading '+', then 10 to 15 ASCII digits, nothing else.
const PHONE_PATTERN: &str = r"^\+?[0-9]{10,15}$";

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"))
}

/// Check a phone number against the format rule.
///
/// No normalization happens: spaces, dashes or parentheses make the number
/// invalid. Every entry path (bulk, CSV, single add, update) uses this check.
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count_boundaries() {
        assert!(!is_valid_phone("123456789"));
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn test_plus_prefix() {
        assert!(is_valid_phone("+1234567890"));
        assert!(is_valid_phone("+123456789012345"));
        assert!(!is_valid_phone("++1234567890"));
        assert!(!is_valid_phone("1234567890+"));
        assert!(!is_valid_phone("+"));
    }

    #[test]
    fn test_no_normalization() {
        assert!(!is_valid_phone("555 123 4567"));
        assert!(!is_valid_phone("555-123-4567"));
        assert!(!is_valid_phone("(555)1234567"));
        assert!(!is_valid_phone(" 5551234567"));
        assert!(!is_valid_phone("5551234567\n"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode \d but not phone digits
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
        assert!(!is_valid_phone("12345abcde"));
    }
}
