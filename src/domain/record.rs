use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Optional leading `+` followed by 7 to 15 decimal digits.
const PHONE_PATTERN: &str = r"^\+?\d{7,15}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"));

pub const INVALID_PHONE_REASON: &str = "Invalid phone format";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub phone: String,
}

impl Record {
    pub fn new(name: String, phone: String) -> Self {
        Record { name, phone }
    }

    /// Case-insensitive comparison on the whole name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Name contains `pattern` ignoring case, or phone contains it literally.
    pub fn matches_pattern(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(&pattern.to_lowercase()) || self.phone.contains(pattern)
    }

    pub fn matches_name_or_phone(&self, value: &str) -> bool {
        self.name_matches(value) || self.phone == value
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phone)
    }
}

pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Bulk import entry that failed validation and was not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub name: String,
    pub phone: String,
    pub reason: String,
}

impl RejectedEntry {
    pub fn invalid_phone(name: String, phone: String) -> Self {
        Self {
            name,
            phone,
            reason: INVALID_PHONE_REASON.to_string(),
        }
    }
}

impl fmt::Display for RejectedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.name, self.phone, self.reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

impl fmt::Display for UpsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertOutcome::Inserted => write!(f, "Inserted"),
            UpsertOutcome::Updated => write!(f, "Updated"),
        }
    }
}

// TEST
#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn phone_validation() {
        assert!(validate_phone("+1234567")); // plus and 7 digits
        assert!(validate_phone("1234567890123")); // 13 digits
        assert!(validate_phone("+441234567890123")); // plus and 15 digits

        assert!(!validate_phone("1234567890123456")); // 16 digits
        assert!(!validate_phone("12345")); // too short
        assert!(!validate_phone("+"));
        assert!(!validate_phone("12a4567"));
        assert!(!validate_phone("123 4567"));
        assert!(!validate_phone("1234567+"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn phone_validation_accepts_any_decimal_digits() {
        // Arabic-Indic digits
        assert!(validate_phone("١٢٣٤٥٦٧٨"));
        assert!(validate_phone("+١٢٣٤٥٦٧"));
        assert!(!validate_phone("١٢٣٤٥"));
    }

    #[test]
    fn name_matching_ignores_case() {
        let record = Record::new("Dave Jones".to_string(), "5551234567".to_string());

        assert!(record.name_matches("dave jones"));
        assert!(record.name_matches("DAVE JONES"));
        assert!(!record.name_matches("dave"));
    }

    #[test]
    fn pattern_matches_name_substring_or_literal_phone() {
        let record = Record::new("Dave Jones".to_string(), "5551234567".to_string());

        assert!(record.matches_pattern("dave"));
        assert!(record.matches_pattern("ES"));
        assert!(record.matches_pattern("512"));
        assert!(record.matches_pattern(""));
        assert!(!record.matches_pattern("zzz"));
    }

    #[test]
    fn phone_pattern_is_case_sensitive() {
        let record = Record::new("Office".to_string(), "555-EXT".to_string());

        assert!(record.matches_pattern("EXT"));
        // "ext" still matches nothing in the name, and the phone needs exact case
        assert!(!record.matches_pattern("ext"));
    }

    #[test]
    fn delete_match_needs_exact_phone() {
        let record = Record::new("Alice".to_string(), "+2348031234567".to_string());

        assert!(record.matches_name_or_phone("ALICE"));
        assert!(record.matches_name_or_phone("+2348031234567"));
        assert!(!record.matches_name_or_phone("8031234567"));
    }

    #[test]
    fn display_formats() {
        let record = Record::new("Bob".to_string(), "12".to_string());
        let rejected = RejectedEntry::invalid_phone("Bob".to_string(), "12".to_string());

        assert_eq!(record.to_string(), "Bob: 12");
        assert_eq!(rejected.to_string(), "Bob: 12 - Invalid phone format");
        assert_eq!(
            format!("Record {} successfully!", UpsertOutcome::Updated),
            "Record Updated successfully!"
        );
    }
}
