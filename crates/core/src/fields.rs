//! Helpers shared by every form: trimming, required fields, length limits.

/// Maximum length of short text fields (names, brand, category, location).
pub const MAX_SHORT_TEXT_LENGTH: usize = 120;

/// Maximum length of free-form notes.
pub const MAX_NOTES_LENGTH: usize = 5_000;

/// Trim an optional input, collapsing blank strings to `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Require a non-blank value for `field`, returning it trimmed.
pub fn require(field: &str, value: Option<&str>) -> Result<String, String> {
    normalize_optional(value).ok_or_else(|| format!("{field} is required"))
}

/// Reject values longer than `max` characters.
pub fn check_max_length(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{field} exceeds maximum length of {max} characters"));
    }
    Ok(())
}

/// Length check for an optional value; `None` always passes.
pub fn check_optional_max_length(
    field: &str,
    value: Option<&String>,
    max: usize,
) -> Result<(), String> {
    match value {
        Some(v) => check_max_length(field, v, max),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_becomes_none() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("")), None);
        assert_eq!(normalize_optional(Some("   ")), None);
    }

    #[test]
    fn optional_is_trimmed() {
        assert_eq!(
            normalize_optional(Some("  Petzl ")),
            Some("Petzl".to_string())
        );
    }

    #[test]
    fn require_rejects_missing_and_blank() {
        assert_eq!(require("Name", None).unwrap_err(), "Name is required");
        assert_eq!(require("Name", Some(" \t")).unwrap_err(), "Name is required");
    }

    #[test]
    fn require_returns_trimmed_value() {
        assert_eq!(require("Name", Some(" Headlamp ")).unwrap(), "Headlamp");
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        let value = "é".repeat(MAX_SHORT_TEXT_LENGTH);
        assert!(check_max_length("Name", &value, MAX_SHORT_TEXT_LENGTH).is_ok());

        let too_long = "a".repeat(MAX_SHORT_TEXT_LENGTH + 1);
        let err = check_max_length("Name", &too_long, MAX_SHORT_TEXT_LENGTH).unwrap_err();
        assert!(err.contains("maximum length"));
    }

    #[test]
    fn optional_length_check_skips_none() {
        assert!(check_optional_max_length("Notes", None, 1).is_ok());
        assert!(check_optional_max_length("Notes", Some(&"ab".to_string()), 1).is_err());
    }
}
