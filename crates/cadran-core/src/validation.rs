//! Keystroke-level validation of spinner field text.
//!
//! Each field parses against a [`UnitRange`]: hours 1-12 in meridian mode,
//! 0-23 otherwise, minutes and seconds 0-59. A failed parse on any one
//! field invalidates the whole control; the control recovers as soon as one
//! valid edit lands.

use std::fmt;

/// Validation outcome for a field or for the whole control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Validation passed.
    Valid,
    /// Validation failed with an error message.
    Invalid(String),
}

impl ValidationResult {
    /// Check if validation passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if validation failed.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Get the error message if invalid.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Invalid(msg) => Some(msg),
            Self::Valid => None,
        }
    }
}

/// Inclusive integer bounds for one spinner field's typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRange {
    min: u8,
    max: u8,
    name: &'static str,
}

impl UnitRange {
    /// Hour bounds in 24-hour display mode.
    #[must_use]
    pub const fn hours_24() -> Self {
        Self {
            min: 0,
            max: 23,
            name: "hours",
        }
    }

    /// Hour bounds in 12-hour (meridian) display mode.
    #[must_use]
    pub const fn hours_12() -> Self {
        Self {
            min: 1,
            max: 12,
            name: "hours",
        }
    }

    /// Minute bounds.
    #[must_use]
    pub const fn minutes() -> Self {
        Self {
            min: 0,
            max: 59,
            name: "minutes",
        }
    }

    /// Second bounds.
    #[must_use]
    pub const fn seconds() -> Self {
        Self {
            min: 0,
            max: 59,
            name: "seconds",
        }
    }

    /// Parse raw field text as a small non-negative integer within bounds.
    ///
    /// Leading zeros are accepted; anything non-numeric, negative, or out of
    /// range is rejected.
    #[must_use]
    pub fn parse(&self, raw: &str) -> Option<u8> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let value: u32 = trimmed.parse().ok()?;
        if value < u32::from(self.min) || value > u32::from(self.max) {
            return None;
        }
        Some(value as u8)
    }

    /// Validate raw field text against these bounds.
    #[must_use]
    pub fn validate(&self, raw: &str) -> ValidationResult {
        if self.parse(raw).is_some() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(format!(
                "{} must be between {} and {}",
                self.name, self.min, self.max
            ))
        }
    }
}

impl fmt::Display for UnitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.name, self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // ValidationResult Tests
    // =========================================================================

    #[test]
    fn test_validation_result_valid() {
        assert!(ValidationResult::Valid.is_valid());
        assert!(!ValidationResult::Valid.is_invalid());
        assert_eq!(ValidationResult::Valid.error(), None);
    }

    #[test]
    fn test_validation_result_invalid() {
        let result = ValidationResult::Invalid("bad".to_string());
        assert!(!result.is_valid());
        assert!(result.is_invalid());
        assert_eq!(result.error(), Some("bad"));
    }

    // =========================================================================
    // UnitRange Parse Tests
    // =========================================================================

    #[test]
    fn test_hours_24_bounds() {
        let range = UnitRange::hours_24();
        assert_eq!(range.parse("0"), Some(0));
        assert_eq!(range.parse("23"), Some(23));
        assert_eq!(range.parse("24"), None);
    }

    #[test]
    fn test_hours_12_bounds() {
        let range = UnitRange::hours_12();
        assert_eq!(range.parse("1"), Some(1));
        assert_eq!(range.parse("12"), Some(12));
        assert_eq!(range.parse("0"), None);
        assert_eq!(range.parse("16"), None);
    }

    #[test]
    fn test_minutes_and_seconds_bounds() {
        assert_eq!(UnitRange::minutes().parse("59"), Some(59));
        assert_eq!(UnitRange::minutes().parse("60"), None);
        assert_eq!(UnitRange::seconds().parse("00"), Some(0));
        assert_eq!(UnitRange::seconds().parse("61"), None);
    }

    #[test]
    fn test_parse_accepts_leading_zeros() {
        assert_eq!(UnitRange::hours_24().parse("08"), Some(8));
        assert_eq!(UnitRange::minutes().parse("007"), Some(7));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let range = UnitRange::minutes();
        assert_eq!(range.parse("pizza"), None);
        assert_eq!(range.parse(""), None);
        assert_eq!(range.parse("  "), None);
        assert_eq!(range.parse("-5"), None);
        assert_eq!(range.parse("1.5"), None);
        assert_eq!(range.parse("1e2"), None);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(UnitRange::minutes().parse(" 30 "), Some(30));
    }

    #[test]
    fn test_validate_messages() {
        let result = UnitRange::hours_12().validate("16");
        assert!(result.is_invalid());
        assert_eq!(result.error(), Some("hours must be between 1 and 12"));

        assert!(UnitRange::hours_24().validate("16").is_valid());
    }
}
