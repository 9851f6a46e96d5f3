use crate::validate::Validator;
use regex::Regex;
use thiserror::Error;

/// Why a field's value was rejected.
///
/// Every rule in this module reports failures through this enum so the
/// shell can surface one consistent message format. The `#[error]` text is
/// the user-facing message and is stored verbatim in the field's error
/// slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("{label} cannot be empty")]
    Empty { label: String },

    #[error("{label} must be {expected}")]
    InvalidFormat { label: String, expected: String },

    #[error("{label} must be between {min} and {max}")]
    OutOfRange { label: String, min: i64, max: i64 },

    #[error("{label} is too short ({actual} characters, minimum {min})")]
    TooShort {
        label: String,
        min: usize,
        actual: usize,
    },

    #[error("{label} is too long ({actual} characters, maximum {max})")]
    TooLong {
        label: String,
        max: usize,
        actual: usize,
    },
}

/// Rule object stored per registered field.
///
/// Rules are evaluated on the caller's thread and never fail for reasons
/// other than the input, so boxing them behind one error type is enough.
pub type BoxedRule = Box<dyn Validator<str, Error = RuleViolation> + Send>;

/// The value must not be empty.
///
/// Matches the classic login-form check: no trimming, a whitespace-only
/// value counts as filled in.
pub struct Required {
    label: String,
}

impl Required {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Validator<str> for Required {
    type Error = RuleViolation;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            Err(RuleViolation::Empty {
                label: self.label.clone(),
            })
        } else {
            Ok(())
        }
    }
}

/// Character-count bounds for text fields.
pub struct Length {
    label: String,
    min: Option<usize>,
    max: Option<usize>,
}

impl Length {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            min: None,
            max: None,
        }
    }

    pub fn with_min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

impl Validator<str> for Length {
    type Error = RuleViolation;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let length = input.chars().count();

        if let Some(min) = self.min {
            if length < min {
                return Err(RuleViolation::TooShort {
                    label: self.label.clone(),
                    min,
                    actual: length,
                });
            }
        }

        if let Some(max) = self.max {
            if length > max {
                return Err(RuleViolation::TooLong {
                    label: self.label.clone(),
                    max,
                    actual: length,
                });
            }
        }

        Ok(())
    }
}

/// The value must parse as an integer inside the given range.
///
/// An empty value is reported as [`RuleViolation::Empty`] rather than a
/// format error so the message matches what the user actually forgot.
pub struct NumericRange {
    label: String,
    min: i64,
    max: i64,
}

impl NumericRange {
    pub fn new(label: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
        }
    }
}

impl Validator<str> for NumericRange {
    type Error = RuleViolation;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.trim().is_empty() {
            return Err(RuleViolation::Empty {
                label: self.label.clone(),
            });
        }

        let number: i64 =
            input
                .trim()
                .parse()
                .map_err(|_| RuleViolation::InvalidFormat {
                    label: self.label.clone(),
                    expected: "a whole number".to_string(),
                })?;

        if number < self.min || number > self.max {
            return Err(RuleViolation::OutOfRange {
                label: self.label.clone(),
                min: self.min,
                max: self.max,
            });
        }

        Ok(())
    }
}

/// The value must match a regular expression.
///
/// Construction compiles the pattern and fails fast on a malformed
/// expression, so a bad rule never reaches registration. `expected`
/// describes the format in the rejection message ("four digits", not the
/// raw pattern).
#[derive(Debug)]
pub struct Pattern {
    label: String,
    pattern: Regex,
    expected: String,
}

impl Pattern {
    pub fn new(
        label: impl Into<String>,
        pattern: &str,
        expected: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            label: label.into(),
            pattern: Regex::new(pattern)?,
            expected: expected.into(),
        })
    }
}

impl Validator<str> for Pattern {
    type Error = RuleViolation;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(RuleViolation::InvalidFormat {
                label: self.label.clone(),
                expected: self.expected.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn required_rejects_only_empty() {
        let rule = Required::new("Username");

        assert_err!(rule.validate(""));
        assert_ok!(rule.validate("a"));
        // No trimming: whitespace counts as input
        assert_ok!(rule.validate("   "));
    }

    #[test]
    fn length_bounds() {
        let rule = Length::new("Password").with_min(2).with_max(5);

        assert_ok!(rule.validate("ab"));
        assert_ok!(rule.validate("abcde"));
        assert_err!(rule.validate("a"));
        assert_err!(rule.validate("abcdef"));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let rule = Length::new("Name").with_max(3);

        assert_ok!(rule.validate("äöü"));
    }

    #[test]
    fn numeric_range_bounds_and_format() {
        let rule = NumericRange::new("Code", 1, 10);

        assert_ok!(rule.validate("5"));
        assert_ok!(rule.validate("1"));
        assert_ok!(rule.validate("10"));
        assert_ok!(rule.validate(" 7 "));

        assert_err!(rule.validate("0"));
        assert_err!(rule.validate("11"));
        assert_err!(rule.validate("abc"));
        assert_err!(rule.validate(""));
    }

    #[test]
    fn numeric_range_reports_empty_as_empty() {
        let rule = NumericRange::new("Code", 1, 10);

        assert_eq!(
            rule.validate("").unwrap_err(),
            RuleViolation::Empty {
                label: "Code".to_string()
            }
        );
    }

    #[test]
    fn pattern_matches() {
        let rule = Pattern::new("Code", r"^\d{4}$", "four digits").unwrap();

        assert_ok!(rule.validate("1234"));
        assert_err!(rule.validate("123"));
        assert_err!(rule.validate("12a4"));
    }

    #[test]
    fn malformed_pattern_fails_at_construction() {
        assert_err!(Pattern::new("Code", r"([unclosed", "anything"));
    }

    #[test]
    fn violation_messages_carry_the_label() {
        let rule = Required::new("Verify code");
        let err = rule.validate("").unwrap_err();

        assert_eq!(err.to_string(), "Verify code cannot be empty");
    }
}
