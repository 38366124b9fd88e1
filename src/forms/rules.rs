//! Field rules shared by the form definitions.
//!
//! Each rule reports a stable code so the form layer can decide which message
//! to surface when a field breaks more than one rule at once.

use std::borrow::Cow;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

pub const REQUIRED: &str = "required";
pub const EMAIL: &str = "email";
pub const CHOICE: &str = "choice";
pub const NUMBER: &str = "number";

/// Loose `local@domain.tld` shape check.
pub static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Rejects empty and whitespace-only values.
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED));
    }
    Ok(())
}

/// Accepts blank values (left to [`required`]) and whole non-negative numbers.
pub fn whole_number(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.parse::<u32>().is_ok() {
        return Ok(());
    }
    Err(ValidationError::new(NUMBER).with_message(Cow::Borrowed("Enter a whole number")))
}

/// Checks that a select value names one of `T`'s variants.
pub fn choice<T: FromStr>(value: &str) -> Result<(), ValidationError> {
    if value.trim().parse::<T>().is_ok() {
        return Ok(());
    }
    Err(ValidationError::new(CHOICE).with_message(Cow::Borrowed("Select one of the options")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::UserRole;

    #[test]
    fn email_shape_matches_expected_inputs() {
        assert!(EMAIL_SHAPE.is_match("a@b.com"));
        assert!(EMAIL_SHAPE.is_match("sarah.johnson@agency.co.uk"));
        assert!(!EMAIL_SHAPE.is_match("a@b"));
        assert!(!EMAIL_SHAPE.is_match("a b@c.com"));
        assert!(!EMAIL_SHAPE.is_match("@b.com"));
    }

    #[test]
    fn required_trims_whitespace() {
        assert!(required("   ").is_err());
        assert!(required("\t\n").is_err());
        assert!(required(" x ").is_ok());
    }

    #[test]
    fn whole_number_allows_blank() {
        assert!(whole_number("").is_ok());
        assert!(whole_number(" 3 ").is_ok());
        assert_eq!(whole_number("-1").unwrap_err().code, NUMBER);
        assert!(whole_number("two").is_err());
    }

    #[test]
    fn choice_checks_variants() {
        assert!(choice::<UserRole>("manager").is_ok());
        assert_eq!(choice::<UserRole>("owner").unwrap_err().code, CHOICE);
    }
}
