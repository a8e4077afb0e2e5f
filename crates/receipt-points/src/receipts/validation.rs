//! Field-level checks applied to a receipt before it reaches the scoring rules.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::Receipt;

// ASCII only: word characters, whitespace, hyphen and ampersand. Retailer names and
// item descriptions share this pattern, as do all amounts.
static TEXT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Za-z_\t\n\f\r &-]+$").expect("text pattern compiles"));
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("amount pattern compiles"));
// chrono accepts single-digit fields, so the shape is checked first.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));
static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("time pattern compiles"));

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_FORMAT: &str = "%H:%M";

/// First validation failure found on a submitted receipt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: String },
    #[error("{field} contains unsupported characters")]
    InvalidText { field: String },
    #[error("{field} must be an amount with two decimal places, got '{value}'")]
    InvalidAmount { field: String, value: String },
    #[error("{field} must be a calendar date formatted YYYY-MM-DD, got '{value}'")]
    InvalidDate { field: String, value: String },
    #[error("{field} must be a 24-hour time formatted HH:MM, got '{value}'")]
    InvalidTime { field: String, value: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Missing { field }
            | ValidationError::InvalidText { field }
            | ValidationError::InvalidAmount { field, .. }
            | ValidationError::InvalidDate { field, .. }
            | ValidationError::InvalidTime { field, .. } => field,
        }
    }
}

/// Checks every field of `receipt`, reporting the first violation in document order.
pub fn validate_receipt(receipt: &Receipt) -> Result<(), ValidationError> {
    check_text("retailer", &receipt.retailer)?;
    check_date("purchaseDate", &receipt.purchase_date)?;
    check_time("purchaseTime", &receipt.purchase_time)?;

    for (index, item) in receipt.items.iter().enumerate() {
        check_text(
            &format!("items[{index}].shortDescription"),
            &item.short_description,
        )?;
        check_amount(&format!("items[{index}].price"), &item.price)?;
    }

    check_amount("total", &receipt.total)
}

fn check_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Missing {
            field: field.to_string(),
        });
    }
    if !TEXT_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidText {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn check_amount(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Missing {
            field: field.to_string(),
        });
    }
    if !AMOUNT_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidAmount {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_date(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Missing {
            field: field.to_string(),
        });
    }
    let invalid = || ValidationError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    };
    if !DATE_PATTERN.is_match(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| invalid())
}

fn check_time(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Missing {
            field: field.to_string(),
        });
    }
    let invalid = || ValidationError::InvalidTime {
        field: field.to_string(),
        value: value.to_string(),
    };
    if !TIME_PATTERN.is_match(value) {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map(|_| ())
        .map_err(|_| invalid())
}
