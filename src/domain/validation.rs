//! Field-level validation rules shared by create and update paths.
//!
//! Every rule returns the normalized value that is allowed to reach storage
//! (trimmed, lower-cased where applicable) or the precise [`ValidationError`]
//! describing which rule rejected it. Callers at the HTTP boundary collapse
//! these into a single generic response.

use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const ADDRESS_MIN_CHARS: usize = 10;
pub const COMMENT_MAX_CHARS: usize = 500;
pub const PRICE_RANGES: [i64; 4] = [1, 2, 3, 4];
pub const RATINGS: [i64; 5] = [1, 2, 3, 4, 5];
pub const DEFAULT_PRICE_RANGE: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must be at least 2 characters long")]
    NameTooShort,

    #[error("address must be at least 10 characters long")]
    AddressTooShort,

    #[error("price range must be between 1 and 4, got {0}")]
    PriceRangeOutOfRange(i64),

    #[error("invalid email format")]
    InvalidEmail,

    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),

    #[error("comment cannot exceed 500 characters")]
    CommentTooLong,

    #[error("customer {0} does not exist")]
    UnknownCustomer(i64),

    #[error("restaurant {0} does not exist")]
    UnknownRestaurant(i64),

    #[error("{0} is already taken")]
    Duplicate(&'static str),

    #[error("{0} cannot be null")]
    NullField(&'static str),

    #[error("reference to a missing record")]
    DanglingReference,

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

fn trimmed_at_least(value: &str, min: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.chars().count() < min {
        return None;
    }
    Some(trimmed.to_string())
}

/// Restaurant and customer names.
pub fn name(value: &str) -> Result<String, ValidationError> {
    trimmed_at_least(value, NAME_MIN_CHARS).ok_or(ValidationError::NameTooShort)
}

pub fn address(value: &str) -> Result<String, ValidationError> {
    trimmed_at_least(value, ADDRESS_MIN_CHARS).ok_or(ValidationError::AddressTooShort)
}

pub fn price_range(value: i64) -> Result<i64, ValidationError> {
    if PRICE_RANGES.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::PriceRangeOutOfRange(value))
    }
}

/// Emails only need an `@`; the stored form is trimmed and lower-cased.
pub fn email(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() || !value.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(value.to_lowercase().trim().to_string())
}

pub fn rating(value: i64) -> Result<i64, ValidationError> {
    if RATINGS.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::RatingOutOfRange(value))
    }
}

/// An absent comment is stored as the empty string.
pub fn comment(value: Option<&str>) -> Result<String, ValidationError> {
    let Some(value) = value else {
        return Ok(String::new());
    };
    let trimmed = value.trim();
    if trimmed.chars().count() > COMMENT_MAX_CHARS {
        return Err(ValidationError::CommentTooLong);
    }
    Ok(trimmed.to_string())
}
