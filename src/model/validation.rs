/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Field level constraints applied when a payload is built
//!
//! Rules are attached to alias table entries and run before any network call.
//! A rule either accepts the value, possibly normalizing it, or fails with
//! [`AppError::Validation`] naming the field and the constraint.

use crate::constants::{ACCOUNT_NUMBER_LEN, ACCOUNT_NUMBER_RAW_LENS};
use crate::error::{AppError, KisResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Constraint attached to a payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Account number: 8 or 10 raw characters, normalized to the first 8
    AccountNumber,
    /// Character count must not exceed the limit
    MaxLength(usize),
    /// Value must be one of the listed wire codes
    OneOf(&'static [&'static str]),
    /// Value must parse as a decimal greater than or equal to zero
    NonNegative,
}

impl Rule {
    /// Checks `value` for `field`, returning the normalized value
    pub fn apply(&self, field: &str, value: &str) -> KisResult<String> {
        match self {
            Rule::AccountNumber => normalize_account_number(value)
                .map_err(|_| AppError::validation(field, account_constraint())),
            Rule::MaxLength(max) => {
                if value.chars().count() > *max {
                    return Err(AppError::validation(
                        field,
                        format!("length must be at most {max}, got {}", value.chars().count()),
                    ));
                }
                Ok(value.to_string())
            }
            Rule::OneOf(allowed) => {
                if allowed.contains(&value) {
                    Ok(value.to_string())
                } else {
                    Err(AppError::validation(
                        field,
                        format!("must be one of {allowed:?}, got {value:?}"),
                    ))
                }
            }
            Rule::NonNegative => {
                let parsed = Decimal::from_str(value.trim()).map_err(|_| {
                    AppError::validation(field, format!("must be a decimal number, got {value:?}"))
                })?;
                if parsed.is_sign_negative() && !parsed.is_zero() {
                    return Err(AppError::validation(
                        field,
                        format!("must not be negative, got {value}"),
                    ));
                }
                Ok(value.trim().to_string())
            }
        }
    }
}

fn account_constraint() -> String {
    format!("length must be one of {ACCOUNT_NUMBER_RAW_LENS:?}")
}

/// Normalizes a raw account number to its canonical 8 character form
///
/// 8 character input is returned unchanged, 10 character input (account number
/// followed by product code) is truncated to the first 8. Any other length fails.
///
/// # Examples
/// ```
/// use kis_client::model::validation::normalize_account_number;
/// assert_eq!(normalize_account_number("1234567801").unwrap(), "12345678");
/// assert!(normalize_account_number("123").is_err());
/// ```
pub fn normalize_account_number(raw: &str) -> KisResult<String> {
    let len = raw.chars().count();
    if !ACCOUNT_NUMBER_RAW_LENS.contains(&len) {
        return Err(AppError::validation("account_number", account_constraint()));
    }
    Ok(raw.chars().take(ACCOUNT_NUMBER_LEN).collect())
}
