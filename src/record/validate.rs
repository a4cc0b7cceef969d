//! Constrained-value checks shared by every record variant.
//!
//! Each validator is a predicate over a raw scalar: it either hands the value back typed (or
//! unchanged) or fails with a [`ValidationError`] naming the offending field. Nothing is
//! normalized; in particular domain names keep the case they were submitted with.

use base64::engine::general_purpose;
use base64::Engine;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A single field that failed its constraint.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {reason}")]
#[allow(clippy::module_name_repetitions)]
pub struct ValidationError {
    /// Dotted path of the field, e.g. `record_val.priority`.
    pub field: String,
    /// Human readable description of the violated constraint.
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Characters permitted in apex, CNAME target and HTTPS target names.
fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

/// Check that `value` is between `min` and `max` characters (inclusive).
///
/// Lengths are counted in Unicode scalar values, not bytes.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when the length is out of bounds.
pub fn bounded_str(
    field: &str,
    value: String,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::new(
            field,
            format!("length must be between {min} and {max} characters, found {len}"),
        ));
    }
    Ok(value)
}

/// Check that `value` is a bounded-length name made only of ASCII letters, digits, `.` and
/// `-`. Upper and lower case letters are both accepted as-is.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` on a length or charset violation.
pub fn domain(
    field: &str,
    value: String,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let value = bounded_str(field, value, min, max)?;
    if value.is_empty() || !value.chars().all(is_domain_char) {
        return Err(ValidationError::new(
            field,
            "must contain only ASCII letters, digits, '.' and '-'",
        ));
    }
    Ok(value)
}

/// Check that `value` fits in an unsigned 16 bit integer.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when `value` is outside `0..=65535`.
pub fn uint16(field: &str, value: i64) -> Result<u16, ValidationError> {
    u16::try_from(value).map_err(|_| {
        ValidationError::new(field, format!("must be between 0 and {}", u16::MAX))
    })
}

/// Check that `value` fits in an unsigned 8 bit integer.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when `value` is outside `0..=255`.
pub fn uint8(field: &str, value: i64) -> Result<u8, ValidationError> {
    u8::try_from(value)
        .map_err(|_| ValidationError::new(field, format!("must be between 0 and {}", u8::MAX)))
}

/// Parse an IPv4 address literal.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when `value` is not a dotted-quad literal.
pub fn ipv4(field: &str, value: &str) -> Result<Ipv4Addr, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::new(field, "not a valid IPv4 address"))
}

/// Parse an IPv6 address literal.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when `value` is not an IPv6 literal.
pub fn ipv6(field: &str, value: &str) -> Result<Ipv6Addr, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::new(field, "not a valid IPv6 address"))
}

/// Check that `value` is non-empty, padded, standard alphabet base64. The encoded text is
/// returned untouched.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when `value` is empty or doesn't decode.
pub fn base64(field: &str, value: String) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    match general_purpose::STANDARD.decode(&value) {
        Ok(_) => Ok(value),
        Err(err) => Err(ValidationError::new(
            field,
            format!("invalid base64 encoding: {err}"),
        )),
    }
}

/// Check that `value` is `min..=max` characters of upper case hexadecimal (`0-9A-F`).
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` on a length or charset violation.
pub fn uppercase_hex(
    field: &str,
    value: String,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let value = bounded_str(field, value, min, max)?;
    if !value
        .chars()
        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    {
        return Err(ValidationError::new(
            field,
            "must contain only upper case hexadecimal digits",
        ));
    }
    Ok(value)
}

/// Look `value` up in a closed table of keywords.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` listing the permitted keywords when `value`
/// isn't one of them. Matching is case sensitive.
pub fn keyword<T: Copy>(
    field: &str,
    value: &str,
    table: &[(&str, T)],
) -> Result<T, ValidationError> {
    table
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, v)| *v)
        .ok_or_else(|| {
            let allowed: Vec<&str> = table.iter().map(|(name, _)| *name).collect();
            ValidationError::new(
                field,
                format!("\"{value}\" is not one of: {}", allowed.join(", ")),
            )
        })
}
