use crate::error::ValidationError;
use crate::field::FieldId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::num::IntErrorKind;

// Names end up as C array identifiers in the generated header.
static C_IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Whether `name` can be emitted as a C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    C_IDENTIFIER_REGEX.is_match(name)
}

/// Default name of the thread at `index`.
pub fn default_thread_name(index: usize) -> String {
    format!("Thread_{}", index)
}

/// Parse a numeric form input for `field`.
///
/// Range checking is left to the model so that out-of-range values and
/// negative numbers are reported with the field's bounds. Values too large
/// for `i64` are reported as out of range, saturated to `i64::MAX`/`MIN`.
pub fn parse_numeric_input(input: &str, field: FieldId) -> Result<i64, ValidationError> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|e| {
        let saturated = match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        };
        match (saturated, field.bounds()) {
            (Some(value), Some(bounds)) => ValidationError::OutOfRange {
                field,
                bounds,
                value,
            },
            _ => ValidationError::InvalidNumber {
                field,
                input: trimmed.to_string(),
            },
        }
    })
}

/// Parse a checkbox-style value.
///
/// Accepted spellings: true/false, on/off, yes/no, 1/0 (case-insensitive).
pub fn parse_flag(input: &str, field: FieldId) -> Result<bool, ValidationError> {
    let trimmed = input.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ValidationError::InvalidFlag {
            field,
            input: trimmed.to_string(),
        }),
    }
}

/// Match `input` against `choices` case-insensitively, returning the index.
pub fn parse_choice(
    input: &str,
    field: FieldId,
    choices: &'static [&'static str],
) -> Result<usize, ValidationError> {
    let trimmed = input.trim();
    choices
        .iter()
        .position(|c| c.eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ValidationError::InvalidChoice {
            field,
            input: trimmed.to_string(),
            choices,
        })
}
