use crate::utils::error::{CompareError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses an operand at the call boundary.
///
/// The text is read as an `i64` first so that values just past the `i32`
/// range are reported as out of range instead of as malformed input.
/// Out-of-range values are rejected, never truncated.
pub fn parse_operand(field_name: &str, raw: &str) -> Result<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CompareError::InvalidOperandError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }

    let wide: i64 = trimmed
        .parse()
        .map_err(|e: std::num::ParseIntError| CompareError::InvalidOperandError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })?;

    i32::try_from(wide).map_err(|_| CompareError::OperandOutOfRangeError {
        field: field_name.to_string(),
        value: wide,
        min: i32::MIN,
        max: i32::MAX,
    })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CompareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
