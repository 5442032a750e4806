//! Hexadecimal revision code parsing

use std::num::IntErrorKind;

use crate::error::{DecodeError, Result};

/// Parse a revision code written in hex, with or without a `0x` / `0X` prefix.
///
/// Surrounding whitespace is ignored. Everything else must be hex digits.
///
/// # Errors
///
/// Returns `DecodeError::UnparsableCode` if the input is empty, contains a
/// non-hex character, or does not fit in 32 bits.
pub fn parse_code(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(DecodeError::unparsable(input, "no hexadecimal digits"));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(DecodeError::unparsable(
            input,
            format!("'{bad}' is not a hexadecimal digit"),
        ));
    }

    u32::from_str_radix(digits, 16).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => DecodeError::unparsable(input, "larger than 32 bits"),
        _ => DecodeError::unparsable(input, e.to_string()),
    })
}
