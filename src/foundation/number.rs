/// Why a numeric field could not be read.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberError {
    /// The field was empty (or whitespace only).
    #[error("empty field")]
    Empty,
    /// The field is not an integer.
    #[error("not a number")]
    NotANumber,
    /// The field is an integer that does not fit in 64 bits.
    #[error("out of range")]
    OutOfRange,
}

/// Parse a signed integer field, tolerating surrounding whitespace and a leading `+`.
pub fn parse_int(field: &str) -> Result<i64, NumberError> {
    let s = field.trim();
    if s.is_empty() {
        return Err(NumberError::Empty);
    }

    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumberError::NotANumber);
    }

    // Only overflow is left once the shape has been checked.
    s.parse::<i64>().map_err(|_| NumberError::OutOfRange)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/number.rs"]
mod tests;
