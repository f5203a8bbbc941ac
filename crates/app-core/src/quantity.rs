//! Quantity parsing
//!
//! Quantities arrive as free text from input fields. [`parse_quantity`] accepts
//! only positive whole numbers. [`parse_quantity_or_default`] is the lenient
//! rule used by the input drafts: any whole number that fits a `u32` is kept,
//! zero included, and everything else becomes [`DEFAULT_QUANTITY`].

/// Quantity used when the typed text is not a valid quantity
pub const DEFAULT_QUANTITY: u32 = 1;

/// Errors from parsing quantity text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// Nothing was typed
    #[error("Quantity is empty")]
    Empty,

    /// Text is not a whole number in range
    #[error("Not a valid quantity: {0}")]
    NotANumber(String),

    /// Zero items
    #[error("Quantity must be at least 1")]
    Zero,
}

/// Result type for quantity parsing
pub type Result<T> = std::result::Result<T, QuantityError>;

/// Parse quantity text into a positive count
///
/// Surrounding whitespace is ignored.
///
/// # Example
///
/// ```
/// use app_core::quantity::{parse_quantity, QuantityError};
///
/// assert_eq!(parse_quantity(" 6 "), Ok(6));
/// assert_eq!(parse_quantity("0"), Err(QuantityError::Zero));
/// ```
pub fn parse_quantity(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(QuantityError::Empty);
    }

    match trimmed.parse::<u32>() {
        Ok(0) => Err(QuantityError::Zero),
        Ok(quantity) => Ok(quantity),
        Err(_) => Err(QuantityError::NotANumber(trimmed.to_string())),
    }
}

/// Parse quantity text, falling back to [`DEFAULT_QUANTITY`]
///
/// Only empty text and text that is not a whole number fall back. Negative
/// numbers cannot be stored and fall back as well.
///
/// ```
/// use app_core::quantity::parse_quantity_or_default;
///
/// assert_eq!(parse_quantity_or_default("0"), 0);
/// assert_eq!(parse_quantity_or_default("many"), 1);
/// ```
pub fn parse_quantity_or_default(text: &str) -> u32 {
    match parse_quantity(text) {
        Ok(quantity) => quantity,
        Err(QuantityError::Zero) => 0,
        Err(_) => DEFAULT_QUANTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_quantity() {
        assert_eq!(parse_quantity("1"), Ok(1));
        assert_eq!(parse_quantity("12"), Ok(12));
        assert_eq!(parse_quantity("  7\n"), Ok(7));
    }

    #[test]
    fn test_parse_invalid_quantity() {
        assert_eq!(parse_quantity(""), Err(QuantityError::Empty));
        assert_eq!(parse_quantity("   "), Err(QuantityError::Empty));
        assert_eq!(parse_quantity("0"), Err(QuantityError::Zero));
        assert_eq!(
            parse_quantity("abc"),
            Err(QuantityError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_quantity("-3"),
            Err(QuantityError::NotANumber("-3".to_string()))
        );
        assert_eq!(
            parse_quantity("2.5"),
            Err(QuantityError::NotANumber("2.5".to_string()))
        );
        assert!(parse_quantity("99999999999").is_err());
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_quantity_or_default("4"), 4);
        assert_eq!(parse_quantity_or_default(""), DEFAULT_QUANTITY);
        assert_eq!(parse_quantity_or_default("lots"), DEFAULT_QUANTITY);
        assert_eq!(parse_quantity_or_default("-3"), DEFAULT_QUANTITY);
    }

    #[test]
    fn test_parse_or_default_keeps_zero() {
        assert_eq!(parse_quantity_or_default("0"), 0);
        assert_eq!(parse_quantity_or_default(" 00 "), 0);
    }
}
