//! Operand extraction and validation.
//!
//! Reads `num1` and `num2` from the raw query string. Parsing is strict: the
//! whole (trimmed) value must be a finite decimal or scientific-notation
//! number, so inputs such as `5abc`, `NaN` or `inf` are rejected.

use super::error::CalculatorError;

/// Query parameter holding the first operand.
pub const FIRST_PARAM: &str = "num1";

/// Query parameter holding the second operand.
pub const SECOND_PARAM: &str = "num2";

/// A validated pair of operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub num1: f64,
    pub num2: f64,
}

impl Operands {
    /// Create an operand pair from already-parsed values.
    pub fn new(num1: f64, num2: f64) -> Self {
        Self { num1, num2 }
    }

    /// Extract both operands from a raw query string.
    ///
    /// When a parameter is repeated, its first occurrence is used.
    ///
    /// # Errors
    ///
    /// - [`CalculatorError::InvalidOperands`] if either parameter is missing,
    ///   empty or not a finite number.
    /// - [`CalculatorError::Internal`] if the query string cannot be decoded.
    pub fn from_query(query: Option<&str>) -> Result<Self, CalculatorError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query.unwrap_or_default())
            .map_err(|e| CalculatorError::internal(format!("malformed query string: {}", e)))?;

        let lookup = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };

        match (
            lookup(FIRST_PARAM).and_then(parse_operand),
            lookup(SECOND_PARAM).and_then(parse_operand),
        ) {
            (Some(num1), Some(num2)) => Ok(Self::new(num1, num2)),
            _ => Err(CalculatorError::InvalidOperands),
        }
    }
}

/// Parse a single operand, accepting only finite numbers.
pub fn parse_operand(raw: &str) -> Option<f64> {
    // `f64::from_str` also accepts "inf" and "NaN", hence the finiteness check.
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
