//! Operation identifiers and the dispatcher.
//!
//! [`dispatch`] maps an operation identifier and a validated operand pair to
//! a [`Calculation`] or a typed [`CalculatorError`].

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::info;

use super::error::CalculatorError;
use super::operands::Operands;

/// 2^63: integral values strictly below it in magnitude convert to `i64` exactly.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// 2^64: non-negative integral values strictly below it convert to `u64` exactly.
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// The closed set of supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in routing order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Identifier used in routes, responses and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operation to an operand pair.
    ///
    /// # Errors
    ///
    /// - [`CalculatorError::DivisionByZero`] for a zero divisor.
    /// - [`CalculatorError::Computation`] if the result is not a finite number.
    pub fn apply(self, operands: Operands) -> Result<f64, CalculatorError> {
        let Operands { num1, num2 } = operands;
        let result = match self {
            Self::Add => num1 + num2,
            Self::Subtract => num1 - num2,
            Self::Multiply => num1 * num2,
            Self::Divide => {
                if num2 == 0.0 {
                    return Err(CalculatorError::DivisionByZero);
                }
                num1 / num2
            }
        };

        if !result.is_finite() {
            return Err(CalculatorError::computation(
                self.as_str(),
                format!(
                    "{} {} {} is not a finite number",
                    format_number(num1),
                    self,
                    format_number(num2)
                ),
            ));
        }

        Ok(result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.as_str() == s)
            .ok_or_else(|| CalculatorError::UnknownOperation(s.to_string()))
    }
}

/// Successful response body: `{"operation": ..., "result": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub operation: Operation,
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Write integral results as JSON integers (`5` rather than `5.0`).
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let value = *value;
    if value.fract() != 0.0 {
        return serializer.serialize_f64(value);
    }
    if value.abs() < I64_BOUND {
        serializer.serialize_i64(value as i64)
    } else if value > 0.0 && value < U64_BOUND {
        serializer.serialize_u64(value as u64)
    } else {
        serializer.serialize_f64(value)
    }
}

/// Render a number the way JavaScript's `Number#toString` does: plain
/// decimals in `[1e-6, 1e21)`, exponent notation with an explicit sign outside.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() || (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Resolve an operation identifier and compute its result.
///
/// Logs the full expression at info level on success.
///
/// # Errors
///
/// - [`CalculatorError::UnknownOperation`] if `identifier` names no operation.
/// - Any error from [`Operation::apply`].
pub fn dispatch(identifier: &str, operands: Operands) -> Result<Calculation, CalculatorError> {
    let operation: Operation = identifier.parse()?;
    let result = operation.apply(operands)?;

    info!(
        "{}: {} {} {} = {}",
        operation.as_str().to_uppercase(),
        format_number(operands.num1),
        operation,
        format_number(operands.num2),
        format_number(result)
    );

    Ok(Calculation { operation, result })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operands(num1: f64, num2: f64) -> Operands {
        Operands::new(num1, num2)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Operation::Add.apply(operands(2.0, 3.0)).unwrap(), 5.0);
        assert_eq!(Operation::Subtract.apply(operands(10.0, 4.0)).unwrap(), 6.0);
        assert_eq!(Operation::Multiply.apply(operands(3.0, -2.0)).unwrap(), -6.0);
        assert_eq!(Operation::Divide.apply(operands(10.0, 2.0)).unwrap(), 5.0);
    }

    #[test]
    fn test_floating_point_semantics() {
        let sum = Operation::Add.apply(operands(0.1, 0.2)).unwrap();
        assert!((sum - 0.3).abs() < 1e-12);
        assert_eq!(Operation::Divide.apply(operands(1.0, 4.0)).unwrap(), 0.25);
    }

    #[test]
    fn test_divide_by_zero() {
        let err = Operation::Divide.apply(operands(5.0, 0.0)).unwrap_err();
        assert!(matches!(err, CalculatorError::DivisionByZero));

        let err = Operation::Divide.apply(operands(0.0, -0.0)).unwrap_err();
        assert!(matches!(err, CalculatorError::DivisionByZero));
    }

    #[test]
    fn test_zero_is_fine_for_other_operations() {
        assert_eq!(Operation::Multiply.apply(operands(5.0, 0.0)).unwrap(), 0.0);
        assert_eq!(Operation::Divide.apply(operands(0.0, 5.0)).unwrap(), 0.0);
    }

    #[test]
    fn test_overflow_is_a_computation_error() {
        let err = Operation::Multiply.apply(operands(1e308, 10.0)).unwrap_err();
        assert!(matches!(err, CalculatorError::Computation { ref operation, .. } if operation == "multiply"));
    }

    #[test]
    fn test_from_str() {
        for operation in Operation::ALL {
            assert_eq!(operation.as_str().parse::<Operation>().unwrap(), operation);
        }
        let err = "modulo".parse::<Operation>().unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownOperation(ref name) if name == "modulo"));
    }

    #[test]
    fn test_dispatch() {
        let calculation = dispatch("add", operands(2.0, 3.0)).unwrap();
        assert_eq!(calculation.operation, Operation::Add);
        assert_eq!(calculation.result, 5.0);
    }

    #[test]
    fn test_dispatch_unknown_operation() {
        let err = dispatch("power", operands(2.0, 3.0)).unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownOperation(_)));
    }

    #[test]
    fn test_calculation_json() {
        let calculation = Calculation {
            operation: Operation::Add,
            result: 5.0,
        };
        assert_eq!(
            serde_json::to_string(&calculation).unwrap(),
            r#"{"operation":"add","result":5}"#
        );

        let calculation = Calculation {
            operation: Operation::Divide,
            result: 2.5,
        };
        assert_eq!(
            serde_json::to_string(&calculation).unwrap(),
            r#"{"operation":"divide","result":2.5}"#
        );
    }

    #[test]
    fn test_large_results_stay_floating_point() {
        let calculation = Calculation {
            operation: Operation::Multiply,
            result: 1e300,
        };
        let json = serde_json::to_value(&calculation).unwrap();
        assert_eq!(json["result"].as_f64(), Some(1e300));
        assert!(!json["result"].is_i64());
    }

    #[test]
    fn test_integral_results_beyond_safe_range() {
        let calculation = Calculation {
            operation: Operation::Add,
            result: 9_007_199_254_740_992.0,
        };
        assert_eq!(
            serde_json::to_string(&calculation).unwrap(),
            r#"{"operation":"add","result":9007199254740992}"#
        );

        let calculation = Calculation {
            operation: Operation::Multiply,
            result: -1e18,
        };
        assert_eq!(
            serde_json::to_string(&calculation).unwrap(),
            r#"{"operation":"multiply","result":-1000000000000000000}"#
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1e200), "1e+200");
        assert_eq!(format_number(-1.5e300), "-1.5e+300");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    proptest::proptest! {
        #[test]
        fn proptest_add_subtract_match_float_arithmetic(
            a in -1e300f64..1e300,
            b in -1e300f64..1e300,
        ) {
            proptest::prop_assert_eq!(Operation::Add.apply(operands(a, b)).unwrap(), a + b);
            proptest::prop_assert_eq!(Operation::Subtract.apply(operands(a, b)).unwrap(), a - b);
        }

        #[test]
        fn proptest_multiply_matches_float_arithmetic(
            a in -1e150f64..1e150,
            b in -1e150f64..1e150,
        ) {
            proptest::prop_assert_eq!(Operation::Multiply.apply(operands(a, b)).unwrap(), a * b);
        }

        #[test]
        fn proptest_divide_matches_float_arithmetic(
            a in -1e150f64..1e150,
            b in -1e150f64..1e150,
        ) {
            proptest::prop_assume!(b.abs() > 1e-150);
            let calculation = dispatch("divide", operands(a, b)).unwrap();
            proptest::prop_assert_eq!(calculation.operation, Operation::Divide);
            proptest::prop_assert_eq!(calculation.result, a / b);
        }

        #[test]
        fn proptest_divide_by_zero_never_computes(
            a in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
            negative in proptest::prelude::any::<bool>(),
        ) {
            let zero = if negative { -0.0 } else { 0.0 };
            let err = dispatch("divide", operands(a, zero)).unwrap_err();
            proptest::prop_assert!(matches!(err, CalculatorError::DivisionByZero));
        }

        #[test]
        fn proptest_results_are_always_finite(
            a in proptest::num::f64::NORMAL,
            b in proptest::num::f64::NORMAL,
        ) {
            for operation in Operation::ALL {
                if let Ok(result) = operation.apply(operands(a, b)) {
                    proptest::prop_assert!(result.is_finite());
                }
            }
        }
    }
}
