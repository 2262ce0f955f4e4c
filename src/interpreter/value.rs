use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Every evaluated expression and statement produces exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuntimeValue {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// The single `null` value.
    Null,
}

impl From<f64> for RuntimeValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl RuntimeValue {
    /// The name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Null => "null",
        }
    }

    /// Returns the number, or a type error mentioning `role` if the value is
    /// not numeric.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::value::RuntimeValue;
    ///
    /// assert_eq!(RuntimeValue::Number(2.5).as_number("operand", 1), Ok(2.5));
    /// assert!(RuntimeValue::Null.as_number("operand", 1).is_err());
    /// ```
    pub fn as_number(&self, role: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Null => Err(RuntimeError::TypeError { details: format!("expected {role} to be a number, found {}",
                                                                         self.type_name()),
                                                        line }),
        }
    }
}

impl fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Null => f.write_str("null"),
        }
    }
}
