use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::RuntimeValue},
};

/// Evaluates a binary operation between two values.
///
/// Both operands must be numbers. `+`, `-`, `*` and `/` are the usual
/// floating-point operations and `%` is the floating-point remainder, which
/// takes the sign of the dividend. A zero divisor is an error for both `/` and
/// `%`.
///
/// # Errors
/// - `TypeError` if either operand is not a number.
/// - `DivisionByZero` if the right operand of `/` or `%` is zero.
///
/// # Example
/// ```
/// use ember::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::RuntimeValue},
/// };
///
/// let result = eval_binary(BinaryOperator::Mod,
///                          &RuntimeValue::Number(-7.0),
///                          &RuntimeValue::Number(3.0),
///                          1);
/// assert_eq!(result, Ok(RuntimeValue::Number(-1.0)));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &RuntimeValue,
                   right: &RuntimeValue,
                   line: usize)
                   -> EvalResult<RuntimeValue> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    let a = left.as_number("left operand", line)?;
    let b = right.as_number("right operand", line)?;

    let result = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div | Mod => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            if op == Div { a / b } else { a % b }
        },
    };

    Ok(result.into())
}
