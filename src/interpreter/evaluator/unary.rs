use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a unary operator applied to an already-computed value.
///
/// - `-` negates a number, preserving its integer/float tag.
/// - `!` returns the boolean complement of the operand's truthiness and
///   never fails.
/// - `~` bitwise-complements an exact integer.
///
/// # Parameters
/// - `op`: The unary operator.
/// - `value`: The operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use borno::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::Value},
/// };
///
/// let negated = eval_unary(UnaryOperator::Negate, &Value::Real(5.0), 1);
/// assert_eq!(negated.unwrap(), Value::Real(-5.0));
///
/// let complement = eval_unary(UnaryOperator::Not, &Value::Nil, 1);
/// assert_eq!(complement.unwrap(), Value::Bool(true));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => match value {
            Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
            Value::Real(r) => Ok(Value::Real(-r)),
            _ => Err(RuntimeError::OperandNotNumber { line }),
        },

        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),

        UnaryOperator::BitNot => {
            let n = value.as_exact_integer()
                         .ok_or(RuntimeError::OperandNotInteger { line })?;
            Ok(Value::Integer(!n))
        },
    }
}
