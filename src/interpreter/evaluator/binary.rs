use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary operation between two already-computed values.
///
/// Routing by operator family:
/// - `+` handles numeric addition and string concatenation,
/// - `-`, `*`, `/`, `%`, `**` work on numbers and produce floats,
/// - `&`, `|`, `^`, `<<`, `>>` demand exact integers and produce integers,
/// - `==`, `!=` work on any values,
/// - `<`, `<=`, `>`, `>=` compare numbers.
///
/// Any operand-type violation produces a runtime error naming the offending
/// side.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use borno::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, &Value::Real(10.0), &Value::Real(20.0), 1);
/// assert_eq!(result.unwrap(), Value::Real(30.0));
///
/// let result = eval_binary(BinaryOperator::Less, &Value::Real(1.0), &Value::Real(2.0), 1);
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
        NotEqual, Pow, Shl, Shr, Sub,
    };

    match op {
        Add => eval_addition(left, right, line),

        Sub | Mul | Div | Mod | Pow => {
            let l = left.as_number()
                        .ok_or(RuntimeError::LeftOperandNotNumber { line })?;
            let r = right.as_number()
                         .ok_or(RuntimeError::RightOperandNotNumber { line })?;

            let result = match op {
                Sub => l - r,
                Mul => l * r,
                Div => {
                    if r == 0.0 {
                        return Err(RuntimeError::DivisionByZero { line });
                    }
                    l / r
                },
                Mod => {
                    if r == 0.0 {
                        return Err(RuntimeError::DivisionByZero { line });
                    }
                    l % r
                },
                Pow => l.powf(r),
                _ => unreachable!(),
            };

            Ok(Value::Real(result))
        },

        BitAnd | BitOr | BitXor | Shl | Shr => eval_bitwise(op, left, right, line),

        Equal => Ok(Value::Bool(left == right)),
        NotEqual => Ok(Value::Bool(left != right)),

        Less | LessEqual | Greater | GreaterEqual => {
            let l = left.as_number()
                        .ok_or(RuntimeError::LeftOperandNotNumber { line })?;
            let r = right.as_number()
                         .ok_or(RuntimeError::RightOperandNotNumber { line })?;

            let result = match op {
                Less => l < r,
                LessEqual => l <= r,
                Greater => l > r,
                GreaterEqual => l >= r,
                _ => unreachable!(),
            };

            Ok(Value::Bool(result))
        },
    }
}

/// Evaluates `+`, which is addition for numbers and concatenation as soon as
/// a string is involved.
///
/// Two integers stay integral; any float operand makes the result a float.
/// When one side is a string, the other side is stringified and
/// concatenated; a string may only be combined with strings and numbers.
#[allow(clippy::cast_precision_loss)]
fn eval_addition(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.wrapping_add(*b))),
        (Value::Integer(a), Value::Real(b)) => Ok(Value::Real(*a as f64 + b)),
        (Value::Real(a), Value::Integer(b)) => Ok(Value::Real(a + *b as f64)),
        (Value::Real(a), Value::Real(b)) => Ok(Value::Real(a + b)),

        (Value::Integer(_) | Value::Real(_), Value::Str(s)) => {
            Ok(Value::from(format!("{left}{s}")))
        },
        (Value::Str(a), Value::Str(b)) => Ok(Value::from(format!("{a}{b}"))),
        (Value::Str(a), Value::Integer(_) | Value::Real(_)) => {
            Ok(Value::from(format!("{a}{right}")))
        },
        (Value::Str(_), _) => Err(RuntimeError::RightOperandNotStringOrNumber { line }),

        _ => Err(RuntimeError::OperandsNotNumbersOrStrings { line }),
    }
}

/// Evaluates a bitwise operator.
///
/// Both operands must be exact integers; a float whose value equals an
/// integer counts as one. Shift amounts are taken modulo 64.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn eval_bitwise(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let l = left.as_exact_integer()
                .ok_or(RuntimeError::LeftOperandNotInteger { line })?;
    let r = right.as_exact_integer()
                 .ok_or(RuntimeError::RightOperandNotInteger { line })?;

    let result = match op {
        BinaryOperator::BitAnd => l & r,
        BinaryOperator::BitOr => l | r,
        BinaryOperator::BitXor => l ^ r,
        BinaryOperator::Shl => l.wrapping_shl(r as u32),
        BinaryOperator::Shr => l.wrapping_shr(r as u32),
        _ => unreachable!(),
    };

    Ok(Value::Integer(result))
}
