use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
    util::num::i64_to_usize,
};

/// Implements `লেন`: the length of an array.
///
/// # Parameters
/// - `_interpreter`: Unused; `লেন` performs no output.
/// - `args`: Exactly one argument, checked by the call site.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Integer` with the element count; errors on non-arrays.
pub fn len(_interpreter: &mut Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::NativeCallFailed { message:
                                                        "লেন function only works on arrays"
                                                            .to_string(),
                                                    line, });
    };

    let count = i64::try_from(elements.borrow().len()).unwrap_or(i64::MAX);
    Ok(Value::Integer(count))
}

/// Implements `এড`: appends the remaining arguments to the first (an array)
/// and returns the new array. The original array is left untouched.
///
/// # Parameters
/// - `_interpreter`: Unused; `এড` performs no output.
/// - `args`: The array followed by at least one element to append.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// A fresh `Value::Array` holding the old elements plus the new ones.
pub fn append(_interpreter: &mut Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    if args.len() < 2 {
        return Err(RuntimeError::NativeCallFailed {
            message: "এড function expects at least 2 arguments (array and element(s))".to_string(),
            line,
        });
    }

    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::NativeCallFailed { message:
                                                        "এড function only works on arrays"
                                                            .to_string(),
                                                    line, });
    };

    let mut extended = elements.borrow().clone();
    extended.extend(args[1..].iter().cloned());

    Ok(extended.into())
}

/// Implements `রিমুভ`: returns a new array without the element at the given
/// integer index. The index is bounds-checked against `[0, len)`.
///
/// # Parameters
/// - `_interpreter`: Unused; `রিমুভ` performs no output.
/// - `args`: The array and the index, count checked by the call site.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// A fresh `Value::Array` with one element fewer.
pub fn remove(_interpreter: &mut Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::NativeCallFailed { message:
                                                        "রিমুভ function only works on arrays"
                                                            .to_string(),
                                                    line, });
    };

    let index = args[1].as_exact_integer()
                       .and_then(i64_to_usize)
                       .ok_or_else(|| RuntimeError::NativeCallFailed {
                           message: "array index must be an integer".to_string(),
                           line,
                       })?;

    let mut remaining = elements.borrow().clone();
    if index >= remaining.len() {
        return Err(RuntimeError::NativeCallFailed { message:
                                                        "array index out of bounds".to_string(),
                                                    line, });
    }
    remaining.remove(index);

    Ok(remaining.into())
}
