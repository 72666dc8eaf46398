use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

/// Converts an argument to `f64`, or reports it as non-numeric.
fn number_argument(value: &Value, line: usize) -> EvalResult<f64> {
    value.as_number()
         .ok_or_else(|| RuntimeError::NativeCallFailed { message:
                                                             "argument must be a number"
                                                                 .to_string(),
                                                         line, })
}

/// Implements the one-argument numeric built-ins.
///
/// The operation is selected by the registered `name`:
/// `পরমমান` (absolute value), `বর্গমূল` (square root), `সাইন`, `কসাইন`,
/// `ট্যান` (trigonometry in radians) and `রাউন্ড` (half-away-from-zero
/// rounding). The result is always a float.
///
/// # Parameters
/// - `name`: The registered built-in name.
/// - `args`: Exactly one argument, checked by the call site.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Real` with the computed result.
pub fn unary_math(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let number = number_argument(&args[0], line)?;

    let result = match name {
        "পরমমান" => number.abs(),
        "বর্গমূল" => number.sqrt(),
        "সাইন" => number.sin(),
        "কসাইন" => number.cos(),
        "ট্যান" => number.tan(),
        "রাউন্ড" => number.round(),
        _ => unreachable!("unknown unary math builtin"),
    };

    Ok(Value::Real(result))
}

/// Implements `ঘাত`: raises the first argument to the power of the second.
///
/// # Parameters
/// - `_interpreter`: Unused; `ঘাত` performs no output.
/// - `args`: Exactly two numeric arguments, count checked by the call site.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Real` with `base ** exponent`.
pub fn pow(_interpreter: &mut Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let base = args[0].as_number()
                      .ok_or_else(|| RuntimeError::NativeCallFailed { message:
                                                                          "base must be a number"
                                                                              .to_string(),
                                                                      line, })?;
    let exponent =
        args[1].as_number()
               .ok_or_else(|| RuntimeError::NativeCallFailed { message:
                                                                   "exponent must be a number"
                                                                       .to_string(),
                                                               line, })?;

    Ok(Value::Real(base.powf(exponent)))
}

/// Implements `সর্বনিম্ন` and `সর্বোচ্চ`.
///
/// At least one argument is required. When the only argument is an array it
/// is treated as the list of candidates; every candidate must be numeric.
///
/// # Parameters
/// - `name`: The registered built-in name, selecting min or max.
/// - `args`: The evaluated arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Real` with the smallest or largest candidate.
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    if args.is_empty() {
        return Err(RuntimeError::NativeCallFailed {
            message: format!("{name} function expects at least 1 argument"),
            line,
        });
    }

    let flattened;
    let candidates: &[Value] = if args.len() == 1
                                  && let Value::Array(elements) = &args[0]
    {
        flattened = elements.borrow().clone();
        &flattened
    } else {
        args
    };

    if candidates.is_empty() {
        return Err(RuntimeError::NativeCallFailed {
            message: format!("{name} function expects a non-empty array or list of arguments"),
            line,
        });
    }

    let numeric = |value: &Value| {
        value.as_number()
             .ok_or_else(|| RuntimeError::NativeCallFailed { message:
                                                                 "all arguments must be numbers"
                                                                     .to_string(),
                                                             line, })
    };

    let take_min = name == "সর্বনিম্ন";
    let mut best = numeric(&candidates[0])?;

    for candidate in &candidates[1..] {
        let number = numeric(candidate)?;
        if (take_min && number < best) || (!take_min && number > best) {
            best = number;
        }
    }

    Ok(Value::Real(best))
}
