use std::io::BufRead;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

/// Implements `ক্লক`: seconds since the Unix epoch as a float, with
/// millisecond resolution.
///
/// # Parameters
/// - `_interpreter`: Unused; `ক্লক` performs no output.
/// - `_args`: No arguments; the count is checked by the call site.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Real` with the current time.
#[allow(clippy::cast_precision_loss)]
pub fn clock(_interpreter: &mut Interpreter, _args: &[Value], line: usize) -> EvalResult<Value> {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)
                                   .map_err(|_| RuntimeError::NativeCallFailed {
                                       message: "system clock is before the Unix epoch"
                                           .to_string(),
                                       line,
                                   })?;

    Ok(Value::Real(elapsed.as_millis() as f64 / 1000.0))
}

/// Implements `ইনপুট` / `input`: reads one line from standard input.
///
/// An optional string prompt is written without a trailing newline first,
/// through the interpreter's output sink like every other program write.
/// The returned string has its trailing newline stripped; at end of input
/// the result is the empty string.
///
/// # Parameters
/// - `interpreter`: Supplies the output sink for the prompt.
/// - `args`: Zero arguments, or one string prompt.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Str` with the line read.
pub fn input(interpreter: &mut Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    if args.len() > 1 {
        return Err(RuntimeError::NativeCallFailed { message:
                                                        "ইনপুট function accepts at most 1 argument"
                                                            .to_string(),
                                                    line, });
    }

    if let Some(prompt) = args.first() {
        let Value::Str(prompt) = prompt else {
            return Err(RuntimeError::NativeCallFailed {
                message: "ইনপুট function's argument must be a string".to_string(),
                line,
            });
        };

        interpreter.write_prompt(prompt);
    }

    let mut buffer = String::new();
    std::io::stdin().lock()
                    .read_line(&mut buffer)
                    .map_err(|error| RuntimeError::NativeCallFailed {
                        message: format!("failed to read input: {error}"),
                        line,
                    })?;

    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }

    Ok(buffer.into())
}
