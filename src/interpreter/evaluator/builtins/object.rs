use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

/// Implements `কি_রিমুভ`: deletes a property by key from an object, in
/// place, and returns the object. A missing key is an error.
///
/// # Parameters
/// - `_interpreter`: Unused; `কি_রিমুভ` performs no output.
/// - `args`: The object and the string key, count checked by the call site.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The (mutated) object value.
pub fn delete_key(_interpreter: &mut Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::Object(properties) = &args[0] else {
        return Err(RuntimeError::NativeCallFailed { message:
                                                        "কি_রিমুভ function only works on objects"
                                                            .to_string(),
                                                    line, });
    };

    let Value::Str(key) = &args[1] else {
        return Err(RuntimeError::NativeCallFailed {
            message: "কি_রিমুভ function expects the second argument to be a string key".to_string(),
            line,
        });
    };

    if properties.borrow_mut().remove(key.as_ref()).is_none() {
        return Err(RuntimeError::NativeCallFailed { message:
                                                        format!("key '{key}' not found in object"),
                                                    line, });
    }

    Ok(args[0].clone())
}

/// Implements `অব্জেক্ট_কি`: an array of the object's keys.
///
/// Keys are returned sorted so the result is deterministic; the language
/// itself promises no particular order.
///
/// # Parameters
/// - `_interpreter`: Unused; `অব্জেক্ট_কি` performs no output.
/// - `args`: Exactly one argument, checked by the call site.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// A `Value::Array` of strings.
pub fn keys(_interpreter: &mut Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::Object(properties) = &args[0] else {
        return Err(RuntimeError::NativeCallFailed { message:
                                                        "অব্জেক্ট_কি function only works on objects"
                                                            .to_string(),
                                                    line, });
    };

    let mut names: Vec<String> = properties.borrow().keys().cloned().collect();
    names.sort();

    let keys = names.into_iter().map(Value::from).collect::<Vec<_>>();
    Ok(keys.into())
}

/// Implements `অব্জেক্ট_মান`: an array of the object's values, in the same
/// key-sorted order `অব্জেক্ট_কি` uses.
///
/// # Parameters
/// - `_interpreter`: Unused; `অব্জেক্ট_মান` performs no output.
/// - `args`: Exactly one argument, checked by the call site.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// A `Value::Array` of the property values.
pub fn values(_interpreter: &mut Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::Object(properties) = &args[0] else {
        return Err(RuntimeError::NativeCallFailed {
            message: "অব্জেক্ট_মান function only works on objects".to_string(),
            line,
        });
    };

    let properties = properties.borrow();

    let mut names: Vec<&String> = properties.keys().collect();
    names.sort();

    let values = names.into_iter()
                      .map(|name| properties[name.as_str()].clone())
                      .collect::<Vec<_>>();
    Ok(values.into())
}
