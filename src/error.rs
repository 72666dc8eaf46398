/// Compile-time errors.
///
/// Defines all error types that can occur while lexing and parsing source
/// code: unexpected characters, unterminated literals and comments, grammar
/// violations and reserved-identifier misuse.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type errors in operators, division by zero, arity mismatches, bounds
/// violations and control-flow signals escaping their containers.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
