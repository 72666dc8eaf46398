/// Core evaluation logic and interpreter state.
///
/// Contains the interpreter itself, statement evaluation, control-flow
/// signals and environment management.
pub mod core;

/// Expression evaluation.
///
/// Dispatches over expression nodes: literals, variables, collections,
/// indexing, property access and the three assignment shapes.
pub mod expr;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, bitwise operations,
/// comparisons and equality.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric negation, logical not and bitwise complement.
pub mod unary;

/// Function evaluation.
///
/// Handles calls to user-defined functions and built-ins, argument checking,
/// parameter binding and return-value plumbing.
pub mod function;

/// Built-in function table.
///
/// Declares the fixed set of host-backed callables registered into the
/// global environment, together with the reserved-identifier list shared
/// with the parser.
pub mod builtins;
