/// Core parsing entry points.
///
/// Contains the program and expression entry points shared by the other
/// parser modules.
pub mod core;

/// Statement and declaration parsing.
///
/// Implements declarations (`ফাংশন`, `ধরি`), control-flow statements, blocks
/// and expression statements.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the precedence ladder from assignment down to exponentiation,
/// including assignment-target validation.
pub mod binary;

/// Unary, call and primary parsing.
///
/// Implements prefix operators, the postfix call/index/property chain, and
/// all primary expressions including array and object literals.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides token-consumption helpers and comma-separated list parsing shared
/// by the other parser modules.
pub mod utils;
