/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to meaningful language elements such as numbers, strings,
/// identifiers, operators, delimiters, and Bengali keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Folds Bengali digits into ASCII before numeric parsing.
/// - Reports lexical errors for invalid or malformed input while keeping the
///   scan total.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of statements and
/// expressions, resolving operator precedence and validating assignment
/// targets.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with location info.
/// - Rejects reserved built-in names as declarators.
pub mod parser;
/// The environment module manages lexical scopes.
///
/// A scope maps identifier names to runtime values and optionally points at a
/// parent scope. Blocks and calls create child scopes; function values keep a
/// shared reference to the scope active at their declaration, which is the
/// language's closure mechanism.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the tagged `Value` union used during execution (nil,
/// booleans, integers, floats, strings, arrays, objects and callables)
/// together with truthiness, cross-tag numeric equality, coercion helpers and
/// the display rules used by `দেখাও`.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST depth-first and left-to-right, evaluates
/// expressions and statements, manages environments, routes non-local flow
/// through break/continue/return signals and hosts the built-in function
/// table. It is the core execution engine of the interpreter.
pub mod evaluator;
