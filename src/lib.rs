//! # borno
//!
//! Borno is a small dynamically-typed scripting language whose keywords and
//! numerals are written in Bengali script. Source files carry the `.bn`
//! extension and execute through a tree-walking interpreter:
//! characters → tokens → abstract syntax tree → evaluation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::parser::core::parse_program;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including source lines.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Renders the user-visible error formats.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, environments and the built-in table to provide a
/// complete runtime for Borno programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for interpreting user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used throughout the
/// evaluator and built-ins.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

pub use crate::{
    error::{ParseError, RuntimeError},
    interpreter::evaluator::core::Interpreter,
    interpreter::value::Value,
};

/// The failure of one `run_source` call, separating the compile stage from
/// the runtime stage so the process can exit with the right code.
#[derive(Debug)]
pub enum RunError {
    /// Lexing or parsing failed; evaluation never started.
    Compile(Vec<ParseError>),
    /// Evaluation aborted with a runtime error.
    Runtime(RuntimeError),
}

impl RunError {
    /// The process exit code this failure maps to: 65 for compile errors, 70
    /// for runtime errors.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Compile(_) => 65,
            Self::Runtime(_) => 70,
        }
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compile(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for RunError {}

/// Runs a source string through the whole pipeline.
///
/// The source is scanned, parsed and evaluated in `interpreter`'s persistent
/// top-level scope. Lexical errors do not stop the scan, so several of them
/// can be reported at once; the first parse error aborts parsing; evaluation
/// only starts on a clean compile. In interactive mode (`repl`) expression
/// statements echo their values.
///
/// # Errors
/// Returns `RunError::Compile` when lexing or parsing reported errors, and
/// `RunError::Runtime` when evaluation aborted.
///
/// # Examples
/// ```
/// use borno::{Interpreter, run_source};
///
/// let mut interpreter = Interpreter::new();
///
/// // Variables persist in the interpreter between calls.
/// assert!(run_source("ধরি মোট = ১০ + ২০;", &mut interpreter, false).is_ok());
/// assert!(run_source("ধরি দ্বিগুণ = মোট * 2;", &mut interpreter, false).is_ok());
///
/// // 'y' was never declared.
/// let result = run_source("দেখাও y;", &mut interpreter, false);
/// assert!(result.is_err());
/// ```
pub fn run_source(source: &str,
                  interpreter: &mut Interpreter,
                  repl: bool)
                  -> Result<(), RunError> {
    let (tokens, lex_errors) = interpreter::lexer::scan(source);

    let mut iter = tokens.iter().peekable();
    let program = match parse_program(&mut iter) {
        Ok(program) => program,
        Err(error) => {
            let mut errors = lex_errors;
            errors.push(error);
            return Err(RunError::Compile(errors));
        },
    };

    if !lex_errors.is_empty() {
        return Err(RunError::Compile(lex_errors));
    }

    interpreter.interpret(&program, repl).map_err(RunError::Runtime)
}
