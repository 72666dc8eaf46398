#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Lexical variants render as `[line N] Error: msg`; syntactic variants name
/// the offending lexeme as `[line N] Error at 'lex': msg`, or `at end` when
/// the token stream ran out.
pub enum ParseError {
    /// Encountered a character outside the language's alphabet.
    UnexpectedCharacter {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was still open at end of input.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `/* ... */` comment was never closed.
    UnterminatedBlockComment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token the grammar does not allow at this position.
    UnexpectedToken {
        /// Rendering of the offending token.
        lexeme:  String,
        /// What the parser expected instead.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reached the end of the token stream while a construct was open.
    UnexpectedEndOfInput {
        /// What the parser expected instead.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to declare a variable or function under a built-in name.
    ReservedIdentifier {
        /// The reserved name.
        name: String,
        /// `"variable name"` or `"function name"`.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of `=` is not assignable.
    InvalidAssignmentTarget {
        /// The source line of the `=` operator.
        line: usize,
    },
}

impl ParseError {
    /// Gets the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line }
            | Self::UnterminatedString { line }
            | Self::UnterminatedBlockComment { line }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::ReservedIdentifier { line, .. }
            | Self::InvalidAssignmentTarget { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { line } => {
                write!(f, "[line {line}] Error: Unexpected character.")
            },

            Self::UnterminatedString { line } => {
                write!(f, "[line {line}] Error: Unterminated string.")
            },

            Self::UnterminatedBlockComment { line } => {
                write!(f, "[line {line}] Error: Unterminated multiline comment")
            },

            Self::UnexpectedToken { lexeme,
                                    message,
                                    line, } => {
                write!(f, "[line {line}] Error at '{lexeme}': {message}")
            },

            Self::UnexpectedEndOfInput { message, line } => {
                write!(f, "[line {line}] Error at end: {message}")
            },

            Self::ReservedIdentifier { name, kind, line } => write!(f,
                "[line {line}] Error at '{name}': '{name}' is a reserved identifier and cannot be used as a {kind}."),

            Self::InvalidAssignmentTarget { line } => {
                write!(f, "[line {line}] Error at '=': Invalid assignment target.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
