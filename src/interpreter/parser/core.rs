use std::iter::Peekable;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_assignment, statement::parse_declaration},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// A program is a sequence of declarations running to the end of the token
/// stream. The first grammar violation aborts parsing and is returned as the
/// error; evaluation must be skipped in that case.
///
/// Grammar: `program := declaration* EOF`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The statements of the program, in source order.
///
/// # Example
/// ```
/// use borno::interpreter::{lexer::scan, parser::core::parse_program};
///
/// let (tokens, errors) = scan("দেখাও ১ + ২;");
/// assert!(errors.is_empty());
///
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
/// assert_eq!(program.len(), 1);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_declaration(tokens)?);
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assignment(tokens)
}
