use std::{collections::HashMap, iter::Peekable};

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{check, consume, match_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
/// - `~`  (bitwise complement)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed
/// as `!(-x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_call`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!" | "~") unary | call
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a postfix-chained primary expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => Some(UnaryOperator::Negate),
        Some((Token::Bang, _)) => Some(UnaryOperator::Not),
        Some((Token::Tilde, _)) => Some(UnaryOperator::BitNot),
        _ => None,
    };

    if let Some(op) = op {
        let (_, line) = *tokens.next().expect("operator was peeked");
        let expr = parse_unary(tokens)?;
        return Ok(Expr::Unary { op,
                                expr: Box::new(expr),
                                line });
    }

    parse_call(tokens)
}

/// Parses a primary expression followed by any chain of postfix operators.
///
/// Three postfix constructs may follow a primary, in any order and any
/// number of times:
///
/// 1. **Calls** — `expr(arg1, arg2, ...)`
/// 2. **Array indexing** — `expr[index]`
/// 3. **Property access** — `expr.name`
///
/// so `rows[0].cells(1)` parses as `((rows[0]).cells)(1)`.
///
/// Grammar:
/// ```text
///     call := primary ( "(" args? ")" | "[" expression "]" | "." IDENTIFIER )*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The expression with all postfix operators folded in.
pub fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_primary(tokens)?;

    loop {
        if let Some(open_line) = match_token(tokens, &Token::LParen) {
            let (arguments, paren_line) = parse_comma_separated(tokens,
                                                               parse_expression,
                                                               &Token::RParen,
                                                               "Expect ')' after arguments.",
                                                               open_line)?;
            expr = Expr::Call { callee: Box::new(expr),
                                arguments,
                                line: paren_line };
            continue;
        }

        if let Some(open_line) = match_token(tokens, &Token::LBracket) {
            let index = parse_expression(tokens)?;
            let close_line = consume(tokens,
                                     &Token::RBracket,
                                     "Expect ']' after array index.",
                                     open_line)?;
            expr = Expr::Index { array: Box::new(expr),
                                 index: Box::new(index),
                                 line:  close_line, };
            continue;
        }

        if let Some(dot_line) = match_token(tokens, &Token::Dot) {
            let (name, line) =
                parse_identifier(tokens, "Expect property name after '.'.", dot_line)?;
            expr = Expr::Property { object: Box::new(expr),
                                    name,
                                    line };
            continue;
        }

        break;
    }

    Ok(expr)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number, string, boolean and `nil` literals
/// - identifiers
/// - parenthesized expressions
/// - array literals (`[ ... ]`)
/// - object literals (`{ name: expr, ... }`)
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER | STRING | সত্য | মিথ্যা | nil
///              | "(" expression ")" | IDENTIFIER
///              | arrayLiteral | objectLiteral
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { message:
                                                          "Unexpected token. Expect expression."
                                                              .to_string(),
                                                      line:    0, });
    };
    let line = *line;

    match token {
        Token::Number(n) => {
            let value = LiteralValue::Number(*n);
            tokens.next();
            Ok(Expr::Literal { value, line })
        },
        Token::Str(s) => {
            let value = LiteralValue::Str(s.clone());
            tokens.next();
            Ok(Expr::Literal { value, line })
        },
        Token::True => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Bool(true),
                               line })
        },
        Token::False => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Bool(false),
                               line })
        },
        Token::Nil => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Nil,
                               line })
        },
        Token::Identifier(name) => {
            let name = name.clone();
            tokens.next();
            Ok(Expr::Variable { name, line })
        },
        Token::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            consume(tokens, &Token::RParen, "Expect ')' after expression.", line)?;
            Ok(Expr::Grouping { expr: Box::new(expr),
                                line })
        },
        Token::LBracket => {
            tokens.next();
            parse_array_literal(tokens, line)
        },
        Token::LBrace => {
            tokens.next();
            parse_object_literal(tokens, line)
        },
        tok => Err(ParseError::UnexpectedToken { lexeme:  tok.to_string(),
                                                 message: "Unexpected token. Expect expression."
                                                              .to_string(),
                                                 line, }),
    }
}

/// Parses an array literal after its opening `[`.
///
/// Elements are full expressions separated by commas; an empty array `[]` is
/// accepted.
///
/// Grammar: `arrayLiteral := "[" (expression ("," expression)*)? "]"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `[`.
/// - `line`: Line of the opening bracket.
///
/// # Returns
/// An [`Expr::ArrayLiteral`] node.
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (elements, _) = parse_comma_separated(tokens,
                                              parse_expression,
                                              &Token::RBracket,
                                              "Expect ']' after array elements.",
                                              line)?;

    Ok(Expr::ArrayLiteral { elements, line })
}

/// Parses an object literal after its opening `{`.
///
/// Keys must be identifier tokens followed by `:`; numeric keys are a parse
/// error. A duplicate key keeps the last-written value. An empty object `{}`
/// is accepted.
///
/// Grammar: `objectLiteral := "{" (IDENTIFIER ":" expression ("," IDENTIFIER ":" expression)*)? "}"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `{`.
/// - `line`: Line of the opening brace.
///
/// # Returns
/// An [`Expr::ObjectLiteral`] node.
fn parse_object_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut properties = HashMap::new();

    while !check(tokens, &Token::RBrace) && tokens.peek().is_some() {
        let (name, name_line) =
            parse_identifier(tokens, "Expect property name. Must be a string.", line)?;
        consume(tokens, &Token::Colon, "Expect ':' after property name.", name_line)?;

        let value = parse_expression(tokens)?;
        properties.insert(name, value);

        if match_token(tokens, &Token::Comma).is_none() {
            break;
        }
    }

    consume(tokens, &Token::RBrace, "Expect '}' after object literal.", line)?;

    Ok(Expr::ObjectLiteral { properties, line })
}
