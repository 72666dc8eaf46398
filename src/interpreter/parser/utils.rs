use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Tests whether the next token equals `expected` without consuming it.
pub(in crate::interpreter::parser) fn check<'a, I>(tokens: &mut Peekable<I>,
                                                   expected: &Token)
                                                   -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    matches!(tokens.peek(), Some((tok, _)) if tok == expected)
}

/// Consumes the next token when it equals `expected`, returning its line.
pub(in crate::interpreter::parser) fn match_token<'a, I>(tokens: &mut Peekable<I>,
                                                         expected: &Token)
                                                         -> Option<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((tok, line)) = tokens.peek()
       && *tok == *expected
    {
        let line = *line;
        tokens.next();
        return Some(line);
    }
    None
}

/// Demands the next token to be `expected`, consuming it.
///
/// On mismatch, the offending token is rendered into the error; a missing
/// token reports `at end` using `fallback_line`, the line of the construct
/// being parsed.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `expected`: The token that must come next.
/// - `message`: Error text used when it does not.
/// - `fallback_line`: Line reported when the stream has ended.
///
/// # Returns
/// The line of the consumed token.
pub(in crate::interpreter::parser) fn consume<'a, I>(tokens: &mut Peekable<I>,
                                                     expected: &Token,
                                                     message: &str,
                                                     fallback_line: usize)
                                                     -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((tok, line)) if *tok == *expected => {
            let line = *line;
            tokens.next();
            Ok(line)
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { lexeme:  tok.to_string(),
                                                               message: message.to_string(),
                                                               line:    *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { message: message.to_string(),
                                                       line:    fallback_line, }),
    }
}

/// Parses a plain identifier and returns its name with its line.
///
/// The next token must be `Token::Identifier`. This function does not check
/// for reserved identifiers; callers must handle that.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `message`: Error text used when the next token is something else.
/// - `fallback_line`: Line reported when the stream has ended.
///
/// # Returns
/// The identifier and the line it appeared on.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              message: &str,
                                                              fallback_line: usize)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Identifier(name), line)) => {
            let result = (name.clone(), *line);
            tokens.next();
            Ok(result)
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { lexeme:  tok.to_string(),
                                                               message: message.to_string(),
                                                               line:    *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { message: message.to_string(),
                                                       line:    fallback_line, }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by argument lists and array literals. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma to continue the list or the closing token to end it. An immediately
/// encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `]` or `)`).
/// - `message`: Error text used when the closing token is missing.
/// - `fallback_line`: Line reported when the stream has ended.
///
/// # Returns
/// The parsed items and the line of the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    message: &str,
    fallback_line: usize)
    -> ParseResult<(Vec<T>, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();

    if let Some(line) = match_token(tokens, closing) {
        return Ok((items, line));
    }

    loop {
        items.push(parse_item(tokens)?);

        if match_token(tokens, &Token::Comma).is_none() {
            break;
        }
    }

    let line = consume(tokens, closing, message, fallback_line)?;
    Ok((items, line))
}
