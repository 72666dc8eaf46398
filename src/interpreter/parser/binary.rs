use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses an assignment expression.
///
/// The left-hand side is parsed as an ordinary expression first; when an `=`
/// follows, the parser rewrites the node based on its shape:
///
/// - `Expr::Variable` becomes `Expr::Assign`,
/// - `Expr::Index` becomes `Expr::AssignIndex`,
/// - `Expr::Property` becomes `Expr::AssignProperty`.
///
/// Any other left-hand shape is rejected with "Invalid assignment target."
/// Assignment is right-associative: `a = b = c` parses as `a = (b = c)`.
///
/// Grammar: `assignment := logical_or ("=" assignment)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression, rewritten when it turned out to be an assignment.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_logical_or(tokens)?;

    if let Some((Token::Equal, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let value = Box::new(parse_assignment(tokens)?);

        return match expr {
            Expr::Variable { name, .. } => Ok(Expr::Assign { name, value, line }),
            Expr::Index { array, index, .. } => Ok(Expr::AssignIndex { array,
                                                                      index,
                                                                      value,
                                                                      line }),
            Expr::Property { object, name, .. } => Ok(Expr::AssignProperty { object,
                                                                             name,
                                                                             value,
                                                                             line }),
            _ => Err(ParseError::InvalidAssignmentTarget { line }),
        };
    }

    Ok(expr)
}

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||` / `বা`.
/// Precedence is the lowest of all operators except assignment.
///
/// Grammar: `logical_or := logical_and (("||" | "বা") logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An expression tree using `Expr::Logical` nodes.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical_and(tokens)?;

    while let Some((Token::LogicalOr, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_logical_and(tokens)?;

        left = Expr::Logical { left: Box::new(left),
                               op: LogicalOperator::Or,
                               right: Box::new(right),
                               line };
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&` / `এবং`.
///
/// Grammar: `logical_and := bitwise_or (("&&" | "এবং") bitwise_or)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An expression tree using `Expr::Logical` nodes.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_bitwise_or(tokens)?;

    while let Some((Token::LogicalAnd, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_bitwise_or(tokens)?;

        left = Expr::Logical { left: Box::new(left),
                               op: LogicalOperator::And,
                               right: Box::new(right),
                               line };
    }

    Ok(left)
}

/// Parses bitwise OR expressions.
///
/// Grammar: `bitwise_or := bitwise_xor ("|" bitwise_xor)*`
pub fn parse_bitwise_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_bitwise_xor, &[BinaryOperator::BitOr])
}

/// Parses bitwise XOR expressions.
///
/// Grammar: `bitwise_xor := bitwise_and ("^" bitwise_and)*`
pub fn parse_bitwise_xor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_bitwise_and, &[BinaryOperator::BitXor])
}

/// Parses bitwise AND expressions.
///
/// Grammar: `bitwise_and := equality ("&" equality)*`
pub fn parse_bitwise_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_equality, &[BinaryOperator::BitAnd])
}

/// Parses equality expressions.
///
/// Grammar: `equality := comparison (("!=" | "==") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           parse_comparison,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual])
}

/// Parses comparison expressions.
///
/// Grammar: `comparison := shift ((">" | ">=" | "<" | "<=") shift)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           parse_shift,
                           &[BinaryOperator::Greater,
                             BinaryOperator::GreaterEqual,
                             BinaryOperator::Less,
                             BinaryOperator::LessEqual])
}

/// Parses shift expressions.
///
/// Grammar: `shift := term (("<<" | ">>") term)*`
pub fn parse_shift<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_term, &[BinaryOperator::Shl, BinaryOperator::Shr])
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `term := factor (("+" | "-") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_factor, &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses multiplication-level expressions.
///
/// Grammar: `factor := power (("*" | "/" | "%") power)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           parse_power,
                           &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod])
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ** b ** c` parses as
/// `a ** (b ** c)`.
///
/// Grammar: `power := unary ("**" unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_unary(tokens)?;

    if let Some((Token::StarStar, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_power(tokens)?;

        return Ok(Expr::Binary { left: Box::new(left),
                                 op: BinaryOperator::Pow,
                                 right: Box::new(right),
                                 line });
    }

    Ok(left)
}

/// Parses one left-associative precedence level.
///
/// Repeatedly folds `next`-level operands into a left-leaning tree while the
/// upcoming token maps to one of the operators in `ops`.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `next`: Parser for the next-higher precedence level.
/// - `ops`: The operators belonging to this level.
///
/// # Returns
/// A binary expression tree for this level.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 next: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                                 ops: &[BinaryOperator])
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = next(tokens)?;

    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && ops.contains(&op)
        {
            let line = *line;
            tokens.next();

            let right = next(tokens)?;

            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator (arithmetic, bitwise, shift, comparison or equality). Returns
/// `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use borno::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::StarStar => Some(BinaryOperator::Pow),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::Shl => Some(BinaryOperator::Shl),
        Token::Shr => Some(BinaryOperator::Shr),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
