use std::iter::Peekable;

use crate::{
    ast::{Expr, Stmt, VarDecl},
    error::ParseError,
    interpreter::{
        evaluator::builtins::is_reserved_identifier,
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{check, consume, match_token, parse_identifier},
        },
    },
};

/// Parses a single declaration.
///
/// A declaration may be a function declaration, a variable declaration, or
/// any other statement.
///
/// Grammar: `declaration := funDecl | varDecl | statement`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(line) = match_token(tokens, &Token::Fun) {
        return parse_function_declaration(tokens, line);
    }
    if let Some(line) = match_token(tokens, &Token::Var) {
        return parse_var_declaration(tokens, line);
    }
    parse_statement(tokens)
}

/// Parses a variable declaration statement after its `ধরি` keyword.
///
/// A single statement may declare several comma-separated variables, each
/// with an optional initializer. Two rules are enforced here:
///
/// - A declared name must not be a reserved built-in identifier.
/// - Unless the initializer is an array or object literal, the declarator
///   must be followed on the same source line — this is the language's one
///   newline-sensitivity rule and catches missing semicolons early.
///
/// Grammar: `varDecl := "ধরি" var ("," var)* ";"` with
/// `var := IDENTIFIER ("=" expression)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `ধরি`.
/// - `initial_line`: Line of the `ধরি` keyword.
///
/// # Returns
/// A [`Stmt::Var`] for a single declarator, otherwise a [`Stmt::VarList`].
pub fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>,
                                    initial_line: usize)
                                    -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut declarations = Vec::new();

    loop {
        let (name, name_line) = parse_identifier(tokens, "Expect variable name.", initial_line)?;
        if is_reserved_identifier(&name) {
            return Err(ParseError::ReservedIdentifier { name,
                                                        kind: "variable name",
                                                        line: name_line });
        }

        let initializer = if match_token(tokens, &Token::Equal).is_some() {
            Some(parse_expression(tokens)?)
        } else {
            None
        };

        // Array and object literals are allowed to span lines; everything
        // else must close on the declaration's first line.
        let multiline_ok = matches!(initializer,
                                    Some(Expr::ArrayLiteral { .. } | Expr::ObjectLiteral { .. }));
        if !multiline_ok
           && let Some((tok, line)) = tokens.peek()
           && *line != initial_line
        {
            return Err(ParseError::UnexpectedToken { lexeme:  tok.to_string(),
                                                     message: "Expect ';' before newline."
                                                                  .to_string(),
                                                     line:    *line, });
        }

        declarations.push(VarDecl { name,
                                    initializer,
                                    line: name_line });

        if match_token(tokens, &Token::Comma).is_none() {
            break;
        }
    }

    consume(tokens,
            &Token::Semicolon,
            "Expect ';' after variable declaration.",
            initial_line)?;

    if declarations.len() == 1 {
        let declaration = declarations.pop().expect("one declaration");
        Ok(Stmt::Var(declaration))
    } else {
        Ok(Stmt::VarList { declarations })
    }
}

/// Parses a function declaration after its `ফাংশন` keyword.
///
/// The function name must not be a reserved built-in identifier. At most 255
/// parameters are accepted.
///
/// Grammar: `funDecl := "ফাংশন" IDENTIFIER "(" params? ")" block`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `ফাংশন`.
/// - `line`: Line of the `ফাংশন` keyword.
///
/// # Returns
/// A [`Stmt::Function`] node.
pub fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>,
                                         line: usize)
                                         -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, name_line) = parse_identifier(tokens, "Expect function name.", line)?;
    if is_reserved_identifier(&name) {
        return Err(ParseError::ReservedIdentifier { name,
                                                    kind: "function name",
                                                    line: name_line });
    }

    consume(tokens, &Token::LParen, "Expect '(' after function name.", name_line)?;

    let mut params = Vec::new();
    if !check(tokens, &Token::RParen) {
        loop {
            if params.len() >= 255
               && let Some((tok, param_line)) = tokens.peek()
            {
                return Err(ParseError::UnexpectedToken { lexeme:  tok.to_string(),
                                                         message:
                                                             "Can't have more than 255 parameters."
                                                                 .to_string(),
                                                         line:    *param_line, });
            }

            let (param, _) = parse_identifier(tokens, "Expect parameter name.", name_line)?;
            params.push(param);

            if match_token(tokens, &Token::Comma).is_none() {
                break;
            }
        }
    }
    consume(tokens, &Token::RParen, "Expect ')' after parameters.", name_line)?;

    let brace_line = consume(tokens,
                             &Token::LBrace,
                             "Expect '{' before function body.",
                             name_line)?;
    let body = parse_block_statements(tokens, brace_line)?;

    Ok(Stmt::Function { name,
                        params,
                        body,
                        line })
}

/// Parses a single statement.
///
/// Grammar:
/// ```text
///     statement := ifStmt | whileStmt | forStmt | printStmt
///                | returnStmt | breakStmt | continueStmt
///                | block | exprStmt
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(line) = match_token(tokens, &Token::If) {
        return parse_if(tokens, line);
    }
    if let Some(line) = match_token(tokens, &Token::While) {
        return parse_while(tokens, line);
    }
    if let Some(line) = match_token(tokens, &Token::For) {
        return parse_for(tokens, line);
    }
    if let Some(line) = match_token(tokens, &Token::Print) {
        let expr = parse_expression(tokens)?;
        consume(tokens, &Token::Semicolon, "Expect ';' after value.", line)?;
        return Ok(Stmt::Print { expr, line });
    }
    if let Some(line) = match_token(tokens, &Token::Return) {
        let value = if check(tokens, &Token::Semicolon) {
            None
        } else {
            Some(parse_expression(tokens)?)
        };
        consume(tokens, &Token::Semicolon, "Expect ';' after return value.", line)?;
        return Ok(Stmt::Return { value, line });
    }
    if let Some(line) = match_token(tokens, &Token::Break) {
        consume(tokens, &Token::Semicolon, "Expected ; after break.", line)?;
        return Ok(Stmt::Break { line });
    }
    if let Some(line) = match_token(tokens, &Token::Continue) {
        consume(tokens, &Token::Semicolon, "Expected ; after continue.", line)?;
        return Ok(Stmt::Continue { line });
    }
    if let Some(line) = match_token(tokens, &Token::LBrace) {
        let statements = parse_block_statements(tokens, line)?;
        return Ok(Stmt::Block { statements, line });
    }

    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;
    consume(tokens, &Token::Semicolon, "Expect ';' after value.", line)?;
    Ok(Stmt::Expression { expr, line })
}

/// Parses the statements of a block, through the closing `}`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening brace.
/// - `open_line`: Line of the opening brace, for end-of-input reporting.
///
/// # Returns
/// The statements of the block, in source order.
pub fn parse_block_statements<'a, I>(tokens: &mut Peekable<I>,
                                     open_line: usize)
                                     -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_declaration(tokens)?),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { message:
                                                                  "Expect '}' after block."
                                                                      .to_string(),
                                                              line:    open_line, });
            },
        }
    }

    Ok(statements)
}

/// Parses an `যদি` statement after its keyword.
///
/// Grammar: `ifStmt := "যদি" "(" expression ")" statement ("নাহয়" statement)?`
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    consume(tokens, &Token::LParen, "Expect '(' after 'if'.", line)?;
    let condition = parse_expression(tokens)?;
    consume(tokens, &Token::RParen, "Expect ')' after if condition.", line)?;

    let then_branch = Box::new(parse_statement(tokens)?);
    let else_branch = if match_token(tokens, &Token::Else).is_some() {
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Stmt::If { condition,
                  then_branch,
                  else_branch,
                  line })
}

/// Parses a `যতক্ষণ` loop after its keyword.
///
/// Grammar: `whileStmt := "যতক্ষণ" "(" expression ")" statement`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    consume(tokens, &Token::LParen, "Expect '(' after 'while'.", line)?;
    let condition = parse_expression(tokens)?;
    consume(tokens, &Token::RParen, "Expect ')' after condition.", line)?;

    let body = Box::new(parse_statement(tokens)?);

    Ok(Stmt::While { condition, body, line })
}

/// Parses a `ফর` loop after its keyword.
///
/// The initializer slot accepts a bare `;`, a `ধরি` declaration, or an
/// expression statement. A missing condition means the loop runs until a
/// `থামো` or `ফেরত`; a missing increment is simply absent. All three slots
/// are parsed before the body.
///
/// Grammar:
/// `forStmt := "ফর" "(" (varDecl | exprStmt | ";") expression? ";" expression? ")" statement`
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    consume(tokens, &Token::LParen, "Expect '(' after 'for'.", line)?;

    let initializer = if match_token(tokens, &Token::Semicolon).is_some() {
        None
    } else if let Some(var_line) = match_token(tokens, &Token::Var) {
        Some(Box::new(parse_var_declaration(tokens, var_line)?))
    } else {
        let expr_line = tokens.peek().map_or(line, |(_, l)| *l);
        let expr = parse_expression(tokens)?;
        consume(tokens, &Token::Semicolon, "Expect ';' after value.", expr_line)?;
        Some(Box::new(Stmt::Expression { expr, line: expr_line }))
    };

    let condition = if check(tokens, &Token::Semicolon) {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    consume(tokens, &Token::Semicolon, "Expect ';' after loop condition.", line)?;

    let increment = if check(tokens, &Token::RParen) {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    consume(tokens, &Token::RParen, "Expect ')' after for clauses.", line)?;

    let body = Box::new(parse_statement(tokens)?);

    Ok(Stmt::For { initializer,
                   condition,
                   increment,
                   body,
                   line })
}
