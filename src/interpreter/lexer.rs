use logos::{FilterResult, Logos};

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords are matched as exact rune sequences after a maximal identifier is
/// consumed, so an identifier that merely starts with a keyword (`ফরম`) stays
/// an identifier. The two keywords containing `য়` are registered both with
/// the precomposed codepoint (U+09DF) and with `য` + U+09BC, because the
/// lexer does not normalize its input.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexicalError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `৪২.৫`; Bengali
    /// digits are folded to ASCII before the lexeme is parsed as a float.
    #[regex(r"[0-9০-৯]+(\.[0-9০-৯]+)?", lex_number)]
    Number(f64),
    /// String literal tokens; the payload excludes the surrounding quotes.
    /// Embedded newlines are permitted.
    #[token("\"", lex_string)]
    Str(String),
    /// `ফাংশন`
    #[token("ফাংশন")]
    Fun,
    /// `ধরি`
    #[token("ধরি")]
    Var,
    /// `ফর`
    #[token("ফর")]
    For,
    /// `যদি`
    #[token("যদি")]
    If,
    /// `নাহয়`
    #[token("নাহ\u{09DF}")]
    #[token("নাহয\u{09BC}")]
    Else,
    /// `যতক্ষণ`
    #[token("যতক্ষণ")]
    While,
    /// `সত্য`
    #[token("সত্য")]
    True,
    /// `মিথ্যা`
    #[token("মিথ্যা")]
    False,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `দেখাও` or `print`
    #[token("দেখাও")]
    #[token("print")]
    Print,
    /// `ফেরত`
    #[token("ফেরত")]
    Return,
    /// `থামো`
    #[token("থামো")]
    Break,
    /// `চালিয়ে_যাও`
    #[token("চালি\u{09DF}ে_যাও")]
    #[token("চালিয\u{09BC}ে_যাও")]
    Continue,
    /// `&&` or `এবং`
    #[token("&&")]
    #[token("এবং")]
    LogicalAnd,
    /// `||` or `বা`
    #[token("||")]
    #[token("বা")]
    LogicalOr,
    /// Identifier tokens; variable or function names such as `x` or `যোগফল`.
    /// Letters, combining marks and `_` may appear anywhere, digits only
    /// after the first character.
    #[regex(r"[\p{L}\p{M}_][\p{L}\p{M}\p{N}_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `/* Multi line comments. */`
    #[token("/*", lex_block_comment)]
    MultiLineComment,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `**`
    #[token("**")]
    StarStar,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `<<`
    #[token("<<")]
    Shl,
    /// `>>`
    #[token(">>")]
    Shr,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,

    /// Newlines bump the line counter and are otherwise ignored.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented by the newline skip and by callbacks that consume embedded
/// newlines (strings, block comments).
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The failure kinds the lexer can produce.
///
/// The default kind is `UnexpectedCharacter`, which logos emits for any
/// input no pattern matches. The other kinds come from the string and
/// block-comment callbacks.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LexicalError {
    /// A character outside the language's alphabet.
    #[default]
    UnexpectedCharacter,
    /// A string literal that was still open at end of input.
    UnterminatedString,
    /// A `/* ... */` comment that was never closed.
    UnterminatedBlockComment,
}

impl LexicalError {
    /// Attaches the line the scanner had reached when the failure surfaced.
    #[must_use]
    pub const fn into_parse_error(self, line: usize) -> ParseError {
        match self {
            Self::UnexpectedCharacter => ParseError::UnexpectedCharacter { line },
            Self::UnterminatedString => ParseError::UnterminatedString { line },
            Self::UnterminatedBlockComment => ParseError::UnterminatedBlockComment { line },
        }
    }
}

/// Scans a whole source string into a token sequence.
///
/// Scanning is total: a lexical failure is recorded and the scan continues
/// with the next character, so the parser always receives the tokens that
/// could be recognized. Each token is paired with the 1-based line the
/// scanner had reached when it was produced.
///
/// # Parameters
/// - `source`: The complete source text.
///
/// # Returns
/// The token stream and every lexical error encountered, in source order.
///
/// # Example
/// ```
/// use borno::interpreter::lexer::{Token, scan};
///
/// let (tokens, errors) = scan("ধরি x = ১০;");
///
/// assert!(errors.is_empty());
/// assert_eq!(tokens[0], (Token::Var, 1));
/// assert_eq!(tokens[2], (Token::Equal, 1));
/// assert_eq!(tokens[3], (Token::Number(10.0), 1));
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<(Token, usize)>, Vec<ParseError>) {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(error) => errors.push(error.into_parse_error(lexer.extras.line)),
        }
    }

    (tokens, errors)
}

/// Substitutes Bengali digits (`০`–`৯`, U+09E6 through U+09EF) with their
/// ASCII equivalents, 1:1. All other characters pass through unchanged.
///
/// # Example
/// ```
/// use borno::interpreter::lexer::fold_digits;
///
/// assert_eq!(fold_digits("১২৩"), "123");
/// assert_eq!(fold_digits("4২.৫"), "42.5");
/// ```
#[must_use]
pub fn fold_digits(lexeme: &str) -> String {
    lexeme.chars()
          .map(|c| match c {
              '০'..='৯' => {
                  // U+09E6 maps to '0'; the block is contiguous.
                  char::from(b'0' + u8::try_from(c as u32 - 0x09E6).unwrap_or(0))
              },
              _ => c,
          })
          .collect()
}

/// Parses a numeric literal from the current token slice, folding Bengali
/// digits first.
fn lex_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    fold_digits(lex.slice()).parse().ok()
}

/// Consumes a string literal after its opening quote.
///
/// The payload is everything up to (excluding) the closing quote. Embedded
/// newlines update the line counter. Reaching end of input first produces an
/// `UnterminatedString` failure.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexicalError> {
    let remainder = lex.remainder();

    match remainder.find('"') {
        Some(end) => {
            let contents = remainder[..end].to_string();
            lex.extras.line += contents.matches('\n').count();
            lex.bump(end + 1);
            Ok(contents)
        },
        None => {
            lex.extras.line += remainder.matches('\n').count();
            lex.bump(remainder.len());
            Err(LexicalError::UnterminatedString)
        },
    }
}

/// Consumes a block comment after its opening `/*`, through the matching
/// `*/`. Reaching end of input first produces an `UnterminatedBlockComment`
/// failure.
fn lex_block_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), LexicalError> {
    let remainder = lex.remainder();

    match remainder.find("*/") {
        Some(end) => {
            lex.extras.line += remainder[..end].matches('\n').count();
            lex.bump(end + 2);
            FilterResult::Skip
        },
        None => {
            lex.extras.line += remainder.matches('\n').count();
            lex.bump(remainder.len());
            FilterResult::Error(LexicalError::UnterminatedBlockComment)
        },
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Fun => write!(f, "ফাংশন"),
            Self::Var => write!(f, "ধরি"),
            Self::For => write!(f, "ফর"),
            Self::If => write!(f, "যদি"),
            Self::Else => write!(f, "নাহ\u{09DF}"),
            Self::While => write!(f, "যতক্ষণ"),
            Self::True => write!(f, "সত্য"),
            Self::False => write!(f, "মিথ্যা"),
            Self::Nil => write!(f, "nil"),
            Self::Print => write!(f, "দেখাও"),
            Self::Return => write!(f, "ফেরত"),
            Self::Break => write!(f, "থামো"),
            Self::Continue => write!(f, "চালি\u{09DF}ে_যাও"),
            Self::LogicalAnd => write!(f, "&&"),
            Self::LogicalOr => write!(f, "||"),
            Self::Comment | Self::MultiLineComment | Self::Newline | Self::Ignored => Ok(()),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
            Self::Semicolon => write!(f, ";"),
            Self::Colon => write!(f, ":"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::StarStar => write!(f, "**"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Ampersand => write!(f, "&"),
            Self::Pipe => write!(f, "|"),
            Self::Caret => write!(f, "^"),
            Self::Tilde => write!(f, "~"),
            Self::Shl => write!(f, "<<"),
            Self::Shr => write!(f, ">>"),
            Self::BangEqual => write!(f, "!="),
            Self::Bang => write!(f, "!"),
            Self::EqualEqual => write!(f, "=="),
            Self::Equal => write!(f, "="),
            Self::LessEqual => write!(f, "<="),
            Self::Less => write!(f, "<"),
            Self::GreaterEqual => write!(f, ">="),
            Self::Greater => write!(f, ">"),
        }
    }
}
