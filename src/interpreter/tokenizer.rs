use std::fmt::Display;

use crate::{error::ParseError, interpreter::symbols::BlockKind};

/// The construct a line performs.
///
/// A token is produced per line and carries no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `let [mut] name = literal`
    Let,
    /// `print argument`
    Print,
    /// `puts argument`
    Puts,
    /// `if condition {`
    If,
    /// `elif condition {`
    Elif,
    /// `else {`
    Else,
    /// `for header {`
    For,
    /// A line starting with `{`.
    OpenBrace,
    /// A line starting with `}`.
    CloseBrace,
    /// No known construct.
    None,
}

/// Keywords in the order they are tested.
///
/// `elif` must come before `if` and `else`, which it overlaps with.
const KEYWORDS: [(&str, Token); 9] = [("let", Token::Let),
                                      ("print", Token::Print),
                                      ("puts", Token::Puts),
                                      ("elif", Token::Elif),
                                      ("if", Token::If),
                                      ("else", Token::Else),
                                      ("for", Token::For),
                                      ("{", Token::OpenBrace),
                                      ("}", Token::CloseBrace)];

impl Token {
    /// Returns the keyword text of the token, or `None` for [`Token::None`].
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Let => Some("let"),
            Self::Print => Some("print"),
            Self::Puts => Some("puts"),
            Self::If => Some("if"),
            Self::Elif => Some("elif"),
            Self::Else => Some("else"),
            Self::For => Some("for"),
            Self::OpenBrace => Some("{"),
            Self::CloseBrace => Some("}"),
            Self::None => None,
        }
    }

    /// Returns the block kind a token opens, if it opens one.
    #[must_use]
    pub const fn block_kind(self) -> Option<BlockKind> {
        match self {
            Self::If => Some(BlockKind::If),
            Self::Elif => Some(BlockKind::Elif),
            Self::Else => Some(BlockKind::Else),
            Self::For => Some(BlockKind::For),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.keyword() {
            Some(keyword) => write!(f, "{keyword}"),
            None => write!(f, "<none>"),
        }
    }
}

/// Classifies a line by its first word.
///
/// The first whitespace-delimited word is checked for containing each
/// keyword in priority order; the first hit wins.
///
/// # Example
/// ```
/// use linea::interpreter::tokenizer::{Token, tokenize};
///
/// assert_eq!(tokenize("let mut x = 5"), Token::Let);
/// assert_eq!(tokenize("elif y {"), Token::Elif);
/// assert_eq!(tokenize("}"), Token::CloseBrace);
/// assert_eq!(tokenize("x = 3"), Token::None);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Token {
    let Some(word) = first_word(line) else {
        return Token::None;
    };

    KEYWORDS.iter()
            .find(|(keyword, _)| word.contains(keyword))
            .map_or(Token::None, |&(_, token)| token)
}

/// Returns the first whitespace-delimited word of a line.
#[must_use]
pub fn first_word(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// A parsed `let` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement<'a> {
    /// The variable being bound.
    pub name:    &'a str,
    /// Whether the binding was declared `mut`.
    pub mutable: bool,
    /// The trimmed text after the first `=`.
    pub literal: &'a str,
}

/// Splits a `let` line into its name and literal.
///
/// The name is the second word, skipping an optional `mut`; a name glued to
/// its `=` (`let x=5`) is cut at the `=`. The literal is everything after the
/// first `=`, trimmed.
///
/// # Errors
/// Returns [`ParseError::MalformedLet`] if the name, the `=`, or the literal
/// is missing.
///
/// # Example
/// ```
/// use linea::interpreter::tokenizer::parse_let;
///
/// let stmt = parse_let("let mut x = 5").unwrap();
/// assert_eq!(stmt.name, "x");
/// assert!(stmt.mutable);
/// assert_eq!(stmt.literal, "5");
/// ```
pub fn parse_let(line: &str) -> Result<LetStatement<'_>, ParseError> {
    let (head, literal) = line.split_once('=').ok_or(ParseError::MalformedLet)?;
    let literal = literal.trim();

    let mut words = line.split_whitespace().skip(1);
    let mut name = words.next().ok_or(ParseError::MalformedLet)?;
    let mutable = name == "mut";
    if mutable {
        name = words.next().ok_or(ParseError::MalformedLet)?;
    }
    let name = name.split_once('=').map_or(name, |(before, _)| before);

    // The name must come before the `=`, not after it.
    if name.is_empty() || literal.is_empty() || !head.contains(name) {
        return Err(ParseError::MalformedLet);
    }

    Ok(LetStatement { name, mutable, literal })
}

/// Returns the argument of a keyword line.
///
/// This is the text after the first occurrence of the token's keyword,
/// trimmed. Lines without a keyword have no argument.
///
/// # Example
/// ```
/// use linea::interpreter::tokenizer::{Token, argument};
///
/// assert_eq!(argument("puts \"hi\"", Token::Puts), "\"hi\"");
/// assert_eq!(argument("if x > 1 {", Token::If), "x > 1 {");
/// ```
#[must_use]
pub fn argument(line: &str, token: Token) -> &str {
    token.keyword()
         .and_then(|keyword| line.find(keyword).map(|at| &line[at + keyword.len()..]))
         .map_or("", str::trim)
}
