use logos::Logos;

/// Represents a token of an arithmetic literal.
///
/// The classifier removes all whitespace before lexing, so the token set has
/// no whitespace rule. Any other character fails to lex, which means the
/// literal is not arithmetic.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArithToken {
    /// Decimal number such as `42` or `3.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl ArithToken {
    /// Returns `true` for the four binary operators.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }

    /// Returns `true` for `+` and `-`, which may also appear as a sign.
    #[must_use]
    pub const fn is_sign(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

/// Lexes `text` into arithmetic tokens.
///
/// # Returns
/// - `Some(tokens)`: If every character belongs to a token.
/// - `None`: If any character is not part of the arithmetic alphabet.
///
/// # Example
/// ```
/// use linea::interpreter::lexer::{ArithToken, lex_arithmetic};
///
/// assert_eq!(lex_arithmetic("1+2"),
///            Some(vec![ArithToken::Number, ArithToken::Plus, ArithToken::Number]));
/// assert_eq!(lex_arithmetic("x+1"), None);
/// ```
#[must_use]
pub fn lex_arithmetic(text: &str) -> Option<Vec<ArithToken>> {
    ArithToken::lexer(text).collect::<Result<Vec<_>, _>>().ok()
}
