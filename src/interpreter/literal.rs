use std::fmt::Display;

use crate::{
    error::LiteralError,
    interpreter::{
        lexer::{ArithToken, lex_arithmetic},
        value::Value,
    },
};

/// The value grammar a literal matched.
///
/// Variants are listed in the order the classifier tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralClass {
    /// `digits* . digits+`
    Float,
    /// `digits+`
    Integer,
    /// `true` or `false`
    Boolean,
    /// Two `'` characters, at most three characters long.
    Character,
    /// Wrapped in `"`.
    Text,
    /// Numbers joined by `+ - * /`, with optional parentheses.
    Arithmetic,
    /// Anything else; resolved as a name on lookup.
    Reference,
}

impl Display for LiteralClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Float => "double",
            Self::Integer => "int",
            Self::Boolean => "bool",
            Self::Character => "char",
            Self::Text => "string",
            Self::Arithmetic => "arithmetic",
            Self::Reference => "reference",
        };
        write!(f, "{name}")
    }
}

/// Classifies a literal.
///
/// The text is trimmed first. Rules are tried in order and the first match
/// wins; [`LiteralClass::Reference`] catches everything else, so this never
/// fails.
///
/// # Example
/// ```
/// use linea::interpreter::literal::{LiteralClass, classify};
///
/// assert_eq!(classify("3.14"), LiteralClass::Float);
/// assert_eq!(classify("42"), LiteralClass::Integer);
/// assert_eq!(classify("'a'"), LiteralClass::Character);
/// assert_eq!(classify("(1 + 2) * 3"), LiteralClass::Arithmetic);
/// assert_eq!(classify("other"), LiteralClass::Reference);
/// ```
#[must_use]
pub fn classify(text: &str) -> LiteralClass {
    let text = text.trim();

    if is_float(text) {
        LiteralClass::Float
    } else if is_integer(text) {
        LiteralClass::Integer
    } else if is_boolean(text) {
        LiteralClass::Boolean
    } else if is_character(text) {
        LiteralClass::Character
    } else if is_text(text) {
        LiteralClass::Text
    } else if is_arithmetic(text) {
        LiteralClass::Arithmetic
    } else {
        LiteralClass::Reference
    }
}

/// Converts a classified literal into a value.
///
/// `class` should come from [`classify`] on the same text.
///
/// # Errors
/// - [`LiteralError::IntegerTooLarge`] if an integer does not fit in `i64`.
/// - [`LiteralError::InvalidFloat`] if a float does not parse.
/// - [`LiteralError::MalformedCharacter`] if a character literal is not
///   written as `'c'`.
pub fn parse_literal(text: &str, class: LiteralClass) -> Result<Value, LiteralError> {
    let text = text.trim();

    match class {
        LiteralClass::Float => {
            text.parse::<f64>().map(Value::from).map_err(|_| LiteralError::InvalidFloat)
        },
        LiteralClass::Integer => {
            text.parse::<i64>().map(Value::Integer).map_err(|_| LiteralError::IntegerTooLarge)
        },
        LiteralClass::Boolean => Ok(Value::Boolean(text == "true")),
        LiteralClass::Character => parse_character(text).map(Value::Character),
        LiteralClass::Text => {
            let inner = text.strip_prefix('"').and_then(|t| t.strip_suffix('"')).unwrap_or(text);
            Ok(Value::Text(inner.to_string()))
        },
        LiteralClass::Arithmetic => Ok(Value::UnresolvedArithmetic(text.to_string())),
        LiteralClass::Reference => Ok(Value::UnresolvedReference(text.to_string())),
    }
}

/// Classifies and parses a literal in one step.
///
/// # Errors
/// Same as [`parse_literal`].
pub fn infer(text: &str) -> Result<Value, LiteralError> {
    parse_literal(text, classify(text))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_float(text: &str) -> bool {
    text.split_once('.').is_some_and(|(whole, fraction)| {
                                      (whole.is_empty() || is_digits(whole)) && is_digits(fraction)
                                  })
}

fn is_integer(text: &str) -> bool {
    is_digits(text)
}

fn is_boolean(text: &str) -> bool {
    matches!(text, "true" | "false")
}

fn is_character(text: &str) -> bool {
    text.chars().filter(|&c| c == '\'').count() == 2 && text.chars().count() <= 3
}

fn is_text(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

fn parse_character(text: &str) -> Result<char, LiteralError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some('\''), Some(c), Some('\''), None) if c != '\'' => Ok(c),
        _ => Err(LiteralError::MalformedCharacter),
    }
}

/// States of the arithmetic recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArithState {
    Start,
    /// Saw the optional leading `(`.
    LeadOpen,
    /// Saw the optional leading sign.
    LeadSign,
    /// Saw the first number; at least one operator group must follow.
    Head,
    /// Saw an operator.
    Operator,
    /// Saw the optional `(` of a group.
    GroupOpen,
    /// Saw the number of a group.
    Operand,
    /// Saw the optional `)` of a group.
    GroupClose,
}

fn is_arithmetic(text: &str) -> bool {
    let collapsed: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let Some(tokens) = lex_arithmetic(&collapsed) else {
        return false;
    };

    let mut state = ArithState::Start;
    for token in tokens {
        state = match (state, token) {
            (ArithState::Start, ArithToken::LParen) => ArithState::LeadOpen,
            (ArithState::Start | ArithState::LeadOpen, t) if t.is_sign() => ArithState::LeadSign,
            (ArithState::Start | ArithState::LeadOpen | ArithState::LeadSign,
             ArithToken::Number) => ArithState::Head,
            (ArithState::Head | ArithState::Operand | ArithState::GroupClose, t)
                if t.is_operator() =>
            {
                ArithState::Operator
            },
            (ArithState::Operator, ArithToken::LParen) => ArithState::GroupOpen,
            (ArithState::Operator | ArithState::GroupOpen, ArithToken::Number) => {
                ArithState::Operand
            },
            (ArithState::Operand, ArithToken::RParen) => ArithState::GroupClose,
            _ => return false,
        };
    }

    matches!(state, ArithState::Operand | ArithState::GroupClose)
}
