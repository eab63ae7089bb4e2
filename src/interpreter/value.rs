use std::fmt::Display;

use ordered_float::OrderedFloat;

/// Represents a runtime value in the interpreter.
///
/// This enum models every value a `let` binding can hold. The two
/// `Unresolved*` variants keep the raw literal text of constructs that are
/// recognized but not evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 64 bit signed integer such as `42`.
    Integer(i64),
    /// A double precision float such as `3.14`.
    Float(OrderedFloat<f64>),
    /// A single character such as `'a'`.
    Character(char),
    /// A boolean, `true` or `false`.
    Boolean(bool),
    /// A string, stored without its surrounding quotes.
    Text(String),
    /// Arithmetic such as `1 + 2 * 3`, kept as written.
    UnresolvedArithmetic(String),
    /// A bare name such as `other`, kept as written.
    UnresolvedReference(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(OrderedFloat(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Character(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// Returns the name of the value's type, as used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "double",
            Self::Character(_) => "char",
            Self::Boolean(_) => "bool",
            Self::Text(_) => "string",
            Self::UnresolvedArithmetic(_) => "arithmetic",
            Self::UnresolvedReference(_) => "reference",
        }
    }

    /// Returns `true` for values whose literal was recognized but not
    /// evaluated.
    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        matches!(self, Self::UnresolvedArithmetic(_) | Self::UnresolvedReference(_))
    }

    /// Renders the value as literal source text.
    ///
    /// Feeding the result back through the classifier yields the same value
    /// for integers, non-negative floats, booleans, characters, and strings.
    ///
    /// # Example
    /// ```
    /// use linea::interpreter::value::Value;
    ///
    /// assert_eq!(Value::from(3.0).to_literal(), "3.0");
    /// assert_eq!(Value::from(1e16).to_literal(), "10000000000000000.0");
    /// assert_eq!(Value::from('a').to_literal(), "'a'");
    /// assert_eq!(Value::from("hi").to_literal(), "\"hi\"");
    /// ```
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Self::Integer(i) => i.to_string(),
            // `Display` never switches to exponent notation, but drops the
            // fraction of whole floats.
            Self::Float(f) => {
                let text = f.0.to_string();
                if text.contains('.') { text } else { format!("{text}.0") }
            },
            Self::Character(c) => format!("'{c}'"),
            Self::Boolean(b) => b.to_string(),
            Self::Text(s) => format!("\"{s}\""),
            Self::UnresolvedArithmetic(raw) | Self::UnresolvedReference(raw) => raw.clone(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{}", v.0),
            Self::Character(c) => write!(f, "{c}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::UnresolvedArithmetic(raw) | Self::UnresolvedReference(raw) => {
                write!(f, "{raw}")
            },
        }
    }
}
