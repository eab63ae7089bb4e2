/// Raised when a line does not start with any known construct.
///
/// Only reported when the interpreter runs in strict mode; otherwise such
/// lines are skipped.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The leading word matched no keyword or brace.
    #[error("Unknown construct '{word}'")]
    UnknownConstruct {
        /// The first word of the offending line.
        word: String,
    },
}

/// Represents all errors that can occur while parsing a `let` statement.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The statement is missing its name, its `=`, or its value.
    #[error("Malformed let statement; expected `let [mut] <name> = <value>`")]
    MalformedLet,
    /// The right-hand side matched a literal grammar but is not a valid value.
    #[error("Invalid literal `{literal}`: {source}")]
    InvalidLiteral {
        /// The literal text as written.
        literal: String,
        /// Why the literal was rejected.
        source:  LiteralError,
    },
}

/// Raised by the value parser for literals it cannot convert.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// An integer literal does not fit in 64 bits.
    #[error("integer is too large")]
    IntegerTooLarge,
    /// A float literal could not be parsed.
    #[error("not a valid floating point number")]
    InvalidFloat,
    /// A character literal is not of the form `'c'`.
    #[error("character literals must be written as 'c'")]
    MalformedCharacter,
}
