use std::io;

/// Preprocessing errors.
///
/// Raised while turning raw source text into logical lines, before any line
/// is tokenized.
pub mod preprocess_error;
/// Lexing and parsing errors.
///
/// Covers unrecognized constructs, malformed `let` statements, and literals
/// whose text matched a grammar but could not be turned into a value.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while the driver executes lines: scope
/// discipline violations and failed variable lookups.
pub mod runtime_error;

pub use parse_error::{LexError, LiteralError, ParseError};
pub use preprocess_error::PreprocessError;
pub use runtime_error::{LookupError, ScopeError};

/// Exit code for a source file that could not be read.
pub const EXIT_NO_INPUT: u8 = 66;
/// Exit code for malformed source text (preprocessing).
pub const EXIT_DATA_ERROR: u8 = 65;
/// Exit code for an unrecognized construct in strict mode.
pub const EXIT_USAGE: u8 = 64;
/// Exit code for a malformed `let` statement or literal.
pub const EXIT_PARSE: u8 = 67;
/// Exit code for broken block nesting.
pub const EXIT_SCOPE: u8 = 70;
/// Exit code for an unresolved variable.
pub const EXIT_LOOKUP: u8 = 71;
/// Exit code for a failed write to the output sink.
pub const EXIT_IO: u8 = 74;

/// Any failure that ends a program run.
///
/// Errors produced by components that do not know which source line they are
/// working on get the line attached here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The source file could not be read.
    #[error("Failed to read the source file: {0}")]
    Read(#[source] io::Error),
    /// Program output could not be written.
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
    /// The raw text could not be split into logical lines.
    #[error(transparent)]
    Preprocess(#[from] PreprocessError),
    /// A line did not start with a known construct (strict mode only).
    #[error("Error on line {line}: {source}.")]
    Lex {
        /// The source line where the error occurred.
        line:   usize,
        /// What went wrong.
        source: LexError,
    },
    /// A `let` statement or literal was malformed.
    #[error("Error on line {line}: {source}.")]
    Parse {
        /// The source line where the error occurred.
        line:   usize,
        /// What went wrong.
        source: ParseError,
    },
    /// Block nesting was broken.
    #[error("Error on line {line}: {source}.")]
    Scope {
        /// The source line where the error occurred.
        line:   usize,
        /// What went wrong.
        source: ScopeError,
    },
    /// A variable could not be resolved.
    #[error("Error on line {line}: {source}.")]
    Lookup {
        /// The source line where the error occurred.
        line:   usize,
        /// What went wrong.
        source: LookupError,
    },
}

impl Error {
    /// Returns the process exit code tied to this kind of failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Read(_) => EXIT_NO_INPUT,
            Self::Write(_) => EXIT_IO,
            Self::Preprocess(_) => EXIT_DATA_ERROR,
            Self::Lex { .. } => EXIT_USAGE,
            Self::Parse { .. } => EXIT_PARSE,
            Self::Scope { .. } => EXIT_SCOPE,
            Self::Lookup { .. } => EXIT_LOOKUP,
        }
    }

    /// Returns the source line the error is attached to, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Read(_) | Self::Write(_) => None,
            Self::Preprocess(PreprocessError::UnbalancedQuotes { line }) => Some(*line),
            Self::Lex { line, .. }
            | Self::Parse { line, .. }
            | Self::Scope { line, .. }
            | Self::Lookup { line, .. } => Some(*line),
        }
    }
}
