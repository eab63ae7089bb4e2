//! # linea
//!
//! linea is the front end and execution driver of a small line-oriented
//! scripting language. A program is a sequence of lines; each line binds a
//! variable, prints something, or opens or closes a block:
//!
//! ```text
//! let mut count = 3        # comments run to the end of the line
//! let greeting = "hi"
//! for i in 0..count {
//!     let local = 'x'
//!     puts "{greeting} {local}"
//! }
//! ```
//!
//! Source text is preprocessed into logical lines and run in a single pass.
//! Block conditions are not evaluated and arithmetic stays as written; what
//! the interpreter checks is that every literal gets a type, every printed
//! name resolves, and every block is closed in order.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    fs,
    io::{self, Stdout, Write},
    path::Path,
};

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Config, Interpreter},
        preprocessor::preprocess,
    },
};

/// Provides unified error types for preprocessing, parsing, and execution.
///
/// Every error carries the source line it belongs to and maps to a process
/// exit code.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches line numbers for context.
/// - Chains inner errors through `std::error::Error::source`.
pub mod error;
/// Orchestrates the entire process of running a program.
///
/// This module ties together preprocessing, tokenizing, literal inference,
/// the symbol table, and the execution driver.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for executing source text line by line.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a program and returns the finished interpreter.
///
/// Program output (and the construct trace, if enabled) is written to `out`.
/// The returned interpreter gives access to the final bindings and the sink.
///
/// # Errors
/// Returns the first preprocessing, parsing, scope, lookup, or write error.
///
/// # Examples
/// ```
/// use linea::{execute, interpreter::evaluator::core::Config};
///
/// let source = "let x = 2\nputs \"x is {x}\"";
/// let interpreter = execute(source, Config::default(), Vec::new()).unwrap();
/// assert_eq!(interpreter.into_output(), b"x is 2\n");
///
/// // A `}` without an open block is an error.
/// assert!(execute("}", Config::default(), Vec::new()).is_err());
/// ```
pub fn execute<W: Write>(source: &str, config: Config, out: W) -> Result<Interpreter<W>, Error> {
    let lines = preprocess(source)?;
    let mut interpreter = Interpreter::new(config, out);
    interpreter.run(&lines)?;
    Ok(interpreter)
}

/// Reads a source file and runs it, writing output to standard output.
///
/// # Errors
/// Returns [`Error::Read`] if the file cannot be read, otherwise the same
/// errors as [`execute`].
pub fn run_file<P: AsRef<Path>>(path: P, config: Config) -> Result<Interpreter<Stdout>, Error> {
    let source = fs::read_to_string(path).map_err(Error::Read)?;
    execute(&source, config, io::stdout())
}
