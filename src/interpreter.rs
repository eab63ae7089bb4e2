/// The preprocessor turns raw source text into logical lines.
///
/// It strips `#` comments (leaving `#` inside double-quoted strings alone),
/// removes leading spaces, and drops blank lines. Every surviving line keeps
/// its original line number for error reporting.
pub mod preprocessor;
/// The tokenizer classifies a line by its leading keyword.
///
/// Each line maps to exactly one [`tokenizer::Token`]. The module also parses
/// `let` statements into a name and a literal.
///
/// # Responsibilities
/// - Decides which construct a line opens, closes, or performs.
/// - Splits `let [mut] name = literal` into its parts.
/// - Extracts keyword arguments for `print` and `puts`.
pub mod tokenizer;
/// The lexer module tokenizes arithmetic literals.
///
/// A DFA lexer for numbers, operators, and parentheses. The literal
/// classifier walks its output to decide whether a literal is arithmetic.
pub mod lexer;
/// Literal classification and value parsing.
///
/// Decides which value grammar the right-hand side of a `let` matches and
/// converts it into a typed [`value::Value`]. Rules are tried in a fixed
/// order and the first match wins, so every literal lands in exactly one
/// class.
pub mod literal;
/// The value module defines the runtime data types.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Renders values for program output and back into literal source text.
pub mod value;
/// Variable storage with nested block scopes.
///
/// Holds the global bindings and a stack of frames, one per open block.
/// Lookups search the innermost frame first; writes land in the innermost
/// frame so they vanish when the block closes.
pub mod symbols;
/// The execution driver.
///
/// Walks the preprocessed lines once, in order, dispatching each to its
/// handler and keeping block frames balanced.
pub mod evaluator;
