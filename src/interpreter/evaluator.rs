/// Core execution logic and interpreter state.
///
/// Contains the line dispatcher, the block state machine, and the run
/// configuration.
pub mod core;

/// `print` and `puts` rendering.
///
/// Turns a keyword argument into output text, substituting variables from
/// the symbol table.
pub mod output;
