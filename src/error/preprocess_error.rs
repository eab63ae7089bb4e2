/// Represents all errors that can occur while preprocessing source text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PreprocessError {
    /// A comment marker follows an odd number of `"` characters, so it is
    /// impossible to tell whether the `#` starts a comment or sits inside an
    /// unterminated string.
    #[error("Error on line {line}: Unbalanced quotes before '#'; cannot tell a comment from string text.")]
    UnbalancedQuotes {
        /// The source line where the error occurred.
        line: usize,
    },
}
