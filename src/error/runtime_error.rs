use crate::interpreter::symbols::FrameId;

/// Represents all violations of block nesting.
///
/// Every variant is fatal: the run stops at the first one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// A `}` appeared while no block was open.
    #[error("Unmatched '}}'; no block is open")]
    UnmatchedClose,
    /// A frame was popped from a symbol table that has no open frames.
    #[error("Cannot close {expected}; no scope is open")]
    EmptyStack {
        /// The frame the caller meant to close.
        expected: FrameId,
    },
    /// The innermost open frame is not the one the caller meant to close.
    #[error("Cannot close {expected}; the innermost open scope is {found}")]
    Mismatch {
        /// The frame the caller meant to close.
        expected: FrameId,
        /// The frame actually on top of the stack.
        found:    FrameId,
    },
    /// The program ended with a block still open.
    #[error("Unclosed {frame} block")]
    Unclosed {
        /// The innermost frame left open.
        frame: FrameId,
    },
}

/// Raised when a name does not resolve in any visible scope.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No visible scope binds the name.
    #[error("Unknown variable '{name}'")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Following the variable's references leads back to a name already
    /// visited.
    #[error("Variable '{name}' refers to itself through a cycle of references")]
    CyclicReference {
        /// The name whose lookup started the cycle.
        name: String,
    },
}
