use std::{collections::HashMap, fmt::Display};

use tracing::trace;

use crate::{
    error::{LookupError, ScopeError},
    interpreter::value::Value,
};

/// The kinds of block that open a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
    /// `if`
    If,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `for`
    For,
}

impl BlockKind {
    /// All block kinds.
    pub const ALL: [Self; 4] = [Self::If, Self::Elif, Self::Else, Self::For];

    /// Returns the keyword that opens this kind of block.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::For => "for",
        }
    }
}

impl Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Identifies a frame: its block kind and its sequence number within that
/// kind.
///
/// Sequence numbers start at 0 and are never reused by the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId {
    /// The kind of block that opened the frame.
    pub kind:     BlockKind,
    /// How many frames of this kind were opened before it.
    pub sequence: usize,
}

impl Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' #{}", self.kind, self.sequence)
    }
}

/// A local scope owned by one open block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The frame's identity.
    pub id:        FrameId,
    /// Bindings made while this frame was the innermost one.
    pub variables: HashMap<String, Value>,
}

/// Variable storage: global bindings plus a stack of block frames.
///
/// ## Usage
///
/// The driver calls [`SymbolTable::new_scope`] when a block opens and
/// [`SymbolTable::pop_scope`] when it closes. [`SymbolTable::add_var`] always
/// writes to the innermost open frame, so bindings made inside a block are
/// gone once it closes.
///
/// # Example
/// ```
/// use linea::interpreter::{
///     symbols::{BlockKind, SymbolTable},
///     value::Value,
/// };
///
/// let mut symbols = SymbolTable::new();
/// symbols.add_var("x", Value::Integer(1));
///
/// let frame = symbols.new_scope(BlockKind::If);
/// symbols.add_var("y", Value::Integer(2));
/// assert!(symbols.contains_all(["x", "y"]));
///
/// symbols.pop_scope(frame).unwrap();
/// assert!(symbols.get_val("y").is_err());
/// ```
#[derive(Debug, Default)]
pub struct SymbolTable {
    globals:   HashMap<String, Value>,
    frames:    Vec<Frame>,
    sequences: HashMap<BlockKind, usize>,
}

impl SymbolTable {
    /// Creates a table with no bindings and no open frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value` in the active scope, replacing any binding of
    /// the same name there.
    pub fn add_var(&mut self, name: &str, value: Value) {
        trace!(name, value = %value, depth = self.depth(), "bind");
        self.active_scope_mut().insert(name.to_string(), value);
    }

    /// Resolves `name`, searching the innermost frame first and the global
    /// bindings last.
    ///
    /// # Errors
    /// Returns [`LookupError::UnknownVariable`] if no visible scope binds
    /// `name`.
    pub fn get_val(&self, name: &str) -> Result<&Value, LookupError> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.variables.get(name))
            .or_else(|| self.globals.get(name))
            .ok_or_else(|| LookupError::UnknownVariable { name: name.to_string() })
    }

    /// Resolves `name` to a concrete value, following bindings whose value is
    /// itself a bare name (`let b = a`) until a non-reference value is found.
    ///
    /// A chain longer than the number of visible bindings must revisit a
    /// name, so it is reported as a cycle.
    ///
    /// # Errors
    /// - [`LookupError::UnknownVariable`] for the first unbound name in the
    ///   chain.
    /// - [`LookupError::CyclicReference`] if the chain loops.
    ///
    /// # Example
    /// ```
    /// use linea::interpreter::{symbols::SymbolTable, value::Value};
    ///
    /// let mut symbols = SymbolTable::new();
    /// symbols.add_var("a", Value::Integer(1));
    /// symbols.add_var("b", Value::UnresolvedReference("a".into()));
    ///
    /// assert_eq!(symbols.resolve("b"), Ok(&Value::Integer(1)));
    /// ```
    pub fn resolve(&self, name: &str) -> Result<&Value, LookupError> {
        let limit = self.visible_bindings().len();
        let mut value = self.get_val(name)?;

        for _ in 0..limit {
            match value {
                Value::UnresolvedReference(target) => value = self.get_val(target)?,
                _ => return Ok(value),
            }
        }

        match value {
            Value::UnresolvedReference(_) => {
                Err(LookupError::CyclicReference { name: name.to_string() })
            },
            _ => Ok(value),
        }
    }

    /// Returns `true` if every name resolves in a visible scope.
    pub fn contains_all<I, S>(&self, names: I) -> bool
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        names.into_iter().all(|name| self.get_val(name.as_ref()).is_ok())
    }

    /// Opens a new empty frame of the given kind and returns its id.
    pub fn new_scope(&mut self, kind: BlockKind) -> FrameId {
        let next = self.sequences.entry(kind).or_insert(0);
        let id = FrameId { kind, sequence: *next };
        *next += 1;

        self.frames.push(Frame { id, variables: HashMap::new() });
        trace!(frame = %id, depth = self.depth(), "push scope");
        id
    }

    /// Closes the innermost frame, which must be `expected`.
    ///
    /// Returns the closed frame with the bindings it held.
    ///
    /// # Errors
    /// - [`ScopeError::EmptyStack`] if no frame is open.
    /// - [`ScopeError::Mismatch`] if the innermost frame is not `expected`;
    ///   the stack is left unchanged.
    pub fn pop_scope(&mut self, expected: FrameId) -> Result<Frame, ScopeError> {
        let found = self.frames.last().ok_or(ScopeError::EmptyStack { expected })?.id;
        if found != expected {
            return Err(ScopeError::Mismatch { expected, found });
        }

        let frame = self.frames.pop().ok_or(ScopeError::EmptyStack { expected })?;
        trace!(frame = %frame.id, dropped = frame.variables.len(), "pop scope");
        Ok(frame)
    }

    /// Returns the number of open frames.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns the innermost open frame, if any.
    #[must_use]
    pub fn innermost(&self) -> Option<FrameId> {
        self.frames.last().map(|frame| frame.id)
    }

    /// Returns the global bindings.
    #[must_use]
    pub const fn globals(&self) -> &HashMap<String, Value> {
        &self.globals
    }

    /// Returns every visible binding, sorted by name.
    ///
    /// A name bound in several scopes appears once, with the value lookup
    /// would return.
    #[must_use]
    pub fn visible_bindings(&self) -> Vec<(&str, &Value)> {
        let mut visible: HashMap<&str, &Value> =
            self.globals.iter().map(|(name, value)| (name.as_str(), value)).collect();
        for frame in &self.frames {
            visible.extend(frame.variables.iter().map(|(name, value)| (name.as_str(), value)));
        }

        let mut bindings: Vec<_> = visible.into_iter().collect();
        bindings.sort_unstable_by_key(|&(name, _)| name);
        bindings
    }

    /// The scope `add_var` writes to: the innermost frame, or the global
    /// bindings when no frame is open.
    fn active_scope_mut(&mut self) -> &mut HashMap<String, Value> {
        match self.frames.last_mut() {
            Some(frame) => &mut frame.variables,
            None => &mut self.globals,
        }
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.visible_bindings() {
            writeln!(f, "{name}: {} = {}", value.type_name(), value.to_literal())?;
        }
        Ok(())
    }
}
