use std::{collections::HashMap, io::Write};

use tracing::{debug, warn};

use crate::{
    error::{Error, LexError, ParseError, ScopeError},
    interpreter::{
        evaluator::output::render,
        literal::infer,
        preprocessor::Line,
        symbols::{BlockKind, FrameId, SymbolTable},
        tokenizer::{Token, argument, first_word, parse_let, tokenize},
    },
};

/// Result type used by the driver.
pub type ExecResult<T> = Result<T, Error>;

/// Run options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Write a `Handle ...` line to the output for every construct.
    pub trace:  bool,
    /// Treat lines that start with no known construct as errors instead of
    /// skipping them.
    pub strict: bool,
}

/// Stores the runtime state of one program run.
///
/// Lines are fed in source order with [`Interpreter::exec_line`] (or all at
/// once with [`Interpreter::run`]); [`Interpreter::finish`] then checks that
/// every block was closed.
///
/// Every open block is tracked on an explicit stack of frame ids, so a `}`
/// always closes the most recently opened block whatever its kind.
///
/// # Example
/// ```
/// use linea::interpreter::{
///     evaluator::core::{Config, Interpreter},
///     preprocessor::preprocess,
/// };
///
/// let lines = preprocess("let x = 1\nif x {\n    puts x\n}\n").unwrap();
/// let mut interpreter = Interpreter::new(Config::default(), Vec::new());
/// interpreter.run(&lines).unwrap();
///
/// assert_eq!(interpreter.into_output(), b"1\n");
/// ```
pub struct Interpreter<W: Write> {
    symbols:     SymbolTable,
    open_blocks: Vec<(FrameId, usize)>,
    open_counts: HashMap<BlockKind, usize>,
    config:      Config,
    out:         W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty symbol table that writes program
    /// output to `out`.
    pub fn new(config: Config, out: W) -> Self {
        Self { symbols: SymbolTable::new(),
               open_blocks: Vec::new(),
               open_counts: HashMap::new(),
               config,
               out }
    }

    /// Executes every line in order, then checks that no block is left open.
    ///
    /// # Errors
    /// Stops at the first failing line and returns its error.
    pub fn run(&mut self, lines: &[Line]) -> ExecResult<()> {
        for line in lines {
            self.exec_line(line.number, &line.text)?;
        }
        self.finish()
    }

    /// Executes a single preprocessed line.
    ///
    /// # Errors
    /// - [`Error::Parse`] for a malformed `let`.
    /// - [`Error::Lookup`] for `print`/`puts` of an unbound variable.
    /// - [`Error::Scope`] for a `}` with no open block.
    /// - [`Error::Lex`] for an unknown construct in strict mode.
    /// - [`Error::Write`] if the output cannot be written.
    pub fn exec_line(&mut self, line: usize, text: &str) -> ExecResult<()> {
        let token = tokenize(text);
        debug!(line, %token, depth = self.open_blocks.len(), "dispatch");

        match token {
            Token::Let => self.handle_let(line, text),
            Token::Print | Token::Puts => self.handle_output(line, text, token),
            Token::If | Token::Elif | Token::Else | Token::For => {
                self.trace(token, text)?;
                if let Some(kind) = token.block_kind() {
                    self.open_block(line, kind);
                }
                match inline_body(text) {
                    Some(body) => self.run_inline(line, body),
                    None => Ok(()),
                }
            },
            Token::OpenBrace => self.trace(token, text),
            Token::CloseBrace => self.close_block(line, text),
            Token::None => self.handle_unknown(line, text),
        }
    }

    /// Checks that every opened block was closed, then flushes the output.
    ///
    /// # Errors
    /// - [`ScopeError::Unclosed`] for the innermost open block, reported on
    ///   the line that opened it.
    /// - [`Error::Write`] if the output cannot be flushed.
    pub fn finish(&mut self) -> ExecResult<()> {
        if let Some(&(frame, line)) = self.open_blocks.last() {
            return Err(Error::Scope { line, source: ScopeError::Unclosed { frame } });
        }

        self.out.flush()?;
        Ok(())
    }

    /// Returns the symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Returns how many blocks of `kind` are currently open.
    #[must_use]
    pub fn open_count(&self, kind: BlockKind) -> usize {
        self.open_counts.get(&kind).copied().unwrap_or(0)
    }

    /// Returns the ids of the open blocks, outermost first.
    pub fn open_frames(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.open_blocks.iter().map(|&(frame, _)| frame)
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    fn handle_let(&mut self, line: usize, text: &str) -> ExecResult<()> {
        self.trace(Token::Let, text)?;

        let statement = parse_let(text).map_err(|source| Error::Parse { line, source })?;
        let value = infer(statement.literal).map_err(|source| {
                        Error::Parse { line,
                                       source: ParseError::InvalidLiteral { literal:
                                                                                statement.literal
                                                                                         .to_string(),
                                                                            source } }
                    })?;

        debug!(line, name = statement.name, kind = value.type_name(), "let");
        self.symbols.add_var(statement.name, value);
        Ok(())
    }

    fn handle_output(&mut self, line: usize, text: &str, token: Token) -> ExecResult<()> {
        self.trace(token, text)?;

        let rendered = render(argument(text, token), &self.symbols, line)?;
        match token {
            Token::Puts => writeln!(self.out, "{rendered}")?,
            _ => write!(self.out, "{rendered}")?,
        }
        Ok(())
    }

    fn open_block(&mut self, line: usize, kind: BlockKind) {
        *self.open_counts.entry(kind).or_insert(0) += 1;
        let frame = self.symbols.new_scope(kind);
        self.open_blocks.push((frame, line));
    }

    fn close_block(&mut self, line: usize, text: &str) -> ExecResult<()> {
        self.trace(Token::CloseBrace, text)?;

        let (frame, _) =
            self.open_blocks.pop().ok_or(Error::Scope { line, source: ScopeError::UnmatchedClose })?;
        self.symbols.pop_scope(frame).map_err(|source| Error::Scope { line, source })?;
        if let Some(count) = self.open_counts.get_mut(&frame.kind) {
            *count = count.saturating_sub(1);
        }

        // `} else {` closes one block and opens the next on the same line.
        let rest = text.split_once('}').map_or("", |(_, rest)| rest.trim());
        if rest.is_empty() { Ok(()) } else { self.exec_line(line, rest) }
    }

    /// Runs the body written between the braces of a one-line block, then
    /// closes the block.
    fn run_inline(&mut self, line: usize, body: &str) -> ExecResult<()> {
        if !body.is_empty() {
            self.exec_line(line, body)?;
        }
        self.close_block(line, "}")
    }

    fn handle_unknown(&mut self, line: usize, text: &str) -> ExecResult<()> {
        let word = first_word(text).unwrap_or_default();
        if self.config.strict {
            return Err(Error::Lex { line,
                                    source: LexError::UnknownConstruct { word: word.to_string() } });
        }

        warn!(line, word, "skipping line with no known construct");
        Ok(())
    }

    fn trace(&mut self, token: Token, text: &str) -> ExecResult<()> {
        if !self.config.trace {
            return Ok(());
        }

        let construct = match token {
            Token::OpenBrace => "open brace".to_string(),
            Token::CloseBrace => "close brace".to_string(),
            other => format!("{other} statement"),
        };
        writeln!(self.out, "Handle {construct}: {text}")?;
        Ok(())
    }
}

/// Returns the text between the opening `{` of a block line and a `}` ending
/// the same line, as in `if x { puts x }`.
///
/// The opening brace is the first one outside double quotes. Returns `None`
/// when the line does not end with a `}` after it.
fn inline_body(text: &str) -> Option<&str> {
    let mut quoted = false;
    for (i, c) in text.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '{' if !quoted => return text[i + 1..].trim_end().strip_suffix('}').map(str::trim),
            _ => {},
        }
    }
    None
}
