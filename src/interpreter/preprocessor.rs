use tracing::trace;

use crate::error::PreprocessError;

/// A logical source line after preprocessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The 1-based line number in the original source.
    pub number: usize,
    /// The line text, comment-free and left-trimmed.
    pub text:   String,
}

impl Line {
    /// Creates a line.
    #[must_use]
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self { number, text: text.into() }
    }
}

/// Turns raw source text into logical lines.
///
/// For every line, a `#` comment is cut off unless the `#` sits between the
/// first and last `"` of the line; leading spaces (not tabs) are removed and
/// lines left empty are dropped. A `#` following a string that itself
/// contains a `#` is still taken as part of the string.
///
/// # Errors
/// Returns [`PreprocessError::UnbalancedQuotes`] if a line is cut at a `#`
/// and the code before it contains an odd number of `"`.
///
/// # Example
/// ```
/// use linea::interpreter::preprocessor::preprocess;
///
/// let lines = preprocess("let x = 5 # set x\n\n   let s = \"a#b\"\n").unwrap();
/// let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
/// assert_eq!(texts, ["let x = 5", "let s = \"a#b\""]);
/// assert_eq!(lines[1].number, 3);
/// ```
pub fn preprocess(source: &str) -> Result<Vec<Line>, PreprocessError> {
    let mut lines = Vec::new();

    for (index, raw) in source.split('\n').enumerate() {
        let number = index + 1;
        let raw = raw.trim_end_matches('\r');
        let code = strip_comment(raw, number)?;
        let text = code.trim_start_matches(' ');

        if text.is_empty() {
            continue;
        }
        lines.push(Line::new(number, text));
    }

    trace!(lines = lines.len(), "preprocessed source");
    Ok(lines)
}

/// Joins line texts back into source text.
///
/// Preprocessing the result again yields the same texts.
#[must_use]
pub fn to_source(lines: &[Line]) -> String {
    lines.iter().map(|line| line.text.as_str()).collect::<Vec<_>>().join("\n")
}

/// Removes a trailing `#` comment from one raw line.
fn strip_comment(raw: &str, number: usize) -> Result<&str, PreprocessError> {
    let Some(hash) = raw.find('#') else {
        return Ok(raw);
    };

    if let (Some(first), Some(last)) = (raw.find('"'), raw.rfind('"'))
       && first < hash
       && hash < last
    {
        return Ok(raw);
    }

    let code = &raw[..hash];
    if code.matches('"').count() % 2 != 0 {
        return Err(PreprocessError::UnbalancedQuotes { line: number });
    }
    Ok(code.trim_end())
}
