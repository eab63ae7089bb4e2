use crate::{
    error::{Error, LookupError, ParseError},
    interpreter::{
        literal::{LiteralClass, classify, parse_literal},
        symbols::SymbolTable,
        value::Value,
    },
};

/// Renders the argument of a `print` or `puts` line.
///
/// One pair of wrapping parentheses is removed first. An empty argument
/// renders as the empty string. A double-quoted argument is a template whose
/// `{name}` placeholders are replaced by the variables' values. Anything else
/// is inferred as a literal; names are resolved through any chain of
/// aliases, other values are printed as they are.
///
/// # Errors
/// - [`Error::Lookup`] if a referenced variable is not bound.
/// - [`Error::Parse`] if the argument is an invalid literal.
///
/// # Example
/// ```
/// use linea::interpreter::{evaluator::output::render, symbols::SymbolTable, value::Value};
///
/// let mut symbols = SymbolTable::new();
/// symbols.add_var("name", Value::Text("world".into()));
///
/// assert_eq!(render("(\"hello {name}\")", &symbols, 1).unwrap(), "hello world");
/// assert_eq!(render("name", &symbols, 1).unwrap(), "world");
/// assert_eq!(render("3.5", &symbols, 1).unwrap(), "3.5");
/// assert!(render("missing", &symbols, 1).is_err());
/// ```
pub fn render(argument: &str, symbols: &SymbolTable, line: usize) -> Result<String, Error> {
    let argument = strip_parens(argument.trim());
    if argument.is_empty() {
        return Ok(String::new());
    }

    let class = classify(argument);
    if class == LiteralClass::Text {
        return render_template(&argument[1..argument.len() - 1], symbols)
               .map_err(|source| Error::Lookup { line, source });
    }

    let value = parse_literal(argument, class).map_err(|source| {
                    Error::Parse { line,
                                   source: ParseError::InvalidLiteral { literal:
                                                                            argument.to_string(),
                                                                        source } }
                })?;

    match value {
        Value::UnresolvedReference(name) => symbols.resolve(&name)
                                                   .map(ToString::to_string)
                                                   .map_err(|source| Error::Lookup { line,
                                                                                     source }),
        other => Ok(other.to_string()),
    }
}

/// Substitutes `{name}` placeholders in a template.
///
/// `{{` and `}}` produce literal braces. A `{` that does not start a
/// placeholder is copied through unchanged.
///
/// # Errors
/// Returns [`LookupError::UnknownVariable`] for a placeholder naming an
/// unbound variable, or one bound to an alias of an unbound variable.
pub fn render_template(template: &str, symbols: &SymbolTable) -> Result<String, LookupError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(['{', '}']) {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if let Some((name, after)) = placeholder(tail) {
            out.push_str(&symbols.resolve(name)?.to_string());
            rest = after;
        } else {
            out.push_str(&tail[..1]);
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Splits `{name}rest` into `name` and `rest` when `name` is an identifier.
fn placeholder(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix('{')?;
    let close = inner.find('}')?;
    let name = &inner[..close];

    is_identifier(name).then(|| (name, &inner[close + 1..]))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
    && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Removes one pair of parentheses wrapping the whole argument.
///
/// `(1) + (2)` is left alone: its first `(` closes before the end.
fn strip_parens(argument: &str) -> &str {
    let Some(inner) = argument.strip_prefix('(').and_then(|inner| inner.strip_suffix(')')) else {
        return argument;
    };

    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return argument,
            ')' => depth -= 1,
            _ => {},
        }
    }
    inner.trim()
}
