use linea::{
    error::{LiteralError, ParseError, PreprocessError},
    interpreter::{
        lexer::{ArithToken, lex_arithmetic},
        literal::{LiteralClass, classify, infer, parse_literal},
        preprocessor::{Line, preprocess, to_source},
        tokenizer::{Token, argument, parse_let, tokenize},
        value::Value,
    },
};
use pretty_assertions::assert_eq;

fn texts(source: &str) -> Vec<String> {
    preprocess(source).expect("preprocess succeeds").into_iter().map(|line| line.text).collect()
}

#[test]
fn comment_after_code_is_stripped() {
    assert_eq!(texts("let x = 5 # set x"), ["let x = 5"]);
}

#[test]
fn hash_inside_string_keeps_line() {
    assert_eq!(texts("let s = \"a#b\""), ["let s = \"a#b\""]);
}

#[test]
fn hash_after_string_containing_hash_is_kept() {
    // The second `#` still lies between the first and last quote.
    assert_eq!(texts("let s = \"#\" # \"x\""), ["let s = \"#\" # \"x\""]);
}

#[test]
fn hash_after_plain_string_is_a_comment() {
    assert_eq!(texts("puts \"hi\"   # greet"), ["puts \"hi\""]);
}

#[test]
fn only_spaces_are_left_trimmed() {
    assert_eq!(texts("    let a = 1\n\tlet b = 2"), ["let a = 1", "\tlet b = 2"]);
}

#[test]
fn blank_and_comment_lines_are_dropped_and_numbers_kept() {
    let lines = preprocess("# title\n\n   \nlet a = 1\r\n  # note\nputs a\n").unwrap();
    assert_eq!(lines, [Line::new(4, "let a = 1"), Line::new(6, "puts a")]);
}

#[test]
fn unbalanced_quote_before_comment_fails() {
    assert_eq!(preprocess("let a = 1\nlet s = \"open # rest"),
               Err(PreprocessError::UnbalancedQuotes { line: 2 }));
}

#[test]
fn unbalanced_quote_inside_comment_is_fine() {
    assert_eq!(texts("let a = 1 # say \"hi"), ["let a = 1"]);
}

#[test]
fn preprocessing_output_is_stable() {
    let source = "  let x = 1 # c\n\n\tif x {\n  puts \"#{x}\"\n}\n";
    let once = preprocess(source).unwrap();
    let twice = preprocess(&to_source(&once)).unwrap();

    let once: Vec<_> = once.into_iter().map(|line| line.text).collect();
    let twice: Vec<_> = twice.into_iter().map(|line| line.text).collect();
    assert_eq!(once, twice);
}

#[test]
fn tokenizer_keywords() {
    assert_eq!(tokenize("let x = 1"), Token::Let);
    assert_eq!(tokenize("print x"), Token::Print);
    assert_eq!(tokenize("puts x"), Token::Puts);
    assert_eq!(tokenize("if x {"), Token::If);
    assert_eq!(tokenize("elif x {"), Token::Elif);
    assert_eq!(tokenize("else {"), Token::Else);
    assert_eq!(tokenize("for i in xs {"), Token::For);
    assert_eq!(tokenize("{"), Token::OpenBrace);
    assert_eq!(tokenize("}"), Token::CloseBrace);
    assert_eq!(tokenize("x = 1"), Token::None);
    assert_eq!(tokenize(""), Token::None);
}

#[test]
fn tokenizer_tests_containment_in_priority_order() {
    // `elif` contains `if` but is tested first.
    assert_eq!(tokenize("elif"), Token::Elif);
    // Keywords are matched anywhere inside the first word.
    assert_eq!(tokenize("println x"), Token::Print);
    assert_eq!(tokenize("if(x){"), Token::If);
    assert_eq!(tokenize("} else {"), Token::CloseBrace);
    // Only the first word counts.
    assert_eq!(tokenize("x let"), Token::None);
}

#[test]
fn let_statement_parsing() {
    let stmt = parse_let("let mut x = 5").unwrap();
    assert_eq!((stmt.name, stmt.mutable, stmt.literal), ("x", true, "5"));

    let stmt = parse_let("let greeting = \"a = b\"").unwrap();
    assert_eq!((stmt.name, stmt.mutable, stmt.literal), ("greeting", false, "\"a = b\""));

    let stmt = parse_let("let y=2").unwrap();
    assert_eq!((stmt.name, stmt.literal), ("y", "2"));
}

#[test]
fn malformed_let_statements() {
    for line in ["let", "let x", "let x =", "let = 3", "let mut = 3", "let mut"] {
        assert_eq!(parse_let(line), Err(ParseError::MalformedLet), "{line}");
    }
}

#[test]
fn let_example_from_tokens_to_value() {
    let line = "let mut x = 5";
    assert_eq!(tokenize(line), Token::Let);

    let stmt = parse_let(line).unwrap();
    assert_eq!(stmt.name, "x");
    assert_eq!(infer(stmt.literal), Ok(Value::Integer(5)));
}

#[test]
fn keyword_arguments() {
    assert_eq!(argument("puts \"hi\"", Token::Puts), "\"hi\"");
    assert_eq!(argument("print", Token::Print), "");
    assert_eq!(argument("x = 1", Token::None), "");
}

#[test]
fn classification_rules() {
    let cases = [("3.14", LiteralClass::Float),
                 (".5", LiteralClass::Float),
                 ("42", LiteralClass::Integer),
                 ("007", LiteralClass::Integer),
                 ("true", LiteralClass::Boolean),
                 ("false", LiteralClass::Boolean),
                 ("'a'", LiteralClass::Character),
                 ("\"text\"", LiteralClass::Text),
                 ("\"\"", LiteralClass::Text),
                 ("1 + 2", LiteralClass::Arithmetic),
                 ("-1 * 2.5", LiteralClass::Arithmetic),
                 ("(1+2)*3", LiteralClass::Arithmetic),
                 ("10 / (4 - 2)", LiteralClass::Arithmetic),
                 ("1 2 + 3", LiteralClass::Arithmetic),
                 ("name", LiteralClass::Reference),
                 ("-5", LiteralClass::Reference),
                 ("3.", LiteralClass::Reference),
                 ("1 +", LiteralClass::Reference),
                 ("x + 1", LiteralClass::Reference),
                 ("True", LiteralClass::Reference),
                 ("'ab'", LiteralClass::Reference),
                 ("", LiteralClass::Reference)];

    for (text, class) in cases {
        assert_eq!(classify(text), class, "{text:?}");
    }
}

#[test]
fn classification_priority() {
    // `'1'` looks like neither a number nor text; the character rule wins.
    assert_eq!(classify("'1'"), LiteralClass::Character);
    // Two-quote short forms are characters even when malformed.
    assert_eq!(classify("''"), LiteralClass::Character);
    // A quoted number is text, not a number.
    assert_eq!(classify("\"12\""), LiteralClass::Text);
}

#[test]
fn value_parsing() {
    assert_eq!(infer("3.14"), Ok(Value::from(3.14)));
    assert_eq!(infer("'a'"), Ok(Value::Character('a')));
    assert_eq!(infer("  17 "), Ok(Value::Integer(17)));
    assert_eq!(infer("false"), Ok(Value::Boolean(false)));
    assert_eq!(infer("\"a b\""), Ok(Value::Text("a b".into())));
    assert_eq!(infer("2 * (3)"), Ok(Value::UnresolvedArithmetic("2 * (3)".into())));
    assert_eq!(infer("other"), Ok(Value::UnresolvedReference("other".into())));
}

#[test]
fn value_parsing_errors() {
    assert_eq!(parse_literal("99999999999999999999", LiteralClass::Integer),
               Err(LiteralError::IntegerTooLarge));
    for text in ["''", "a''", "''a"] {
        assert_eq!(infer(text), Err(LiteralError::MalformedCharacter), "{text}");
    }
}

#[test]
fn literal_round_trip() {
    let values = [Value::Integer(0),
                  Value::Integer(i64::MAX),
                  Value::from(0.5),
                  Value::from(3.0),
                  Value::from(123.456),
                  Value::from(1e16),
                  Value::from(1e-5),
                  Value::from(f64::MAX),
                  Value::Boolean(true),
                  Value::Boolean(false),
                  Value::Character('q'),
                  Value::Character('#'),
                  Value::Text(String::new()),
                  Value::Text("with \"inner\" quotes".into())];

    for value in values {
        let text = value.to_literal();
        assert_eq!(parse_literal(&text, classify(&text)), Ok(value.clone()), "{text}");
    }

    assert_eq!(Value::from(1e-5).to_literal(), "0.00001");
}

#[test]
fn arithmetic_lexer() {
    use ArithToken::*;

    assert_eq!(lex_arithmetic("(1.5+2)"), Some(vec![LParen, Number, Plus, Number, RParen]));
    assert_eq!(lex_arithmetic("1%2"), None);
}
