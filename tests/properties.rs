//! Property-based tests for the front end and the block state machine.
//!
//! 1. Idempotence: preprocess(preprocess(text)) == preprocess(text)
//! 2. Classification totality: every literal lands in exactly one class
//! 3. Literal round trip: classify(parse(v.to_literal())) == v for every
//!    literal type
//! 4. Scope discipline: balanced blocks leave no frames and no leaked globals

use std::collections::HashSet;

use linea::{
    execute,
    interpreter::{
        evaluator::core::Config,
        literal::{LiteralClass, classify, parse_literal},
        preprocessor::{preprocess, to_source},
        symbols::BlockKind,
        value::Value,
    },
};
use proptest::prelude::*;

// -- Strategies --

/// Source-like text: keywords, quotes, comment markers, and whitespace.
fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 \t\r\n#\"'{}=+]{0,80}").expect("valid regex")
}

/// Nested, balanced blocks of `let` lines.
fn block_strategy() -> impl Strategy<Value = String> {
    let leaf = "[a-z]{1,6}".prop_filter("`mut` is a modifier", |name| name != "mut")
                            .prop_map(|name| format!("let {name} = 1\n"));
    leaf.prop_recursive(4, 32, 4, |inner| {
            (prop::sample::select(BlockKind::ALL.to_vec()),
             prop::collection::vec(inner, 0..4))
                .prop_map(|(kind, body)| {
                    let body: String =
                        body.concat().lines().map(|line| format!("    {line}\n")).collect();
                    format!("{} c {{\n{body}}}\n", kind.keyword())
                })
        })
}

proptest! {
    #[test]
    fn preprocessing_is_idempotent(source in source_strategy()) {
        if let Ok(once) = preprocess(&source) {
            let twice = preprocess(&to_source(&once)).expect("preprocessed text is valid");

            let once: Vec<_> = once.iter().map(|line| line.text.as_str()).collect();
            let twice: Vec<_> = twice.iter().map(|line| line.text.as_str()).collect();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn classification_is_total(text in "\\PC{0,12}") {
        let class = classify(&text);
        // Only integers, floats and characters may be rejected by the parser.
        if let Err(e) = parse_literal(&text, class) {
            prop_assert!(matches!(class, LiteralClass::Integer | LiteralClass::Float
                                        | LiteralClass::Character),
                         "{class} literal {text:?} failed: {e}");
        }
    }

    #[test]
    fn unsigned_integers_round_trip(n in 0..=i64::MAX) {
        let text = n.to_string();
        prop_assert_eq!(classify(&text), LiteralClass::Integer);
        prop_assert_eq!(parse_literal(&text, LiteralClass::Integer), Ok(Value::Integer(n)));
    }

    #[test]
    fn non_negative_floats_round_trip(f in prop_oneof![0.0f64..1.0, 0.0f64..f64::MAX]) {
        let value = Value::from(f);
        let text = value.to_literal();
        prop_assert_eq!(classify(&text), LiteralClass::Float, "{}", text);
        prop_assert_eq!(parse_literal(&text, LiteralClass::Float), Ok(value));
    }

    #[test]
    fn booleans_round_trip(b in any::<bool>()) {
        let value = Value::Boolean(b);
        let text = value.to_literal();
        prop_assert_eq!(parse_literal(&text, classify(&text)), Ok(value));
    }

    #[test]
    fn characters_round_trip(c in any::<char>().prop_filter("quote delimits", |c| *c != '\'')) {
        let value = Value::Character(c);
        let text = value.to_literal();
        prop_assert_eq!(classify(&text), LiteralClass::Character, "{:?}", text);
        prop_assert_eq!(parse_literal(&text, LiteralClass::Character), Ok(value));
    }

    #[test]
    fn single_line_strings_round_trip(s in "[^\n]{0,24}") {
        let value = Value::Text(s);
        let text = value.to_literal();
        prop_assert_eq!(classify(&text), LiteralClass::Text, "{:?}", text);
        prop_assert_eq!(parse_literal(&text, LiteralClass::Text), Ok(value));
    }

    #[test]
    fn balanced_blocks_leave_no_trace(body in prop::collection::vec(block_strategy(), 1..4)) {
        let source = format!("let keep = 0\n{}", body.concat());
        let interpreter = execute(&source, Config::default(), Vec::new())
            .expect("balanced program runs");

        prop_assert_eq!(interpreter.open_frames().count(), 0);
        for kind in BlockKind::ALL {
            prop_assert_eq!(interpreter.open_count(kind), 0);
        }

        // Only unindented lets run outside every block.
        let top_level: HashSet<&str> = source.lines()
                                             .filter_map(|line| line.strip_prefix("let "))
                                             .filter_map(|rest| rest.split_whitespace().next())
                                             .collect();
        let globals: HashSet<&str> =
            interpreter.symbols().globals().keys().map(String::as_str).collect();
        prop_assert_eq!(globals, top_level);
    }
}
