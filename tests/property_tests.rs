//! Property-based tests for the layout and substitution guarantees
//!
//! Generated value trees are rendered in every notation and checked for
//! valid output, deterministic results and balanced nesting.

use paramdoc::{
    to_fragment, to_string, to_string_with_options, Depth, Format, Map, Options, Separator,
    StructuredWriter, TextWriter, Value,
};
use proptest::prelude::*;

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9f64).prop_map(Value::from),
        "[a-z \"\\\\\n]{0,8}".prop_map(Value::from),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>())),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z]{1,6}", arb_value(), 0..8)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>()))
}

fn arb_format() -> impl Strategy<Value = Format> {
    prop_oneof![
        Just(Format::Plain),
        Just(Format::ExtVar),
        Just(Format::LetBinding),
        Just(Format::Module),
    ]
}

/// One structural step of a randomly generated call sequence.
#[derive(Clone, Debug)]
enum Step {
    Block(Option<String>),
    Titled(String, String),
    List(Option<String>),
    Scalar(i64),
}

fn arb_steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        prop_oneof![
            proptest::option::of("[a-z]{1,4}").prop_map(Step::Block),
            ("[a-z]{1,4}", "[a-z]{1,4}").prop_map(|(k, t)| Step::Titled(k, t)),
            proptest::option::of("[a-z]{1,4}").prop_map(Step::List),
            any::<i64>().prop_map(Step::Scalar),
        ],
        0..12,
    )
}

proptest! {
    #[test]
    fn prop_plain_output_is_json(doc in arb_document()) {
        let text = to_string(&doc).unwrap();
        prop_assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok(), "{}", text);
        prop_assert!(text.ends_with("}\n"), "expected trailing brace and newline: {:?}", text);
    }

    #[test]
    fn prop_fragment_is_json_on_one_line(doc in arb_document()) {
        let fragment = to_fragment(&doc).unwrap();
        prop_assert!(!fragment.contains(&b'\n'));
        prop_assert!(serde_json::from_slice::<serde_json::Value>(&fragment).is_ok());
    }

    #[test]
    fn prop_rendering_is_deterministic(
        doc in arb_document(),
        format in arb_format(),
        value in "[a-z]{1,3}",
    ) {
        let options = Options::new().with_format(format).with_param("p", value);
        let first = to_string_with_options(&doc, &options).unwrap();
        let second = to_string_with_options(&doc, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_without_matches_every_notation_equals_plain(
        doc in arb_document(),
        format in arb_format(),
    ) {
        // Generated strings never contain uppercase letters.
        let options = Options::new().with_format(format).with_param("p", "NEVER");
        let text = to_string_with_options(&doc, &options).unwrap();
        prop_assert_eq!(text, to_string(&doc).unwrap());
    }

    #[test]
    fn prop_declarations_precede_body(doc in arb_document(), format in arb_format()) {
        let options = Options::new().with_format(format).with_param("p", "a");
        let text = to_string_with_options(&doc, &options).unwrap();
        let body_start = text.find("{\n").unwrap();
        let preamble = &text[..body_start];
        prop_assert!(preamble.is_empty() || preamble.ends_with(";\n\n"));
        prop_assert!(preamble.matches('\n').count() <= 2);
    }

    #[test]
    fn prop_nesting_restores_depth(steps in arb_steps()) {
        let mut writer = TextWriter::new(Vec::new());
        writer.begin();
        for step in &steps {
            match step {
                Step::Block(key) => {
                    writer.begin_block(key.as_deref(), None);
                    writer.key_int("x", 1);
                    writer.end_block();
                }
                Step::Titled(key, title) => {
                    writer.begin_block(Some(key.as_str()), Some(title.as_str()));
                    writer.end_block();
                }
                Step::List(key) => {
                    writer.begin_list(key.as_deref());
                    writer.string("s", true);
                    writer.end_list();
                }
                Step::Scalar(n) => writer.int(*n),
            }
            prop_assert_eq!(writer.depth(), Depth::Level(1));
            prop_assert_eq!(writer.separator(), Separator::Subsequent);
        }
        writer.end();
        prop_assert_eq!(writer.depth(), Depth::Level(0));
        prop_assert!(writer.error().is_none());
    }
}
