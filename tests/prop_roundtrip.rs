//! Property tests: lexing never panics, and canonical formatting re-parses to
//! the same document.

use brikfmt::ast::insert_pair;
use brikfmt::{parse_str, tokenize, Document, Formatter, Key, Pair, Value};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_key().prop_map(|s| Value::identifier(&s)),
        "[a-zA-Z0-9 #=,{}\\[\\]\n]{0,12}".prop_map(|s| Value::string(&s)),
        "[0-9]{1,6}(\\.[0-9]{1,3})?".prop_map(|s| Value::number(&s)),
    ]
}

fn arb_list_item() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::List)
    })
}

fn block_from(pairs: Vec<(String, Value)>) -> Value {
    let mut block = vec![];
    for (k, v) in pairs {
        insert_pair(&mut block, Pair::new(Key(k), v));
    }
    Value::Block(block)
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_list_item().prop_recursive(3, 32, 4, |inner| {
        prop::collection::vec((arb_key(), inner), 0..4).prop_map(block_from)
    })
}

fn arb_document() -> impl Strategy<Value = Document> {
    prop::collection::vec((arb_key(), arb_value()), 0..6).prop_map(|entries| {
        let mut doc = Document::new();
        for (k, v) in entries {
            doc.insert(Key(k), v);
        }
        doc
    })
}

proptest! {
    #[test]
    fn tokenize_never_panics(input in "\\PC{0,64}") {
        let _ = tokenize(&input);
    }

    #[test]
    fn tokenize_ascii_soup_terminates(input in "[ -~\n\t]{0,64}") {
        if let Ok(tokens) = tokenize(&input) {
            prop_assert!(tokens.len() <= input.len());
        }
    }

    #[test]
    fn formatted_document_reparses(doc in arb_document()) {
        let text = Formatter::new().format_document(doc.clone());
        prop_assert_eq!(parse_str(&text).unwrap(), doc);
    }
}
