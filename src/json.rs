//! Conversion of a parsed document into `serde_json` values.

use crate::ast::{Document, Pair, Scalar, ScalarKind, Value};
use serde_json::{Map, Number};

type Json = serde_json::Value;

fn number_to_json(text: String) -> Json {
    if let Ok(n) = text.parse::<i64>() {
        return Json::Number(n.into());
    }
    match text.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(n) => Json::Number(n),
        // e.g. `1.2.3`
        None => Json::String(text),
    }
}

fn scalar_to_json(s: Scalar) -> Json {
    match s.kind {
        ScalarKind::Number => number_to_json(s.text),
        ScalarKind::String | ScalarKind::Identifier => Json::String(s.text),
    }
}

fn block_to_json(pairs: Vec<Pair>) -> Json {
    let map: Map<String, Json> = pairs
        .into_iter()
        .map(|p| (p.key.0, value_to_json(p.value)))
        .collect();
    Json::Object(map)
}

pub fn value_to_json(v: Value) -> Json {
    match v {
        Value::Scalar(s) => scalar_to_json(s),
        Value::Block(pairs) => block_to_json(pairs),
        Value::List(values) => Json::Array(values.into_iter().map(value_to_json).collect()),
    }
}

/// Keys keep document order.
pub fn to_json(doc: Document) -> Json {
    let map: Map<String, Json> = doc
        .into_iter()
        .map(|(k, v)| (k, value_to_json(v)))
        .collect();
    Json::Object(map)
}
