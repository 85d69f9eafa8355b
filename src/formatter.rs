use crate::ast::{Document, Pair, Scalar, ScalarKind, Value};

/// Renders a document back to Brik text in canonical layout.
pub struct Formatter {
    depth: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self { depth: 0 }
    }
    fn indent(&self) -> String {
        " ".repeat(4).repeat(self.depth)
    }
    fn format_scalar(&self, s: Scalar) -> String {
        match s.kind {
            ScalarKind::String => format!("\"{}\"", s.text),
            ScalarKind::Identifier | ScalarKind::Number => s.text,
        }
    }
    fn format_pair(&mut self, p: Pair) -> String {
        format!("{}{} = {}", self.indent(), p.key, self.format(p.value))
    }
    fn format_block(&mut self, pairs: Vec<Pair>) -> String {
        if pairs.is_empty() {
            return String::from("{}");
        }
        let open_brace = '{';
        self.depth += 1;
        let inner = pairs
            .into_iter()
            .map(|p| self.format_pair(p))
            .collect::<Vec<String>>()
            .join("\n");
        self.depth -= 1;
        let close_brace = format!("{}}}", self.indent());
        format!("{}\n{}\n{}", open_brace, inner, close_brace)
    }
    // lists stay on one line; they cannot contain blocks
    fn format_list(&mut self, values: Vec<Value>) -> String {
        let inner = values
            .into_iter()
            .map(|v| self.format(v))
            .collect::<Vec<String>>()
            .join(", ");
        format!("[{}]", inner)
    }
    pub fn format(&mut self, v: Value) -> String {
        match v {
            Value::Scalar(s) => self.format_scalar(s),
            Value::Block(pairs) => self.format_block(pairs),
            Value::List(values) => self.format_list(values),
        }
    }
    pub fn format_document(&mut self, doc: Document) -> String {
        doc.into_iter()
            .map(|(key, value)| format!("{} = {}", key, self.format(value)))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_str;

    fn format(text: &str) -> String {
        let doc = parse_str(text).unwrap();
        let mut f = Formatter::new();
        f.format_document(doc)
    }

    #[test]
    fn test_format_scalars() {
        #[rustfmt::skip]
        let tests = vec![
            ("a=1", "a = 1"),
            (r#"title   =   "  a bc ""#, r#"title = "  a bc ""#),
            ("mode = classic", "mode = classic"),
            ("", ""),
        ];
        for (input, expected) in tests {
            assert_eq!(format(input), String::from(expected));
        }
    }

    #[test]
    fn test_format_document_order() {
        #[rustfmt::skip]
        let tests = vec![
            (
                "b = 1 a = 2",
r#"b = 1
a = 2"#,
            ),
            (
                "a = 1 b = 2 a = 3",
r#"a = 3
b = 2"#,
            ),
        ];
        for (input, expected) in tests {
            assert_eq!(format(input), String::from(expected));
        }
    }

    #[test]
    fn test_format_block() {
        #[rustfmt::skip]
        let tests = vec![
            ("b = {}", "b = {}"),
            ("b = {    }", "b = {}"),
            (
                "b = { y = 1 x = 2 }",
r#"b = {
    y = 1
    x = 2
}"#,
            ),
            (
                r#"b = { c = { d = "deep" e = [] } f = 0.5 }"#,
r#"b = {
    c = {
        d = "deep"
        e = []
    }
    f = 0.5
}"#,
            ),
        ];
        for (input, expected) in tests {
            assert_eq!(format(input), String::from(expected));
        }
    }

    #[test]
    fn test_format_list() {
        #[rustfmt::skip]
        let tests = vec![
            ("l = []", "l = []"),
            ("l = [1 2,3]", "l = [1, 2, 3]"),
            (r#"l = [a, "b c", [1, [2]], []]"#, r#"l = [a, "b c", [1, [2]], []]"#),
        ];
        for (input, expected) in tests {
            assert_eq!(format(input), String::from(expected));
        }
    }

    #[test]
    fn test_format_then_parse() {
        let input = r#"
            # board settings
            board = { width = 10 height = 20 title = "Tetris" }
            pieces = [[0, 1], [1 1]]
            speed = 1.25
        "#;
        let doc = parse_str(input).unwrap();
        let text = Formatter::new().format_document(doc.clone());
        assert_eq!(parse_str(&text).unwrap(), doc);
    }
}
