use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(pub String);

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Identifier,
    String,
    Number,
}

/// A leaf value. `text` is the literal as written, without quotes for strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    pub text: String,
    pub kind: ScalarKind,
}

impl Scalar {
    pub fn new(text: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Block(Vec<Pair>),
    List(Vec<Value>),
}

impl Value {
    pub fn identifier(s: &str) -> Self {
        Value::Scalar(Scalar::new(s, ScalarKind::Identifier))
    }

    pub fn string(s: &str) -> Self {
        Value::Scalar(Scalar::new(s, ScalarKind::String))
    }

    pub fn number(s: &str) -> Self {
        Value::Scalar(Scalar::new(s, ScalarKind::Number))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&[Pair]> {
        match self {
            Value::Block(pairs) => Some(pairs.as_slice()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Looks up `key` among the pairs of a block. `None` for scalars and lists.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_block()?
            .iter()
            .find(|p| p.key.0 == key)
            .map(|p| &p.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub key: Key,
    pub value: Value,
}

impl Pair {
    pub fn new(key: Key, value: Value) -> Self {
        Self { key, value }
    }
}

/// Adds a pair to a block. A repeated key keeps its first slot and takes the
/// new value. Returns the replaced value, if any.
pub fn insert_pair(pairs: &mut Vec<Pair>, pair: Pair) -> Option<Value> {
    match pairs.iter_mut().find(|p| p.key == pair.key) {
        Some(existing) => Some(std::mem::replace(&mut existing.value, pair.value)),
        None => {
            pairs.push(pair);
            None
        }
    }
}

/// Top-level assignments of a Brik file, in the order keys first appear.
#[derive(Debug, Clone, Default)]
pub struct Document {
    entries: IndexMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins: the key keeps its original position.
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        self.entries.insert(key.0, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// order-sensitive, unlike `IndexMap`'s own equality
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
