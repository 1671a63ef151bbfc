use std::fmt;

/// A decoded value produced by a parser.
///
/// The original design carried values as untyped payloads; here the payload
/// is a closed sum so that consumers can match on it without downcasting.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Byte(u8),
    Char(char),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    /// Ordered key-value pairs, preserving insertion order.
    Map(Vec<(String, Value)>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Byte(v) => write!(f, "{}", *v as char),
            Value::Char(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "\"{}\"", v),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// The output slot of a parser.
///
/// A slot holds at most one of three shapes at any time: a raw token (the
/// contiguous matched bytes), a decoded [`Value`], or an ordered list of
/// child results. Setting one shape clears the other two. A parser that
/// fails must leave its slot in the empty shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parsed {
    token: Vec<u8>,
    value: Option<Value>,
    children: Vec<Parsed>,
}

impl Parsed {
    /// Creates an empty result slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw matched bytes.
    pub fn token(&self) -> &[u8] {
        &self.token
    }

    /// Returns the decoded value, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Returns the child results.
    pub fn children(&self) -> &[Parsed] {
        &self.children
    }

    /// Returns true if the slot holds nothing.
    pub fn is_empty(&self) -> bool {
        self.token.is_empty() && self.value.is_none() && self.children.is_empty()
    }

    /// Stores a raw token, clearing the other shapes.
    pub fn set_token(&mut self, token: Vec<u8>) {
        self.token = token;
        self.value = None;
        self.children.clear();
    }

    /// Stores a decoded value, clearing the other shapes.
    pub fn set_value(&mut self, value: Value) {
        self.token.clear();
        self.value = Some(value);
        self.children.clear();
    }

    /// Stores child results, clearing the other shapes.
    pub fn set_children(&mut self, children: Vec<Parsed>) {
        self.token.clear();
        self.value = None;
        self.children = children;
    }

    /// Empties the slot.
    pub fn clear(&mut self) {
        self.token.clear();
        self.value = None;
        self.children.clear();
    }

    /// Removes and returns the decoded value, leaving the slot empty.
    pub fn take_value(&mut self) -> Option<Value> {
        let value = self.value.take();
        self.clear();
        value
    }

    /// Removes and returns the children, leaving the slot empty.
    pub fn take_children(&mut self) -> Vec<Parsed> {
        let children = std::mem::take(&mut self.children);
        self.clear();
        children
    }

    /// Interprets the token as UTF-8 text, if it is valid.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.token).ok()
    }
}
