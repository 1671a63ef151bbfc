//! Ready-made result transformations for [`Parser::map`](crate::Parser::map).
//!
//! Each function returns a closure over the result slot. Mapping happens
//! after a successful match, so these closures have no position to report;
//! a mapping failure is a grammar bug surfacing as a `Plain` error.

use parse_common::{ParseError, Parsed, Position, Value};

/// Replaces the result with its `i`-th child.
pub fn child(i: usize) -> impl Fn(&mut Parsed) -> Result<(), ParseError> {
    move |result| {
        let mut children = result.take_children();
        if i >= children.len() {
            return Err(ParseError::plain(
                format!("no child at index {}", i),
                Position::default(),
            ));
        }
        *result = children.swap_remove(i);
        Ok(())
    }
}

/// Decodes the token as a base-10 integer into `Value::Int`.
pub fn parse_int() -> impl Fn(&mut Parsed) -> Result<(), ParseError> {
    |result| {
        let text = utf8_token(result)?;
        let value = text.parse::<i64>().map_err(|err| {
            ParseError::plain(
                format!("invalid integer `{}`: {}", text, err),
                Position::default(),
            )
        })?;
        result.set_value(Value::Int(value));
        Ok(())
    }
}

/// Decodes the token as a floating-point number into `Value::Float`.
pub fn parse_float() -> impl Fn(&mut Parsed) -> Result<(), ParseError> {
    |result| {
        let text = utf8_token(result)?;
        let value = text.parse::<f64>().map_err(|err| {
            ParseError::plain(
                format!("invalid number `{}`: {}", text, err),
                Position::default(),
            )
        })?;
        result.set_value(Value::Float(value));
        Ok(())
    }
}

/// Flattens the result tree into a single token by concatenating every
/// token, character and string it contains, depth first.
pub fn cat() -> impl Fn(&mut Parsed) -> Result<(), ParseError> {
    |result| {
        let mut flat = Vec::new();
        collect(result, &mut flat);
        result.set_token(flat);
        Ok(())
    }
}

/// Reinterprets the token as `Value::Str`.
pub fn text() -> impl Fn(&mut Parsed) -> Result<(), ParseError> {
    |result| {
        let text = utf8_token(result)?;
        result.set_value(Value::Str(text));
        Ok(())
    }
}

fn utf8_token(result: &Parsed) -> Result<String, ParseError> {
    match result.text() {
        Some(text) => Ok(text.to_string()),
        None => Err(ParseError::plain(
            "token is not valid UTF-8",
            Position::default(),
        )),
    }
}

fn collect(slot: &Parsed, out: &mut Vec<u8>) {
    out.extend_from_slice(slot.token());
    match slot.value() {
        Some(Value::Char(c)) => {
            let mut buf = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
        Some(Value::Str(s)) => out.extend_from_slice(s.as_bytes()),
        Some(Value::Byte(b)) => out.push(*b),
        _ => {}
    }
    for node in slot.children() {
        collect(node, out);
    }
}
