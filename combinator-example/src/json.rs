//! A JSON value grammar.
//!
//! The grammar follows json.org minus the `\uXXXX` escape form. Arrays
//! decode to [`Value::List`], objects to [`Value::Map`] with insertion
//! order preserved, and every number to [`Value::Float`]. A `cut` right
//! after each opening bracket or brace commits the parse: once a `[` is
//! in, the input is an array or the whole parse fails there, which keeps
//! error positions pointing at the real problem instead of the last
//! alternative tried.

use combinator_framework::combinators::sep;
use combinator_framework::literals::{number, quoted};
use combinator_framework::map::parse_float;
use combinator_framework::primitives::{cut, string};
use combinator_framework::{any, phrase, Lazy, ParseError, Parser, Position, Value};

/// The complete JSON value parser.
pub fn value() -> Parser {
    let cell = Lazy::new();
    cell.define(any![
        string("null").bind(Value::Null),
        string("true").bind(Value::Bool(true)),
        string("false").bind(Value::Bool(false)),
        quoted(b'"'),
        number().map(parse_float()),
        array(&cell),
        object(&cell),
    ]);
    cell.parser()
}

fn array(cell: &Lazy) -> Parser {
    phrase![b'[', cut(), sep(cell, b','), b']'].map(|result| {
        let mut children = result.take_children();
        let elements = children.remove(2).take_children();
        let mut items = Vec::with_capacity(elements.len());
        for mut element in elements {
            match element.take_value() {
                Some(item) => items.push(item),
                None => return Err(element_error("array element")),
            }
        }
        result.set_value(Value::List(items));
        Ok(())
    })
}

fn object(cell: &Lazy) -> Parser {
    let member = phrase![quoted(b'"'), b':', cell];
    phrase![b'{', cut(), sep(member, b','), b'}'].map(|result| {
        let mut children = result.take_children();
        let members = children.remove(2).take_children();
        let mut pairs = Vec::with_capacity(members.len());
        for mut member in members {
            let mut fields = member.take_children();
            let value = match fields.remove(2).take_value() {
                Some(value) => value,
                None => return Err(element_error("object value")),
            };
            let key = match fields.remove(0).take_value() {
                Some(Value::Str(key)) => key,
                _ => return Err(element_error("object key")),
            };
            pairs.push((key, value));
        }
        result.set_value(Value::Map(pairs));
        Ok(())
    })
}

fn element_error(what: &str) -> ParseError {
    ParseError::plain(format!("{} produced no value", what), Position::default())
}
