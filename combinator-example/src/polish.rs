//! A Polish-notation calculator.
//!
//! Expressions are prefix form over floats: `+ 1 2` is three, and
//! `* - 5 3 / 10 2` is ten. Operators and operands are separated by
//! whitespace. Evaluation happens inside the result mapping, so the parse
//! yields a single [`Value::Float`] instead of a tree.

use combinator_framework::literals::number;
use combinator_framework::map::parse_float;
use combinator_framework::primitives::byte_in;
use combinator_framework::{any, phrase, Lazy, ParseError, Parsed, Parser, Position, Value};

/// The complete expression parser: an operation or a bare number.
pub fn expression() -> Parser {
    let cell = Lazy::new();
    cell.define(any![operation(&cell), number().map(parse_float())]);
    cell.parser()
}

fn operation(cell: &Lazy) -> Parser {
    phrase![byte_in(b"+-*/"), cell, cell].map(evaluate)
}

fn evaluate(result: &mut Parsed) -> Result<(), ParseError> {
    let mut children = result.take_children();
    let rhs = operand(children.remove(2))?;
    let lhs = operand(children.remove(1))?;
    let operator = children.remove(0);
    let value = match operator.token().first() {
        Some(b'+') => lhs + rhs,
        Some(b'-') => lhs - rhs,
        Some(b'*') => lhs * rhs,
        Some(b'/') => lhs / rhs,
        _ => {
            return Err(ParseError::plain(
                "operation without an operator",
                Position::default(),
            ))
        }
    };
    result.set_value(Value::Float(value));
    Ok(())
}

fn operand(mut slot: Parsed) -> Result<f64, ParseError> {
    match slot.take_value() {
        Some(Value::Float(value)) => Ok(value),
        Some(Value::Int(value)) => Ok(value as f64),
        _ => Err(ParseError::plain(
            "operand is not a number",
            Position::default(),
        )),
    }
}
