//! Hand-rolled scanners for common literal shapes.
//!
//! These cover the literals a grammar built from single-byte matchers would
//! otherwise reconstruct slowly out of `many` and `any`: integers, JSON-style
//! numbers, and quoted strings with escapes.

use crate::classes::is_digit;
use crate::primitives::byte_repr;
use crate::Parser;
use parse_common::{ParseError, Value};
use stream_framework::{next, trail, State};

/// Matches a base-10 integer token: an optional minus, then either a lone
/// zero or a nonzero digit followed by any number of digits.
pub fn integer() -> Parser {
    Parser::new(|state, result| {
        state.mark();
        if let Err(err) = scan_integer(state) {
            state.rewind();
            return Err(ParseError::trace("Integer", err));
        }
        let span = trail(state)?;
        result.set_token(span);
        Ok(())
    })
}

/// Matches a JSON-style number token: an integer part, then an optional
/// fraction and an optional exponent. Each optional part is speculated
/// under its own checkpoint, so `10.` matches `10` and leaves the dot.
pub fn number() -> Parser {
    Parser::new(|state, result| {
        state.mark();
        if let Err(err) = scan_number(state) {
            state.rewind();
            return Err(ParseError::trace("Number", err));
        }
        let span = trail(state)?;
        result.set_token(span);
        Ok(())
    })
}

fn scan_integer(state: &mut State) -> Result<(), ParseError> {
    let mut c = next(state)?;
    if c == b'-' {
        state.advance();
        c = next(state)?;
    }
    if !is_digit(c) {
        return Err(ParseError::mismatch("digit", state.position()));
    }
    state.advance();
    if c == b'0' {
        return Ok(());
    }
    scan_digits(state).map(|_| ())
}

fn scan_number(state: &mut State) -> Result<(), ParseError> {
    scan_integer(state)?;
    scan_fraction(state)?;
    scan_exponent(state)?;
    Ok(())
}

fn scan_fraction(state: &mut State) -> Result<(), ParseError> {
    state.mark();
    match next(state) {
        Ok(b'.') => state.advance(),
        Ok(_) => {
            state.rewind();
            return Ok(());
        }
        Err(err) if err.is_end_of_input() => {
            state.rewind();
            return Ok(());
        }
        Err(err) => {
            state.rewind();
            return Err(err);
        }
    }
    match scan_digits(state) {
        Ok(0) => {
            // a bare dot is not a fraction
            state.rewind();
            Ok(())
        }
        Ok(_) => {
            state.commit();
            Ok(())
        }
        Err(err) => {
            state.rewind();
            Err(err)
        }
    }
}

fn scan_exponent(state: &mut State) -> Result<(), ParseError> {
    state.mark();
    match next(state) {
        Ok(b'e') | Ok(b'E') => state.advance(),
        Ok(_) => {
            state.rewind();
            return Ok(());
        }
        Err(err) if err.is_end_of_input() => {
            state.rewind();
            return Ok(());
        }
        Err(err) => {
            state.rewind();
            return Err(err);
        }
    }
    match next(state) {
        Ok(b'+') | Ok(b'-') => state.advance(),
        Ok(_) => {}
        Err(err) if err.is_end_of_input() => {
            state.rewind();
            return Ok(());
        }
        Err(err) => {
            state.rewind();
            return Err(err);
        }
    }
    match scan_digits(state) {
        Ok(0) => {
            // `e` with no digits belongs to whatever follows the number
            state.rewind();
            Ok(())
        }
        Ok(_) => {
            state.commit();
            Ok(())
        }
        Err(err) => {
            state.rewind();
            Err(err)
        }
    }
}

/// Consumes a run of digits, returning how many were consumed. Exhaustion
/// ends the run; other source faults propagate.
fn scan_digits(state: &mut State) -> Result<usize, ParseError> {
    let mut count = 0;
    loop {
        match next(state) {
            Ok(d) if is_digit(d) => {
                state.advance();
                count += 1;
            }
            Ok(_) => break,
            Err(err) if err.is_end_of_input() => break,
            Err(err) => return Err(err),
        }
    }
    Ok(count)
}

/// Matches a string quoted with the given byte, producing the unescaped
/// contents as `Value::Str`.
///
/// Once the opening quote is consumed the parse is committed: an
/// unterminated string is a hard error, not a backtrack, because no other
/// alternative could legitimately begin with the quote.
pub fn quoted(q: u8) -> Parser {
    let what = format!("opening {}", byte_repr(q));
    Parser::new(move |state, result| {
        let c = next(state)?;
        if c != q {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        state.advance();
        state.clear();
        let mut contents = Vec::new();
        loop {
            let c = next(state)?;
            state.advance();
            if c == q {
                break;
            }
            if c == b'\\' {
                let escaped = next(state)?;
                state.advance();
                contents.push(unescape(escaped));
            } else {
                contents.push(c);
            }
        }
        match String::from_utf8(contents) {
            Ok(decoded) => {
                result.set_value(Value::Str(decoded));
                Ok(())
            }
            Err(_) => Err(ParseError::plain(
                "quoted contents are not valid UTF-8",
                state.position(),
            )),
        }
    })
}

fn unescape(c: u8) -> u8 {
    match c {
        b'n' => b'\n',
        b't' => b'\t',
        b'r' => b'\r',
        b'b' => 0x08,
        b'f' => 0x0c,
        b'v' => 0x0b,
        other => other,
    }
}
