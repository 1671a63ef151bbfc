use crate::Parser;
use parse_common::{ParseError, Value};
use stream_framework::{next, skip, trail, State};

/// Renders a byte for error messages: printable ASCII quoted, everything
/// else as hex.
pub(crate) fn byte_repr(b: u8) -> String {
    match b {
        b'\n' => "'\\n'".to_string(),
        b'\r' => "'\\r'".to_string(),
        b'\t' => "'\\t'".to_string(),
        0x20..=0x7e => format!("'{}'", b as char),
        _ => format!("0x{:02x}", b),
    }
}

pub(crate) fn bytes_repr(set: &[u8]) -> String {
    set.iter()
        .map(|&b| byte_repr(b))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Matches nothing and always succeeds.
pub fn epsilon() -> Parser {
    Parser::new(|_state, _result| Ok(()))
}

/// Always fails.
pub fn fail() -> Parser {
    Parser::new(|state, _result| Err(ParseError::plain("must fail", state.position())))
}

/// Matches if the state is at the start of the stream, consuming nothing.
pub fn head() -> Parser {
    Parser::new(|state, _result| {
        if !state.position().is_head() {
            return Err(ParseError::plain("state is not at head", state.position()));
        }
        Ok(())
    })
}

/// Matches if the stream is exhausted, consuming nothing.
pub fn end() -> Parser {
    Parser::new(|state, _result| match state.request(1) {
        Err(err) if err.is_end_of_input() => Ok(()),
        Err(err) => Err(err),
        Ok(()) => Err(ParseError::mismatch("end of input", state.position())),
    })
}

/// Commits the parse at the current position: the consumed prefix is
/// discarded and every outstanding checkpoint is dropped, so nothing can
/// backtrack past this point.
pub fn cut() -> Parser {
    Parser::new(|state, _result| {
        state.clear();
        Ok(())
    })
}

/// Matches any single byte.
pub fn any_byte() -> Parser {
    Parser::new(|state, result| {
        let c = next(state)?;
        result.set_token(vec![c]);
        state.advance();
        Ok(())
    })
}

/// Matches the given byte.
pub fn byte(expected: u8) -> Parser {
    let what = byte_repr(expected);
    Parser::new(move |state, result| {
        let c = next(state)?;
        if c != expected {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        result.set_token(vec![c]);
        state.advance();
        Ok(())
    })
}

/// Matches any single byte other than the given byte.
pub fn not_byte(unexpected: u8) -> Parser {
    let what = format!("anything but {}", byte_repr(unexpected));
    Parser::new(move |state, result| {
        let c = next(state)?;
        if c == unexpected {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        result.set_token(vec![c]);
        state.advance();
        Ok(())
    })
}

/// Matches any one of the given bytes. The set order only affects the
/// "expected" description in errors, never which byte is consumed.
pub fn byte_in(set: &[u8]) -> Parser {
    let set = set.to_vec();
    let what = format!("one of [{}]", bytes_repr(&set));
    Parser::new(move |state, result| {
        let c = next(state)?;
        if !set.contains(&c) {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        result.set_token(vec![c]);
        state.advance();
        Ok(())
    })
}

/// Matches a byte in the inclusive range `[begin, end]`.
///
/// # Panics
/// Panics at construction time if `begin > end`; an inverted range is a
/// grammar bug, not an input error. `begin == end` degenerates to
/// [`byte`].
pub fn byte_range(begin: u8, end: u8) -> Parser {
    assert!(
        begin <= end,
        "byte range {} > {}",
        byte_repr(begin),
        byte_repr(end)
    );
    if begin == end {
        return byte(begin);
    }
    let what = format!("in range {}-{}", byte_repr(begin), byte_repr(end));
    Parser::new(move |state, result| {
        let c = next(state)?;
        if c < begin || end < c {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        result.set_token(vec![c]);
        state.advance();
        Ok(())
    })
}

/// Matches the given byte sequence exactly, all-or-nothing.
pub fn bytes(sequence: &[u8]) -> Parser {
    match sequence.len() {
        0 => return epsilon(),
        1 => return byte(sequence[0]),
        _ => {}
    }
    let sequence = sequence.to_vec();
    let what = format!("[{}]", bytes_repr(&sequence));
    Parser::new(move |state, result| {
        state.request(sequence.len())?;
        if state.buffer() != &sequence[..] {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        result.set_token(sequence.clone());
        state.advance();
        Ok(())
    })
}

/// Matches a single byte satisfying the predicate. The name is used in
/// error messages, so pass something a human can act on.
pub fn filter(predicate: impl Fn(u8) -> bool + 'static, name: &str) -> Parser {
    let what = format!("byte matching `{}`", name);
    Parser::new(move |state, result| {
        let c = next(state)?;
        if !predicate(c) {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        result.set_token(vec![c]);
        state.advance();
        Ok(())
    })
}

/// Matches the given string as contiguous UTF-8 bytes, producing
/// `Value::Str`. The empty string matches without consuming anything.
pub fn string(expected: &str) -> Parser {
    if expected.is_empty() {
        return Parser::new(|_state, result| {
            result.set_value(Value::Str(String::new()));
            Ok(())
        });
    }
    let expected = expected.to_string();
    let what = format!("\"{}\"", expected);
    Parser::new(move |state, result| {
        state.request(expected.len())?;
        if state.buffer() != expected.as_bytes() {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        result.set_value(Value::Str(expected.clone()));
        state.advance();
        Ok(())
    })
}

/// Decodes one rune at the current offset, requesting 1 to 4 bytes as
/// needed. On success the decoded width is left as the pending requested
/// length, so `advance()` consumes exactly the rune.
///
/// Running out of input while widening counts as exhausting the
/// candidates: a lone invalid byte at the end of the stream is a decode
/// error, not end of input. Only an empty stream reports exhaustion.
pub(crate) fn read_rune(state: &mut State) -> Result<char, ParseError> {
    for width in 1..=4 {
        match state.request(width) {
            Ok(()) => {}
            Err(err) if width > 1 && err.is_end_of_input() => break,
            Err(err) => return Err(err),
        }
        if let Ok(text) = std::str::from_utf8(state.buffer()) {
            if let Some(c) = text.chars().next() {
                return Ok(c);
            }
        }
    }
    Err(ParseError::plain(
        "unable to decode rune",
        state.position(),
    ))
}

/// Matches any single rune.
pub fn any_rune() -> Parser {
    Parser::new(|state, result| {
        let c = read_rune(state)?;
        result.set_value(Value::Char(c));
        state.advance();
        Ok(())
    })
}

/// Matches the given rune.
pub fn rune(expected: char) -> Parser {
    let mut buf = [0u8; 4];
    let encoded = expected.encode_utf8(&mut buf).as_bytes().to_vec();
    let what = format!("'{}'", expected.escape_default());
    Parser::new(move |state, result| {
        state.request(encoded.len())?;
        if state.buffer() != &encoded[..] {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        result.set_value(Value::Char(expected));
        state.advance();
        Ok(())
    })
}

/// Matches any one of the runes in the given set.
pub fn rune_in(set: &str) -> Parser {
    let set = set.to_string();
    let what = format!("one of \"{}\"", set);
    Parser::new(move |state, result| {
        let c = read_rune(state)?;
        if !set.contains(c) {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        result.set_value(Value::Char(c));
        state.advance();
        Ok(())
    })
}

/// Matches a rune in the inclusive range `[begin, end]`.
///
/// # Panics
/// Panics at construction time if `begin > end`.
pub fn rune_range(begin: char, end: char) -> Parser {
    assert!(begin <= end, "rune range '{}' > '{}'", begin, end);
    if begin == end {
        return rune(begin);
    }
    let what = format!("in range '{}'-'{}'", begin, end);
    Parser::new(move |state, result| {
        let c = read_rune(state)?;
        if c < begin || end < c {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        result.set_value(Value::Char(c));
        state.advance();
        Ok(())
    })
}

/// Matches a single rune satisfying the predicate.
pub fn rune_filter(predicate: impl Fn(char) -> bool + 'static, name: &str) -> Parser {
    let what = format!("rune matching `{}`", name);
    Parser::new(move |state, result| {
        let c = read_rune(state)?;
        if !predicate(c) {
            return Err(ParseError::mismatch(what.clone(), state.position()));
        }
        result.set_value(Value::Char(c));
        state.advance();
        Ok(())
    })
}

/// Matches a line feed or the end of the stream, consuming the line feed
/// when present.
pub fn eol() -> Parser {
    Parser::new(|state, result| {
        match next(state) {
            Err(err) if err.is_end_of_input() => return Ok(()),
            Err(err) => return Err(err),
            Ok(b'\n') => {}
            Ok(_) => {
                return Err(ParseError::mismatch(
                    "newline or end of input",
                    state.position(),
                ))
            }
        }
        result.set_token(vec![b'\n']);
        state.advance();
        Ok(())
    })
}

/// Matches everything up to a line feed or the end of the stream. The
/// terminating line feed is consumed but excluded from the token.
pub fn line() -> Parser {
    Parser::new(|state, result| {
        state.mark();
        loop {
            match next(state) {
                Ok(b'\n') => break,
                Ok(_) => state.advance(),
                Err(err) if err.is_end_of_input() => break,
                Err(err) => {
                    state.rewind();
                    return Err(ParseError::trace("Line", err));
                }
            }
        }
        let span = trail(state)?;
        result.set_token(span);
        let _ = skip(state, 1);
        Ok(())
    })
}
