use crate::classes::is_space;
use crate::map::child;
use crate::primitives::{end, head};
use crate::{IntoParser, Parser};
use parse_common::{ParseError, Parsed};
use stream_framework::{next, skip, trail};

/// Matches every parser in order, producing one child result per element.
///
/// Atomic: if any element fails, the state is rewound to where the
/// sequence began and the element's error is returned wrapped in a trace.
pub fn seq(parsers: Vec<Parser>) -> Parser {
    Parser::new(move |state, result| {
        state.mark();
        let mut children = Vec::with_capacity(parsers.len());
        for parser in &parsers {
            let mut slot = Parsed::new();
            if let Err(err) = parser.parse(state, &mut slot) {
                state.rewind();
                return Err(ParseError::trace("Seq", err));
            }
            children.push(slot);
        }
        state.commit();
        result.set_children(children);
        Ok(())
    })
}

/// Matches the first parser that succeeds, trying each in order from the
/// same starting point.
///
/// When every candidate fails, the reported error is the one whose root
/// cause lies furthest into the input; ties keep the earliest candidate's
/// error. A candidate that reached `[` `{` `"` before failing almost
/// always explains the problem better than one that failed on byte one.
pub fn any(parsers: Vec<Parser>) -> Parser {
    Parser::new(move |state, result| {
        let mut furthest: Option<ParseError> = None;
        for parser in &parsers {
            state.mark();
            match parser.parse(state, result) {
                Ok(()) => {
                    state.commit();
                    return Ok(());
                }
                Err(err) => {
                    result.clear();
                    if !state.rewind() {
                        // a cut inside the candidate committed the parse,
                        // so the remaining alternatives are off the table
                        return Err(ParseError::trace("Any", err));
                    }
                    let replace = match &furthest {
                        Some(best) => err.position() > best.position(),
                        None => true,
                    };
                    if replace {
                        furthest = Some(err);
                    }
                }
            }
        }
        match furthest {
            Some(err) => Err(ParseError::trace("Any", err)),
            None => Err(ParseError::plain("no alternatives", state.position())),
        }
    })
}

/// Matches the parser if possible, succeeding with an empty result when it
/// fails without having committed.
pub fn maybe(p: impl IntoParser) -> Parser {
    let parser = p.into_parser();
    Parser::new(move |state, result| {
        state.mark();
        match parser.parse(state, result) {
            Ok(()) => {
                state.commit();
                Ok(())
            }
            Err(err) => {
                result.clear();
                if !state.rewind() {
                    return Err(ParseError::trace("Maybe", err));
                }
                Ok(())
            }
        }
    })
}

/// Matches the parser repeatedly, requiring at least `min` successes.
///
/// A zero-width success is recorded once and stops the loop; repeating a
/// parser that consumes nothing would never terminate.
pub fn many(p: impl IntoParser, min: usize) -> Parser {
    let parser = p.into_parser();
    Parser::new(move |state, result| {
        let mut children = Vec::new();
        loop {
            state.mark();
            let before = state.position();
            let mut slot = Parsed::new();
            match parser.parse(state, &mut slot) {
                Ok(()) => {
                    state.commit();
                    let zero_width = state.position() == before;
                    children.push(slot);
                    if zero_width {
                        break;
                    }
                }
                Err(err) => {
                    if !state.rewind() || children.len() < min {
                        return Err(ParseError::trace("Many", err));
                    }
                    break;
                }
            }
        }
        result.set_children(children);
        Ok(())
    })
}

/// Matches the parser exactly `n` times, all-or-nothing.
pub fn count(p: impl IntoParser, n: usize) -> Parser {
    let parser = p.into_parser();
    Parser::new(move |state, result| {
        state.mark();
        let mut children = Vec::with_capacity(n);
        for _ in 0..n {
            let mut slot = Parsed::new();
            if let Err(err) = parser.parse(state, &mut slot) {
                state.rewind();
                return Err(ParseError::trace("Count", err));
            }
            children.push(slot);
        }
        state.commit();
        result.set_children(children);
        Ok(())
    })
}

/// Matches the parser against the entire remaining input: the state must
/// be at the head and the parser must leave nothing behind.
pub fn exact(p: impl IntoParser) -> Parser {
    seq(vec![head(), p.into_parser(), end()]).map(child(1))
}

/// Matches the parser zero or more times, delimited by the given parser.
/// Never fails: an absent first element yields an empty child list.
///
/// Only the matched elements become children; delimiters are dropped. A
/// trailing delimiter with no element after it is left unconsumed.
pub fn delim(p: impl IntoParser, d: impl IntoParser) -> Parser {
    let parser = p.into_parser();
    let delimiter = d.into_parser();
    Parser::new(move |state, result| {
        let mut first = Parsed::new();
        if parser.parse(state, &mut first).is_err() {
            result.set_children(Vec::new());
            return Ok(());
        }
        let mut children = vec![first];
        loop {
            state.mark();
            let mut gap = Parsed::new();
            if delimiter.parse(state, &mut gap).is_err() {
                state.rewind();
                break;
            }
            let mut slot = Parsed::new();
            match parser.parse(state, &mut slot) {
                Ok(()) => {
                    state.commit();
                    children.push(slot);
                }
                Err(err) => {
                    if !state.rewind() {
                        return Err(ParseError::trace("Delim", err));
                    }
                    break;
                }
            }
        }
        result.set_children(children);
        Ok(())
    })
}

/// Like [`delim`], but tolerates whitespace on both sides of each
/// delimiter.
pub fn sep(p: impl IntoParser, d: impl IntoParser) -> Parser {
    let parser = p.into_parser();
    let delimiter = d.into_parser();
    let spaces = skip_spaces();
    Parser::new(move |state, result| {
        let mut first = Parsed::new();
        if parser.parse(state, &mut first).is_err() {
            result.set_children(Vec::new());
            return Ok(());
        }
        let mut children = vec![first];
        loop {
            state.mark();
            let mut gap = Parsed::new();
            if spaces.parse(state, &mut gap).is_err()
                || delimiter.parse(state, &mut gap).is_err()
                || spaces.parse(state, &mut gap).is_err()
            {
                state.rewind();
                break;
            }
            let mut slot = Parsed::new();
            match parser.parse(state, &mut slot) {
                Ok(()) => {
                    state.commit();
                    children.push(slot);
                }
                Err(err) => {
                    if !state.rewind() {
                        return Err(ParseError::trace("Sep", err));
                    }
                    break;
                }
            }
        }
        result.set_children(children);
        Ok(())
    })
}

/// Like [`seq`], but tolerates whitespace between consecutive elements.
/// Leading and trailing whitespace is the caller's business.
pub fn phrase(parsers: Vec<Parser>) -> Parser {
    let spaces = skip_spaces();
    Parser::new(move |state, result| {
        state.mark();
        let mut children = Vec::with_capacity(parsers.len());
        for (i, parser) in parsers.iter().enumerate() {
            if i > 0 {
                let mut gap = Parsed::new();
                if let Err(err) = spaces.parse(state, &mut gap) {
                    state.rewind();
                    return Err(ParseError::trace("Phrase", err));
                }
            }
            let mut slot = Parsed::new();
            if let Err(err) = parser.parse(state, &mut slot) {
                state.rewind();
                return Err(ParseError::trace("Phrase", err));
            }
            children.push(slot);
        }
        state.commit();
        result.set_children(children);
        Ok(())
    })
}

/// Consumes whitespace bytes, zero or more. Never fails on exhaustion.
pub fn skip_spaces() -> Parser {
    Parser::new(|state, _result| {
        loop {
            match next(state) {
                Ok(c) if is_space(c) => state.advance(),
                Ok(_) => break,
                Err(err) if err.is_end_of_input() => break,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    })
}

/// Scans forward until the parser matches, one byte at a time. The token
/// is everything skipped; the match itself is left unconsumed.
///
/// This retries the parser at every offset, so prefer [`until_byte`] or
/// [`until_bytes`] when the target is a literal.
pub fn until(p: impl IntoParser) -> Parser {
    let parser = p.into_parser();
    Parser::new(move |state, result| {
        state.mark();
        loop {
            state.mark();
            let mut probe = Parsed::new();
            match parser.parse(state, &mut probe) {
                Ok(()) => {
                    state.rewind();
                    break;
                }
                Err(err) => {
                    state.rewind();
                    if skip(state, 1).is_err() {
                        state.rewind();
                        return Err(ParseError::trace("Until", err));
                    }
                }
            }
        }
        let span = trail(state)?;
        result.set_token(span);
        Ok(())
    })
}

/// Scans forward until the given byte appears, leaving it unconsumed.
/// The token is everything before it.
pub fn until_byte(target: u8) -> Parser {
    Parser::new(move |state, result| {
        state.mark();
        loop {
            match next(state) {
                Ok(c) if c == target => break,
                Ok(_) => state.advance(),
                Err(err) => {
                    state.rewind();
                    return Err(ParseError::trace("Until", err));
                }
            }
        }
        let span = trail(state)?;
        result.set_token(span);
        Ok(())
    })
}

/// Scans forward until the given byte sequence appears, leaving it
/// unconsumed. The token is everything before it.
pub fn until_bytes(target: &[u8]) -> Parser {
    assert!(!target.is_empty(), "until target must not be empty");
    if target.len() == 1 {
        return until_byte(target[0]);
    }
    let target = target.to_vec();
    Parser::new(move |state, result| {
        state.mark();
        loop {
            if let Err(err) = state.request(target.len()) {
                state.rewind();
                return Err(ParseError::trace("Until", err));
            }
            if state.buffer() == &target[..] {
                break;
            }
            if let Err(err) = skip(state, 1) {
                state.rewind();
                return Err(ParseError::trace("Until", err));
            }
        }
        let span = trail(state)?;
        result.set_token(span);
        Ok(())
    })
}
