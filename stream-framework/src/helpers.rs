use crate::State;
use parse_common::ParseError;

/// Requests and commits `n` bytes without inspecting them.
pub fn skip(state: &mut State, n: usize) -> Result<(), ParseError> {
    state.request(n)?;
    state.advance();
    Ok(())
}

/// Requests one byte and returns it without advancing.
///
/// The requested length stays pending, so a following
/// [`advance`](State::advance) consumes the peeked byte.
pub fn next(state: &mut State) -> Result<u8, ParseError> {
    state.request(1)?;
    Ok(state.buffer()[0])
}

/// Returns the span of bytes between the most recent checkpoint and the
/// current offset, then consumes it: the checkpoint is popped, the offset
/// rewound to it, and the span advanced past so position tracking stays
/// exact. Used by scan-forward primitives.
pub fn trail(state: &mut State) -> Result<Vec<u8>, ParseError> {
    let end = state.offset();
    if !state.rewind() {
        return Err(ParseError::plain(
            "no outstanding checkpoint to trail from",
            state.position(),
        ));
    }
    let n = end - state.offset();
    if n == 0 {
        return Ok(Vec::new());
    }
    state.request(n)?;
    let span = state.buffer().to_vec();
    state.advance();
    Ok(span)
}
