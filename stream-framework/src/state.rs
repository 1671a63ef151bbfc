use parse_common::{CheckpointStack, ParseError, Position};
use std::fmt;
use std::io::{self, Read};

/// Number of bytes pulled from the source per refill.
const CHUNK_SIZE: usize = 4096;

/// The parser state: a buffered view over an underlying byte source.
///
/// `State` owns a growable byte buffer, the current offset into it, the
/// line/byte position of that offset, and a stack of checkpoints. Parsers
/// interact with it through a request/advance protocol:
///
/// 1. [`request`](State::request) ensures `n` unread bytes are buffered and
///    marks them as the pending requested length;
/// 2. [`buffer`](State::buffer) exposes exactly those bytes for inspection;
/// 3. [`advance`](State::advance) commits them, updating the position.
///
/// Checkpoints ([`mark`](State::mark) / [`rewind`](State::rewind) /
/// [`commit`](State::commit)) nest, and the consumed buffer prefix is only
/// discarded once no checkpoint is outstanding, since backtracking to any
/// of them must remain possible until then.
pub struct State {
    reader: Box<dyn Read>,
    buffer: Vec<u8>,
    offset: usize,
    requested: usize,
    eof: bool,
    position: Position,
    frames: CheckpointStack,
}

impl State {
    /// Creates a new state reading from the given byte source.
    pub fn new(reader: impl Read + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            buffer: Vec::new(),
            offset: 0,
            requested: 0,
            eof: false,
            position: Position::new(),
            frames: CheckpointStack::new(),
        }
    }

    /// Creates a new state over an in-memory buffer.
    pub fn from_bytes<B: Into<Vec<u8>>>(bytes: B) -> Self {
        Self::new(io::Cursor::new(bytes.into()))
    }

    /// Returns the current position of the state.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset into the internal buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if the underlying source is known to be exhausted.
    ///
    /// Note that buffered bytes may still be unread; this only reports
    /// whether another refill can ever produce more.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Pulls one chunk from the source into the buffer.
    fn fill(&mut self) -> Result<(), ParseError> {
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            match self.reader.read(&mut chunk) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.buffer.extend_from_slice(&chunk[..n]);
                    return Ok(());
                }
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => {
                    return Err(ParseError::Source {
                        error,
                        position: self.position,
                    })
                }
            }
        }
    }

    /// Ensures at least `n` unread bytes are available at the current
    /// offset, refilling from the source as needed, and marks `n` as the
    /// pending requested length.
    ///
    /// Returns `EndOfInput` if fewer than `n` bytes can ever become
    /// available, or `Source` if the underlying read fails. Either failure
    /// clears the pending requested length.
    pub fn request(&mut self, n: usize) -> Result<(), ParseError> {
        while self.offset + n > self.buffer.len() {
            if self.eof {
                self.requested = 0;
                return Err(ParseError::end_of_input(self.position));
            }
            if let Err(err) = self.fill() {
                self.requested = 0;
                return Err(err);
            }
        }
        self.requested = n;
        Ok(())
    }

    /// Returns the slice of exactly the last requested length, starting at
    /// the current offset.
    ///
    /// # Panics
    /// Panics if there was no preceding successful [`request`](State::request).
    pub fn buffer(&self) -> &[u8] {
        assert!(
            self.requested > 0,
            "buffer called without a successful request"
        );
        &self.buffer[self.offset..self.offset + self.requested]
    }

    /// Returns all bytes from the current offset to the end of the buffer.
    pub fn dump(&self) -> &[u8] {
        &self.buffer[self.offset..]
    }

    /// Commits the last requested bytes: moves the offset forward by the
    /// requested length, updates the line/byte position, and clears the
    /// pending length. Auto-compacts when no checkpoints are outstanding.
    ///
    /// # Panics
    /// Panics if there was no preceding successful [`request`](State::request).
    pub fn advance(&mut self) {
        let n = self.requested;
        assert!(n > 0, "advance called without a successful request");
        for &b in &self.buffer[self.offset..self.offset + n] {
            if b == b'\n' {
                self.position.line += 1;
                self.position.byte = 0;
            } else {
                self.position.byte += 1;
            }
        }
        self.offset += n;
        self.requested = 0;
        self.autoclear();
    }

    /// Pushes a checkpoint at the current offset and position.
    pub fn mark(&mut self) {
        self.frames.push(self.offset, self.position);
    }

    /// Pops the most recent checkpoint and restores its offset and
    /// position.
    ///
    /// Returns `false` without moving when no checkpoint is outstanding,
    /// which happens when a cut committed past the mark; backtracking over
    /// a commit point is forbidden by design.
    pub fn rewind(&mut self) -> bool {
        if self.frames.is_empty() {
            return false;
        }
        let frame = self.frames.pop();
        self.offset = frame.offset();
        self.position = frame.position();
        self.requested = 0;
        self.autoclear();
        true
    }

    /// Drops the most recent checkpoint, keeping the current offset and
    /// position. Tolerates an empty stack for the same reason as
    /// [`rewind`](State::rewind).
    pub fn commit(&mut self) {
        if !self.frames.is_empty() {
            self.frames.pop();
        }
        self.autoclear();
    }

    /// Compacts the buffer once no backtrack target needs the consumed
    /// prefix.
    fn autoclear(&mut self) {
        if self.frames.is_empty() {
            self.clear();
        }
    }

    /// Force-discards the consumed prefix and resets the checkpoint stack.
    ///
    /// This is the "cut" operation: it forbids backtracking past the
    /// current position and bounds memory use.
    pub fn clear(&mut self) {
        self.buffer.drain(..self.offset);
        self.offset = 0;
        self.frames.reset();
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("offset", &self.offset)
            .field("requested", &self.requested)
            .field("eof", &self.eof)
            .field("position", &self.position)
            .field("buffered", &(self.buffer.len() - self.offset))
            .finish()
    }
}
