use std::fmt;

/// Represents the position of the stream head as line and byte numbers.
///
/// Both fields are zero-based internally. `Display` renders them one-based,
/// which is what humans expect to see in an error message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (0-indexed). Incremented every time a line feed is consumed.
    pub line: usize,
    /// Byte number within the line (0-indexed). Reset by a line feed.
    pub byte: usize,
}

impl Position {
    /// Creates a position at the start of the stream.
    pub fn new() -> Self {
        Self { line: 0, byte: 0 }
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, byte: usize) -> Self {
        Self { line, byte }
    }

    /// Returns true if the position is at the start of the stream.
    pub fn is_head(&self) -> bool {
        self.line == 0 && self.byte == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} byte {}", self.line + 1, self.byte + 1)
    }
}
