use crate::Position;

const INITIAL_CAPACITY: usize = 16;

/// A checkpoint for saving and restoring stream state.
/// This is what makes backtracking possible: a parser records a checkpoint
/// before an attempt and restores it if the attempt fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    /// The byte offset into the stream buffer at this checkpoint.
    offset: usize,
    /// The position in the source at this checkpoint.
    position: Position,
}

impl Checkpoint {
    /// Creates a new checkpoint with the given offset and position.
    pub fn new(offset: usize, position: Position) -> Self {
        Self { offset, position }
    }

    /// Returns the byte offset stored in this checkpoint.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the position stored in this checkpoint.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// A growable stack of checkpoints used for nested backtracking.
///
/// Pushes and pops must balance per parser invocation; callers are expected
/// to track the balance themselves. Popping an empty stack is a programming
/// error, not an input error, and panics.
#[derive(Debug, Default)]
pub struct CheckpointStack {
    frames: Vec<Checkpoint>,
}

impl CheckpointStack {
    /// Creates an empty stack with some room reserved.
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Appends a frame.
    pub fn push(&mut self, offset: usize, position: Position) {
        self.frames.push(Checkpoint::new(offset, position));
    }

    /// Removes and returns the most recent frame.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> Checkpoint {
        self.frames
            .pop()
            .expect("pop called on an empty checkpoint stack")
    }

    /// Returns the most recent frame without removing it.
    pub fn last(&self) -> Option<&Checkpoint> {
        self.frames.last()
    }

    /// Returns the number of outstanding frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no frames are outstanding.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Clears all frames without returning them.
    pub fn reset(&mut self) {
        self.frames.clear();
    }
}
