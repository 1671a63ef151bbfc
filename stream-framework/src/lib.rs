//! Stream Framework
//!
//! The buffered-stream backtracking engine. [`State`] wraps an arbitrary
//! byte source, buffers unread bytes, tracks the current offset and
//! line/byte position, and manages a stack of checkpoints so that parsers
//! can look ahead, attempt a match and rewind without corrupting sibling
//! parsers.
//!
//! A `State` is a single-owner, single-threaded resource: it is mutated in
//! place on every call and provides no internal synchronization.

pub mod helpers;
pub mod state;

pub use helpers::{next, skip, trail};
pub use parse_common::{Checkpoint, CheckpointStack, ParseError, Parsed, Position, Value};
pub use state::State;
