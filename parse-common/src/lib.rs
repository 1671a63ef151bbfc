//! Common Framework
//!
//! Shared value types used by stream-framework and combinator-framework:
//! source positions, backtracking checkpoints, the parser result slot and
//! the error taxonomy.

pub mod checkpoint;
pub mod error;
pub mod position;
pub mod result;

pub use checkpoint::{Checkpoint, CheckpointStack};
pub use error::ParseError;
pub use position::Position;
pub use result::{Parsed, Value};
