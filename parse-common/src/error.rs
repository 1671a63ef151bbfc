use crate::Position;
use thiserror::Error;

/// The error taxonomy shared by the stream engine and every parser.
///
/// All variants are ordinary match failures from a combinator's point of
/// view and are propagated as values. `EndOfInput` signals that the source
/// is exhausted and is always recoverable; `Source` preserves any other
/// I/O-level fault distinctly for diagnostics. `Trace` wraps an inner error
/// with the name of the parser that delegated to the failing sub-parser,
/// forming a chain navigable via [`ParseError::root`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("end of input at {position}")]
    EndOfInput { position: Position },

    #[error("{error} at {position}")]
    Source {
        #[source]
        error: std::io::Error,
        position: Position,
    },

    #[error("{message} at {position}")]
    Plain { message: String, position: Position },

    #[error("expected {expected} at {position}")]
    Mismatch { expected: String, position: Position },

    #[error("in `{name}`: {inner}")]
    Trace {
        name: &'static str,
        #[source]
        inner: Box<ParseError>,
    },
}

impl ParseError {
    /// Creates an end-of-input failure at the given position.
    pub fn end_of_input(position: Position) -> Self {
        ParseError::EndOfInput { position }
    }

    /// Creates a plain failure with a message.
    pub fn plain(message: impl Into<String>, position: Position) -> Self {
        ParseError::Plain {
            message: message.into(),
            position,
        }
    }

    /// Creates a mismatch failure carrying an "expected" description.
    pub fn mismatch(expected: impl Into<String>, position: Position) -> Self {
        ParseError::Mismatch {
            expected: expected.into(),
            position,
        }
    }

    /// Wraps an inner error with the name of the delegating parser.
    pub fn trace(name: &'static str, inner: ParseError) -> Self {
        ParseError::Trace {
            name,
            inner: Box::new(inner),
        }
    }

    /// Unwraps the trace chain down to the root cause.
    pub fn root(&self) -> &ParseError {
        match self {
            ParseError::Trace { inner, .. } => inner.root(),
            other => other,
        }
    }

    /// Returns the position where the root cause occurred.
    pub fn position(&self) -> Position {
        match self.root() {
            ParseError::EndOfInput { position }
            | ParseError::Source { position, .. }
            | ParseError::Plain { position, .. }
            | ParseError::Mismatch { position, .. } => *position,
            ParseError::Trace { .. } => unreachable!("root() never returns a trace"),
        }
    }

    /// Returns true if the root cause is end of input.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self.root(), ParseError::EndOfInput { .. })
    }
}
