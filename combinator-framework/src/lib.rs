//! # Combinator Framework
//!
//! A parser-combinator library over the buffered backtracking stream of
//! `stream-framework`. A grammar is assembled from small [`Parser`] values:
//! primitives that match bytes, runes and strings; combinators that
//! sequence, alternate and repeat them; and mapping helpers that shape the
//! [`Parsed`] result tree into decoded [`Value`]s.
//!
//! ## Quick start
//!
//! ```
//! use combinator_framework::{apply, seq, State};
//! use combinator_framework::classes::digit;
//! use combinator_framework::combinators::many;
//!
//! let parser = seq![b'#', many(digit(), 1)];
//! let mut state = State::from_bytes("#2026");
//! let result = apply(&parser, &mut state).unwrap();
//! assert_eq!(result.children().len(), 2);
//! ```
//!
//! Parsers are cheap clonable handles; recursive grammars tie the knot with
//! a [`Lazy`] forward-declaration cell. Failures are ordinary [`ParseError`]
//! values carrying the position of the root cause, and alternation keeps
//! the failure that reached furthest into the input.

pub mod classes;
pub mod combinators;
pub mod lazy;
pub mod literals;
pub mod map;
pub mod parser;
pub mod primitives;

pub use lazy::Lazy;
pub use parser::{apply, IntoParser, ParseFn, Parser};

pub use parse_common::{ParseError, Parsed, Position, Value};
pub use stream_framework::State;

/// Builds a [`combinators::seq`] from heterogeneous parser-like arguments.
#[macro_export]
macro_rules! seq {
    ($($p:expr),+ $(,)?) => {
        $crate::combinators::seq(vec![$($crate::IntoParser::into_parser($p)),+])
    };
}

/// Builds a [`combinators::any`] from heterogeneous parser-like arguments.
#[macro_export]
macro_rules! any {
    ($($p:expr),+ $(,)?) => {
        $crate::combinators::any(vec![$($crate::IntoParser::into_parser($p)),+])
    };
}

/// Builds a [`combinators::phrase`] from heterogeneous parser-like
/// arguments.
#[macro_export]
macro_rules! phrase {
    ($($p:expr),+ $(,)?) => {
        $crate::combinators::phrase(vec![$($crate::IntoParser::into_parser($p)),+])
    };
}
