//! Example grammars built on `combinator-framework`.
//!
//! Two small languages exercise the whole API surface: a JSON value
//! grammar ([`json`]) covering recursion, alternation, cut and literal
//! scanners, and a Polish-notation calculator ([`polish`]) that evaluates
//! while parsing.

pub mod json;
pub mod polish;
