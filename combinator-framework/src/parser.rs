use crate::lazy::Lazy;
use crate::primitives::{byte, bytes, rune, string};
use parse_common::{ParseError, Parsed, Value};
use std::rc::Rc;
use stream_framework::State;

/// The function signature every parser satisfies.
pub type ParseFn = dyn Fn(&mut State, &mut Parsed) -> Result<(), ParseError>;

/// A parser: a pure function from `(State, result slot)` to success or
/// failure.
///
/// On success a parser has consumed exactly the bytes it matched and
/// written the matched data into the slot. On failure the state's logical
/// position is unchanged from the caller's perspective, and the slot is
/// left empty.
///
/// `Parser` is a cheap handle over a shared closure: cloning it is a
/// reference-count bump, so parsers can be freely reused and composed into
/// larger grammars. All mutable state lives in [`State`].
#[derive(Clone)]
pub struct Parser {
    run: Rc<ParseFn>,
}

impl Parser {
    /// Wraps a closure satisfying the parser contract.
    pub fn new(f: impl Fn(&mut State, &mut Parsed) -> Result<(), ParseError> + 'static) -> Self {
        Self { run: Rc::new(f) }
    }

    /// Runs the parser against the state, writing into `result`.
    pub fn parse(&self, state: &mut State, result: &mut Parsed) -> Result<(), ParseError> {
        (self.run)(state, result)
    }

    /// Applies a result transformation after a successful match.
    ///
    /// The transformation is never called when the inner parser failed, and
    /// the inner failure is propagated untouched.
    pub fn map(self, f: impl Fn(&mut Parsed) -> Result<(), ParseError> + 'static) -> Parser {
        Parser::new(move |state, result| {
            self.parse(state, result)?;
            f(result)
        })
    }

    /// Replaces the result with a constant value on success.
    pub fn bind(self, value: Value) -> Parser {
        Parser::new(move |state, result| {
            self.parse(state, result)?;
            result.set_value(value.clone());
            Ok(())
        })
    }
}

/// Runs a parser once against a state, returning the filled result slot.
pub fn apply(parser: &Parser, state: &mut State) -> Result<Parsed, ParseError> {
    let mut result = Parsed::new();
    parser.parse(state, &mut result)?;
    Ok(result)
}

/// Conversion into a [`Parser`] for the types that have an obvious parser
/// reading: bytes, byte sequences, runes, strings and forward-declaration
/// cells. This is the construction-time replacement for a dynamic
/// "parser-like" type switch.
pub trait IntoParser {
    fn into_parser(self) -> Parser;
}

impl IntoParser for Parser {
    fn into_parser(self) -> Parser {
        self
    }
}

impl IntoParser for &Parser {
    fn into_parser(self) -> Parser {
        self.clone()
    }
}

impl IntoParser for u8 {
    fn into_parser(self) -> Parser {
        byte(self)
    }
}

impl IntoParser for char {
    fn into_parser(self) -> Parser {
        rune(self)
    }
}

impl IntoParser for &str {
    fn into_parser(self) -> Parser {
        string(self)
    }
}

impl IntoParser for String {
    fn into_parser(self) -> Parser {
        string(&self)
    }
}

impl IntoParser for &[u8] {
    fn into_parser(self) -> Parser {
        bytes(self)
    }
}

impl<const N: usize> IntoParser for &[u8; N] {
    fn into_parser(self) -> Parser {
        bytes(self)
    }
}

impl IntoParser for Vec<u8> {
    fn into_parser(self) -> Parser {
        bytes(&self)
    }
}

impl IntoParser for &Lazy {
    fn into_parser(self) -> Parser {
        self.parser()
    }
}
