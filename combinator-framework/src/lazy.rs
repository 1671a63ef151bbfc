use crate::Parser;
use std::cell::RefCell;
use std::rc::Rc;

/// A forward declaration for a parser that is not yet defined.
///
/// Recursive grammars need to reference a parser before all of its
/// alternatives are known. A `Lazy` cell is created up front, referenced
/// from the grammar via [`parser`](Lazy::parser), and filled in exactly
/// once with [`define`](Lazy::define) when the grammar is complete. The
/// returned parser dereferences the cell at call time, not at construction
/// time, which keeps ownership acyclic even though the logical grammar is
/// cyclic.
#[derive(Clone, Default)]
pub struct Lazy {
    cell: Rc<RefCell<Option<Parser>>>,
}

impl Lazy {
    /// Creates an undefined cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills in the cell.
    ///
    /// # Panics
    /// Panics if the cell was already defined; a grammar has exactly one
    /// definition per declaration.
    pub fn define(&self, parser: Parser) {
        let previous = self.cell.borrow_mut().replace(parser);
        assert!(previous.is_none(), "lazy parser defined twice");
    }

    /// Returns a parser that resolves the cell on every call.
    ///
    /// # Panics
    /// The returned parser panics when invoked before the cell is defined;
    /// that is a grammar-construction bug, not an input error.
    pub fn parser(&self) -> Parser {
        let cell = Rc::clone(&self.cell);
        Parser::new(move |state, result| {
            let parser = cell
                .borrow()
                .clone()
                .expect("lazy parser invoked before being defined");
            parser.parse(state, result)
        })
    }
}
