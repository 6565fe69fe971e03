use self::{builder::Builder, matcher::Matcher};
use crate::parser::{Ast, ParseError, Parser, Symbol};

mod builder;
mod matcher;

#[cfg(test)]
mod tests;

pub(crate) type StateId = usize;

/// An ε-NFA produced by Thompson's construction.
///
/// All states live in one arena and edges hold arena indices, so the
/// back-edges introduced by closures need no shared ownership and the
/// whole graph is freed with the `Nfa`. The automaton is immutable after
/// construction; matching allocates its own working state per call.
pub struct Nfa {
    nodes: Vec<State>,
    start_id: StateId,
    accept_id: StateId,
}

impl Nfa {
    pub fn new(pattern: &str) -> Result<Nfa, ParseError> {
        let ast = Parser::parse(pattern)?;
        Ok(Self::build(&ast))
    }

    pub fn build(ast: &Ast) -> Nfa {
        let nfa = Builder::build(ast);
        log::trace!(
            "built nfa with {} states (start {}, accept {})",
            nfa.nodes.len(),
            nfa.start_id,
            nfa.accept_id,
        );
        nfa
    }

    pub fn is_match(&self, input: &str) -> bool {
        let matcher = Matcher::new(&self.nodes, self.start_id);
        matcher.execute(input)
    }

    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }
}

pub(crate) struct State {
    pub nexts: Vec<Edge>,
    pub accepting: bool,
}

pub(crate) struct Edge {
    pub symbol: Symbol,
    pub next_id: StateId,
}
