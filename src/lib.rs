//! A toy regular expression engine.
//!
//! Patterns are parsed into an operator tree, compiled into an ε-NFA by
//! Thompson's construction, and matched by simulating the automaton against
//! the whole input. Patterns and inputs are handled as sequences of Unicode
//! scalar values (`char`).

mod nfa;
mod parser;

pub use nfa::Nfa;
pub use parser::{Ast, ParseError, Parser, PostOrder, Symbol};

/// Parse a pattern into its operator tree.
pub fn parse(pattern: &str) -> Result<Ast, ParseError> {
    Parser::parse(pattern)
}

/// Build an ε-NFA from a parsed operator tree.
pub fn build(ast: &Ast) -> Nfa {
    Nfa::build(ast)
}

/// Parse a pattern and build its ε-NFA in one step.
pub fn compile(pattern: &str) -> Result<Nfa, ParseError> {
    Nfa::new(pattern)
}

/// Report whether the whole of `input` belongs to the automaton's language.
pub fn matches(nfa: &Nfa, input: &str) -> bool {
    nfa.is_match(input)
}
