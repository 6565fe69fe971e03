use super::{Edge, Nfa, State, StateId};
use crate::parser::{Ast, Symbol};

pub(crate) struct Builder {
    nodes: Vec<State>,
}

// A partial automaton: its start state and its single dangling end state.
// An end state carries no outbound edges until a parent construction
// wires it up.
struct Fragment {
    start_id: StateId,
    end_id: StateId,
}

impl Builder {
    pub fn build(ast: &Ast) -> Nfa {
        let mut builder = Builder { nodes: vec![] };
        let fragment = builder.build_(ast);

        builder.nodes[fragment.end_id].accepting = true;

        Nfa {
            nodes: builder.nodes,
            start_id: fragment.start_id,
            accept_id: fragment.end_id,
        }
    }

    fn build_(&mut self, ast: &Ast) -> Fragment {
        let mut stack: Vec<Fragment> = vec![];

        for node in ast.post_order() {
            match node {
                Ast::Value(symbol) => self.build_value(*symbol, &mut stack),
                Ast::Closure(_) => self.build_closure(&mut stack),
                Ast::Concatenation(_, _) => self.build_concatenation(&mut stack),
                Ast::Alternation(_, _) => self.build_alternation(&mut stack),
            }
        }

        let fragment = stack.pop().expect("construction left no fragment");
        assert!(stack.is_empty(), "construction left extra fragments");

        fragment
    }

    fn push_state(&mut self) -> StateId {
        let id = self.nodes.len();
        self.nodes.push(State {
            nexts: vec![],
            accepting: false,
        });
        id
    }

    fn push_edge(&mut self, from_id: StateId, symbol: Symbol, to_id: StateId) {
        self.nodes[from_id].nexts.push(Edge {
            symbol,
            next_id: to_id,
        });
    }

    fn build_value(&mut self, symbol: Symbol, stack: &mut Vec<Fragment>) {
        let end_id = self.push_state();
        let start_id = self.push_state();
        self.push_edge(start_id, symbol, end_id);

        stack.push(Fragment { start_id, end_id });
    }

    fn build_closure(&mut self, stack: &mut Vec<Fragment>) {
        let inner = stack.pop().expect("closure needs an operand");

        let end_id = self.push_state();
        let start_id = self.push_state();

        // skip and enter
        self.push_edge(start_id, Symbol::Epsilon, end_id);
        self.push_edge(start_id, Symbol::Epsilon, inner.start_id);
        // loop back and exit
        self.push_edge(inner.end_id, Symbol::Epsilon, inner.start_id);
        self.push_edge(inner.end_id, Symbol::Epsilon, end_id);

        stack.push(Fragment { start_id, end_id });
    }

    fn build_concatenation(&mut self, stack: &mut Vec<Fragment>) {
        let second = stack.pop().expect("concatenation needs two operands");
        let first = stack.pop().expect("concatenation needs two operands");

        self.push_edge(first.end_id, Symbol::Epsilon, second.start_id);

        stack.push(Fragment {
            start_id: first.start_id,
            end_id: second.end_id,
        });
    }

    fn build_alternation(&mut self, stack: &mut Vec<Fragment>) {
        let second = stack.pop().expect("alternation needs two operands");
        let first = stack.pop().expect("alternation needs two operands");

        let start_id = self.push_state();
        self.push_edge(start_id, Symbol::Epsilon, first.start_id);
        self.push_edge(start_id, Symbol::Epsilon, second.start_id);

        let end_id = self.push_state();
        self.push_edge(first.end_id, Symbol::Epsilon, end_id);
        self.push_edge(second.end_id, Symbol::Epsilon, end_id);

        stack.push(Fragment { start_id, end_id });
    }
}
