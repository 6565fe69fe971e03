use pretty_assertions::assert_eq;

use super::super::*;
use crate::parser::Symbol;

const PATTERNS: [&str; 8] = [
    "a",
    "ab",
    "a|b",
    "a*",
    "a(b|c)*",
    "(a|b)*c",
    "(ab|bc)*",
    "a*a|b(c|d)*",
];

fn run(pattern: &str) -> Nfa {
    Nfa::new(pattern).unwrap()
}

#[test]
fn single_accepting_state_without_outbound_edges() {
    for src in PATTERNS {
        let nfa = run(src);

        let accepting: Vec<StateId> = nfa
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, state)| state.accepting)
            .map(|(id, _)| id)
            .collect();

        assert_eq!(accepting, vec![nfa.accept_id], "pattern {:?}", src);
        assert!(nfa.nodes[nfa.accept_id].nexts.is_empty(), "pattern {:?}", src);
    }
}

#[test]
fn start_state_without_inbound_edges() {
    for src in PATTERNS {
        let nfa = run(src);

        let inbound = nfa
            .nodes
            .iter()
            .flat_map(|state| state.nexts.iter())
            .any(|edge| edge.next_id == nfa.start_id);

        assert!(!inbound, "pattern {:?}", src);
    }
}

#[test]
fn out_degree_at_most_two() {
    for src in PATTERNS {
        let nfa = run(src);

        for (id, state) in nfa.nodes.iter().enumerate() {
            assert!(state.nexts.len() <= 2, "pattern {:?}, state {}", src, id);

            // two-way branches are ε-only; a consuming edge stands alone
            if state.nexts.len() == 2 {
                assert!(
                    state.nexts.iter().all(|e| e.symbol == Symbol::Epsilon),
                    "pattern {:?}, state {}",
                    src,
                    id
                );
            }
            if state.nexts.iter().any(|e| e.symbol != Symbol::Epsilon) {
                assert_eq!(state.nexts.len(), 1, "pattern {:?}, state {}", src, id);
            }
        }
    }
}

#[test]
fn edges_stay_inside_the_arena() {
    for src in PATTERNS {
        let nfa = run(src);

        for state in nfa.nodes.iter() {
            for edge in state.nexts.iter() {
                assert!(edge.next_id < nfa.nodes.len(), "pattern {:?}", src);
            }
        }
    }
}

#[test]
fn thompson_state_counts() {
    // value = 2 states, closure and alternation add 2, concatenation adds 0
    assert_eq!(run("a").state_count(), 2);
    assert_eq!(run("ab").state_count(), 4);
    assert_eq!(run("a*").state_count(), 4);
    assert_eq!(run("a|b").state_count(), 6);
    assert_eq!(run("a(b|c)*").state_count(), 10);
}
