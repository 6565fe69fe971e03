/// A symbol labeling an NFA edge. Parser output only carries literals;
/// ε arises during automaton construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Epsilon,
    Literal(char),
}

impl Symbol {
    /// Number of characters this symbol consumes at `index`, or `None`
    /// when it does not match there. ε consumes nothing and always matches.
    pub fn match_size(&self, input: &[char], index: usize) -> Option<usize> {
        match *self {
            Symbol::Epsilon => Some(0),
            Symbol::Literal(c) => input.get(index).filter(|&&t| t == c).map(|_| 1),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Ast {
    Value(Symbol),
    Closure(Box<Ast>),
    Concatenation(Box<Ast>, Box<Ast>),
    Alternation(Box<Ast>, Box<Ast>),
}

impl Ast {
    /// Iterate the tree children-before-parent, left before right.
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder {
            stack: vec![(self, false)],
        }
    }
}

pub struct PostOrder<'a> {
    stack: Vec<(&'a Ast, bool)>,
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a Ast;

    fn next(&mut self) -> Option<&'a Ast> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            match node {
                Ast::Value(_) => {}
                Ast::Closure(inner) => {
                    self.stack.push((inner.as_ref(), false));
                }
                Ast::Concatenation(left, right) | Ast::Alternation(left, right) => {
                    self.stack.push((right.as_ref(), false));
                    self.stack.push((left.as_ref(), false));
                }
            }
        }

        None
    }
}
