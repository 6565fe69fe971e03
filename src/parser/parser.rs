use thiserror::Error;

use super::ast::{Ast, Symbol};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unbalanced parentheses")]
    UnbalancedParenthesis,
    #[error("malformed expression: operator is missing an operand")]
    MalformedExpression,
}

// '*' is postfix and applied on the spot, so it never sits on the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Operator {
    LeftParen,
    Concatenation,
    Alternation,
}

impl Operator {
    fn precedence(&self) -> u8 {
        match self {
            Operator::LeftParen => 0,
            Operator::Alternation => 1,
            Operator::Concatenation => 2,
        }
    }
}

pub struct Parser {
    operators: Vec<Operator>,
    output: Vec<Ast>,
    after_operand: bool,
    after_group: bool,
}

impl Parser {
    pub fn parse(pattern: &str) -> Result<Ast, ParseError> {
        let mut parser = Parser {
            operators: vec![],
            output: vec![],
            after_operand: false,
            after_group: false,
        };

        for c in pattern.chars() {
            match c {
                '(' => parser.open_group()?,
                ')' => parser.close_group()?,
                '*' => parser.closure()?,
                '|' => parser.alternate()?,
                c => parser.literal(c)?,
            }
        }

        parser.finish()
    }

    fn literal(&mut self, c: char) -> Result<(), ParseError> {
        self.push_concatenation()?;
        self.output.push(Ast::Value(Symbol::Literal(c)));

        self.after_operand = true;
        self.after_group = false;
        Ok(())
    }

    fn open_group(&mut self) -> Result<(), ParseError> {
        self.push_concatenation()?;
        self.operators.push(Operator::LeftParen);

        self.after_operand = false;
        self.after_group = false;
        Ok(())
    }

    fn close_group(&mut self) -> Result<(), ParseError> {
        loop {
            match self.operators.pop() {
                Some(Operator::LeftParen) => break,
                Some(op) => self.apply(op)?,
                None => return Err(ParseError::UnbalancedParenthesis),
            }
        }

        self.after_operand = false;
        self.after_group = true;
        Ok(())
    }

    fn closure(&mut self) -> Result<(), ParseError> {
        let inner = self.output.pop().ok_or(ParseError::MalformedExpression)?;
        self.output.push(Ast::Closure(Box::new(inner)));

        // a starred atom is itself an operand: a*a == (a*)·a
        self.after_operand = true;
        self.after_group = false;
        Ok(())
    }

    fn alternate(&mut self) -> Result<(), ParseError> {
        self.push_operator(Operator::Alternation)?;

        self.after_operand = false;
        self.after_group = false;
        Ok(())
    }

    // Materialize the implicit concatenation operator when the previous
    // token ended an operand.
    fn push_concatenation(&mut self) -> Result<(), ParseError> {
        if self.after_operand || self.after_group {
            self.push_operator(Operator::Concatenation)?;
        }
        Ok(())
    }

    fn push_operator(&mut self, op: Operator) -> Result<(), ParseError> {
        while let Some(&top) = self.operators.last() {
            if top == Operator::LeftParen || top.precedence() < op.precedence() {
                break;
            }

            self.operators.pop();
            self.apply(top)?;
        }

        self.operators.push(op);
        Ok(())
    }

    fn finish(mut self) -> Result<Ast, ParseError> {
        while let Some(op) = self.operators.pop() {
            if op == Operator::LeftParen {
                return Err(ParseError::UnbalancedParenthesis);
            }
            self.apply(op)?;
        }

        match (self.output.pop(), self.output.is_empty()) {
            (Some(root), true) => Ok(root),
            _ => Err(ParseError::MalformedExpression),
        }
    }

    fn apply(&mut self, op: Operator) -> Result<(), ParseError> {
        let right = self.output.pop().ok_or(ParseError::MalformedExpression)?;
        let left = self.output.pop().ok_or(ParseError::MalformedExpression)?;

        let node = match op {
            Operator::Concatenation => Ast::Concatenation(Box::new(left), Box::new(right)),
            Operator::Alternation => Ast::Alternation(Box::new(left), Box::new(right)),
            // both callers stop at '('; reaching it here is a parser bug
            Operator::LeftParen => unreachable!("unexpected operator on the stack"),
        };

        self.output.push(node);
        Ok(())
    }
}
