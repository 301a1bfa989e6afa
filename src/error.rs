use crate::token::Operator;
use std::fmt;
use thiserror::Error;

/// Column number, counted in chars. Zero-indexed.
pub type Col = usize;

/// An error while converting infix text into postfix order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Invalid token '{ch}'.")]
    InvalidChar { ch: char, col: Col },
    #[error("Invalid number '{text}'.")]
    InvalidNumber { text: String, col: Option<Col> },
    #[error("Token created with an empty string.")]
    EmptyToken,
    #[error("Mismatched parentheses: ')' has no matching '('.")]
    UnmatchedClose { col: Col },
    #[error("Mismatched parentheses: '(' is never closed.")]
    UnclosedOpen { col: Col },
}

/// An error from a postfix sequence that does not describe a single value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Nothing to evaluate.")]
    Empty,
    #[error("Operator '{op}' needs {needed} operand(s) but only {found} available.")]
    MissingOperands {
        op: Operator,
        needed: usize,
        found: usize,
    },
    #[error("Unary '{0}' at the start of the expression is not followed by a number.")]
    MissingOperand(Operator),
    #[error("Unexpected token '{0}' in postfix expression.")]
    UnexpectedToken(String),
    #[error("Invalid expression. Remaining stack: [{}].", show_stack(.remaining))]
    InvalidExpression { remaining: Vec<f64> },
}

/// A mathematically undefined operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Factorial of a negative number ({0}).")]
    NegativeFactorial(f64),
    #[error("Factorial of a non-integer ({0}).")]
    NonIntegerFactorial(f64),
}

/// Any error from [`calculate`](crate::calculate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Syntax Error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("Evaluation Error: {0}")]
    Evaluation(#[from] EvaluationError),
    #[error("Domain Error: {0}")]
    Domain(#[from] DomainError),
}

fn show_stack(stack: &[f64]) -> String {
    stack
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl SyntaxError {
    /// The column of the offending character, if known.
    pub fn col(&self) -> Option<Col> {
        use SyntaxError::*;

        match self {
            InvalidChar { col, .. } | UnmatchedClose { col } | UnclosedOpen { col } => Some(*col),
            InvalidNumber { col, .. } => *col,
            EmptyToken => None,
        }
    }

    pub(crate) fn at(self, at: Col) -> SyntaxError {
        match self {
            SyntaxError::InvalidNumber { text, col: None } => SyntaxError::InvalidNumber {
                text,
                col: Some(at),
            },
            error => error,
        }
    }

    /// Display this error, along with the line of `source` it occurred in and a caret under the
    /// offending character.
    pub fn show<'e, 's>(&'e self, source: &'s str) -> ShowSyntaxError<'e, 's> {
        ShowSyntaxError {
            error: self,
            source,
        }
    }
}

/// A [`SyntaxError`] rendered against its source text. See [`SyntaxError::show`].
#[derive(Debug, Clone, Copy)]
pub struct ShowSyntaxError<'e, 's> {
    error: &'e SyntaxError,
    source: &'s str,
}

impl<'e, 's> fmt::Display for ShowSyntaxError<'e, 's> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Syntax Error: {}", self.error)?;
        let col = match self.error.col() {
            Some(col) => col,
            None => return Ok(()),
        };
        let width = match self.error {
            SyntaxError::InvalidNumber { text, .. } => text.chars().count().max(1),
            _ => 1,
        };
        let mut line_start = 0;
        for line in self.source.split('\n') {
            let len = line.chars().count();
            if col <= line_start + len {
                writeln!(f, "{}", line)?;
                for _ in line_start..col {
                    write!(f, " ")?;
                }
                for _ in 0..width {
                    write!(f, "^")?;
                }
                break;
            }
            line_start += len + 1;
        }
        Ok(())
    }
}
