use crate::error::{Col, SyntaxError};
use crate::token::{Assoc, Operator, Token};

/// Convert an infix arithmetic expression into postfix (reverse polish) order. For example,
/// `1 * 2 + 3 * 4` would become `1 2 * 3 4 * +`.
///
/// Besides reordering by precedence and associativity, this:
///
/// - Distinguishes unary minus from binary minus. A unary minus is placed _before_ its operand,
///   so `-5` becomes `- 5`.
/// - Inserts the multiplications implied by juxtaposition, so `2(3)`, `(2)3`, and `(2)(3)` all
///   become `2 3 *`.
/// - Emits `!` immediately, since it binds tighter than anything it could be compared against.
///
/// Whitespace is skipped entirely, even inside a number literal, so `12 34` is `1234`. An empty
/// expression produces an empty sequence.
pub fn shunt(expr: &str) -> Result<Vec<Token>, SyntaxError> {
    Shunter::new().shunt(expr)
}

/// The last thing seen, for deciding whether `-` is unary and whether a multiplication is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Number,
    Operator,
    Open,
    Close,
    Bang,
}

/// An entry on the operator stack. Open parens remember where they were, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Op(Operator),
    Open(Col),
}

#[derive(Debug)]
struct Shunter {
    output: Vec<Token>,
    stack: Vec<Pending>,
    /// The number literal currently being read.
    number: String,
    number_start: Col,
    /// `None` at the start of the expression.
    prev: Option<Prev>,
}

impl Shunter {
    fn new() -> Shunter {
        Shunter {
            output: vec![],
            stack: vec![],
            number: String::new(),
            number_start: 0,
            prev: None,
        }
    }

    fn shunt(mut self, expr: &str) -> Result<Vec<Token>, SyntaxError> {
        for (col, ch) in expr.chars().enumerate() {
            match ch {
                _ if ch.is_whitespace() => continue,
                '0'..='9' | '.' => {
                    if self.number.is_empty() {
                        self.number_start = col;
                        self.flush_negation();
                    }
                    self.number.push(ch);
                }
                '!' => {
                    self.flush_number()?;
                    self.emit(Token::op(Operator::Factorial));
                    self.prev = Some(Prev::Bang);
                }
                '+' | '-' | '*' | '/' | '^' => {
                    self.flush_number()?;
                    let op = match Operator::from_char(ch) {
                        Some(op) => op,
                        None => return Err(SyntaxError::InvalidChar { ch, col }),
                    };
                    if op == Operator::Sub && self.negation_expected() {
                        self.push(Pending::Op(Operator::Negate));
                    } else {
                        self.push_binary(op);
                    }
                    self.prev = Some(Prev::Operator);
                }
                '(' => {
                    self.flush_number()?;
                    self.flush_negation();
                    if matches!(
                        self.prev,
                        Some(Prev::Number) | Some(Prev::Close) | Some(Prev::Bang)
                    ) {
                        self.push_binary(Operator::Mul);
                    }
                    self.push(Pending::Open(col));
                    self.prev = Some(Prev::Open);
                }
                ')' => {
                    self.flush_number()?;
                    self.close_paren(col)?;
                    self.prev = Some(Prev::Close);
                }
                _ => return Err(SyntaxError::InvalidChar { ch, col }),
            }
        }
        self.flush_number()?;
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Op(op) => self.emit(Token::op(op)),
                Pending::Open(col) => return Err(SyntaxError::UnclosedOpen { col }),
            }
        }
        Ok(self.output)
    }

    /// A `-` is a negation at the start of the expression, or after an operator or `(`.
    fn negation_expected(&self) -> bool {
        !matches!(
            self.prev,
            Some(Prev::Number) | Some(Prev::Close) | Some(Prev::Bang)
        )
    }

    /// Move the number literal being read to the output. A number directly after `)` or `!` is
    /// multiplied with it.
    fn flush_number(&mut self) -> Result<(), SyntaxError> {
        if self.number.is_empty() {
            return Ok(());
        }
        if matches!(self.prev, Some(Prev::Close) | Some(Prev::Bang)) {
            self.push_binary(Operator::Mul);
        }
        let token = Token::number(&self.number).map_err(|err| err.at(self.number_start))?;
        self.emit(token);
        self.number.clear();
        self.prev = Some(Prev::Number);
        Ok(())
    }

    /// A pending negation goes to the output just ahead of its operand.
    fn flush_negation(&mut self) {
        if let Some(Pending::Op(Operator::Negate)) = self.stack.last() {
            self.stack.pop();
            self.emit(Token::op(Operator::Negate));
        }
    }

    fn push_binary(&mut self, op: Operator) {
        while let Some(Pending::Op(top)) = self.stack.last().copied() {
            let outranks = top.prec() > op.prec()
                || (top.prec() == op.prec() && op.assoc() == Assoc::Left);
            if !outranks {
                break;
            }
            self.stack.pop();
            self.emit(Token::op(top));
        }
        self.push(Pending::Op(op));
    }

    fn close_paren(&mut self, col: Col) -> Result<(), SyntaxError> {
        loop {
            match self.stack.pop() {
                Some(Pending::Op(op)) => self.emit(Token::op(op)),
                Some(Pending::Open(_)) => return Ok(()),
                None => return Err(SyntaxError::UnmatchedClose { col }),
            }
        }
    }

    fn push(&mut self, pending: Pending) {
        #[cfg(feature = "debug_mode")]
        println!("Push:     {:?}", pending);
        self.stack.push(pending);
    }

    fn emit(&mut self, token: Token) {
        #[cfg(feature = "debug_mode")]
        println!("Emit:     {}", token);
        self.output.push(token);
    }
}
