use crate::error::SyntaxError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Precedence level. Larger binds tighter.
pub type Prec = u16;

/// The precedence reported by parentheses. They are never compared against operators when
/// shunting; it only marks them as outranking everything.
pub const PAREN_PREC: Prec = 6;

/// Whether an operator is left or right associative. For example:
///
/// - Subtraction is left associative because `0 - 10 - 1` is equal to `(0 - 10) - 1 = -11` rather
///   than `0 - (10 - 1) = -9`.
/// - Exponentiation is right associative because `2 ^ 3 ^ 2` is equal to `2 ^ (3 ^ 2) = 512`
///   rather than `(2 ^ 3) ^ 2 = 64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assoc {
    Left,
    Right,
}

/// The broad category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Operator,
    Parenthesis,
}

/// An arithmetic operator. Unary and binary minus are distinct operators that happen to share
/// the symbol `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// Unary minus.
    Negate,
    /// Postfix `!`.
    Factorial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paren {
    Open,
    Close,
}

/// A validated numeric literal, such as `3`, `3.14`, `.5`, or `2.`.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    text: String,
    value: f64,
}

/// One element of a postfix sequence. Tokens are only created through validating constructors,
/// so a `Number` always holds a parseable literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Number),
    Operator(Operator),
    Paren(Paren),
}

impl Operator {
    /// Resolve one of the symbols `+ - * / ^ !`. A `-` resolves to binary subtraction; the
    /// shunter decides separately whether it is really a negation.
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;

        match ch {
            '+' => Some(Add),
            '-' => Some(Sub),
            '*' => Some(Mul),
            '/' => Some(Div),
            '^' => Some(Pow),
            '!' => Some(Factorial),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        use Operator::*;

        match self {
            Add => '+',
            Sub | Negate => '-',
            Mul => '*',
            Div => '/',
            Pow => '^',
            Factorial => '!',
        }
    }

    pub fn prec(self) -> Prec {
        use Operator::*;

        match self {
            Add | Sub => 1,
            Mul | Div => 2,
            Pow => 3,
            Negate => 4,
            Factorial => 5,
        }
    }

    pub fn assoc(self) -> Assoc {
        use Operator::*;

        match self {
            Add | Sub | Mul | Div => Assoc::Left,
            Pow | Negate | Factorial => Assoc::Right,
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Negate | Operator::Factorial)
    }

    /// How many operands this operator consumes.
    pub fn arity(self) -> usize {
        if self.is_unary() {
            1
        } else {
            2
        }
    }
}

impl Paren {
    pub fn symbol(self) -> char {
        match self {
            Paren::Open => '(',
            Paren::Close => ')',
        }
    }
}

impl Number {
    /// Validate a numeric literal: digits with at most one `.`, and at least one digit. The
    /// value must also be finite, which rules out absurdly long digit strings.
    pub fn new(text: &str) -> Result<Number, SyntaxError> {
        if text.is_empty() {
            return Err(SyntaxError::EmptyToken);
        }
        let invalid = || SyntaxError::InvalidNumber {
            text: text.to_owned(),
            col: None,
        };
        if !number_regex().is_match(text) {
            return Err(invalid());
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Number {
                text: text.to_owned(),
                value,
            }),
            _ => Err(invalid()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

fn number_regex() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(r"^([0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap())
}

impl Token {
    /// A number token, validating its literal text.
    pub fn number(text: &str) -> Result<Token, SyntaxError> {
        Ok(Token::Number(Number::new(text)?))
    }

    pub fn op(op: Operator) -> Token {
        Token::Operator(op)
    }

    pub fn paren(paren: Paren) -> Token {
        Token::Paren(paren)
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Operator(_) => TokenKind::Operator,
            Token::Paren(_) => TokenKind::Parenthesis,
        }
    }

    /// The literal lexeme. Never empty.
    pub fn text(&self) -> String {
        match self {
            Token::Number(number) => number.text().to_owned(),
            Token::Operator(op) => op.symbol().to_string(),
            Token::Paren(paren) => paren.symbol().to_string(),
        }
    }

    /// Defined for operators and parentheses only.
    pub fn prec(&self) -> Option<Prec> {
        match self {
            Token::Number(_) => None,
            Token::Operator(op) => Some(op.prec()),
            Token::Paren(_) => Some(PAREN_PREC),
        }
    }

    /// Defined for operators only.
    pub fn assoc(&self) -> Option<Assoc> {
        match self {
            Token::Operator(op) => Some(op.assoc()),
            Token::Number(_) | Token::Paren(_) => None,
        }
    }

    pub fn is_unary(&self) -> bool {
        match self {
            Token::Operator(op) => op.is_unary(),
            Token::Number(_) | Token::Paren(_) => false,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(number) => write!(f, "{}", number),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Paren(paren) => write!(f, "{}", paren.symbol()),
        }
    }
}
