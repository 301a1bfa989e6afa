//! # Shunting Yard
//!
//! A calculator for infix arithmetic, in two passes:
//!
//! 1. [`shunt`] scans the expression and emits its tokens in postfix (reverse polish) order,
//!    using an operator stack ordered by precedence and associativity.
//! 2. [`evaluate`] reduces the postfix sequence to a single number, using an operand stack.
//!
//! Supported syntax: decimal numbers, `+ - * /`, right-associative `^`, postfix `!`, unary
//! minus, parentheses, and implicit multiplication such as `2(3)` or `(2)(3)`.
//!
//! ```
//! use shunting_yard::{calculate, shunt, show_postfix};
//!
//! let postfix = shunt("3 + 4 * 2 / ( 1 - 5 )").unwrap();
//! assert_eq!(show_postfix(&postfix), "3 4 2 * 1 5 - / +");
//! assert_eq!(calculate("3 + 4 * 2 / ( 1 - 5 )").unwrap(), 1.0);
//! ```

mod error;
mod evaluator;
mod shunter;
mod token;

pub use error::{CalcError, Col, DomainError, EvaluationError, ShowSyntaxError, SyntaxError};
pub use evaluator::{evaluate, factorial, power};
pub use shunter::shunt;
pub use token::{Assoc, Number, Operator, Paren, Prec, Token, TokenKind, PAREN_PREC};

/// Shunt `expr` and evaluate the result.
pub fn calculate(expr: &str) -> Result<f64, CalcError> {
    #[cfg(feature = "debug_mode")]
    println!("Input:    {}", expr);
    let postfix = shunt(expr)?;
    #[cfg(feature = "debug_mode")]
    println!("Shunted:  {}", show_postfix(&postfix));
    let result = evaluate(&postfix)?;
    #[cfg(feature = "debug_mode")]
    println!("Result:   {}", result);
    Ok(result)
}

/// Display a token sequence with single spaces between tokens, like `3 4 +`.
pub fn show_postfix(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
