use crate::error::{CalcError, DomainError, EvaluationError};
use crate::token::{Operator, Token};

/// The largest `n` whose factorial is finite as an `f64`.
const MAX_FACTORIAL: f64 = 170.0;

/// Evaluate a postfix sequence, as produced by [`shunt`](crate::shunt), to a single number.
///
/// Numbers are pushed onto an operand stack, and each operator pops its operands and pushes its
/// result. A negation that arrives while the stack is empty came from the start of the
/// expression (`-5 + 3` shunts to `- 5 3 +`), and applies to the number right after it.
///
/// Fails if an operator lacks operands, if anything other than exactly one value is left at the
/// end, or if an operation is undefined (division by zero, factorial of a negative or
/// non-integer value).
pub fn evaluate(postfix: &[Token]) -> Result<f64, CalcError> {
    let mut stack = Vec::<f64>::new();
    let mut tokens = postfix.iter();
    while let Some(token) = tokens.next() {
        match token {
            Token::Number(number) => stack.push(number.value()),
            Token::Paren(_) => {
                return Err(EvaluationError::UnexpectedToken(token.text()).into());
            }
            Token::Operator(Operator::Negate) if stack.is_empty() => match tokens.next() {
                Some(Token::Number(number)) => {
                    stack.push(apply_binary(Operator::Sub, 0.0, number.value())?);
                }
                _ => return Err(EvaluationError::MissingOperand(Operator::Negate).into()),
            },
            Token::Operator(op) if op.is_unary() => {
                let operand = match stack.pop() {
                    Some(operand) => operand,
                    None => return Err(missing_operands(*op, 0).into()),
                };
                stack.push(apply_unary(*op, operand)?);
            }
            Token::Operator(op) => {
                let (left, right) = match (stack.pop(), stack.pop()) {
                    (Some(right), Some(left)) => (left, right),
                    (Some(_), None) => return Err(missing_operands(*op, 1).into()),
                    (None, _) => return Err(missing_operands(*op, 0).into()),
                };
                stack.push(apply_binary(*op, left, right)?);
            }
        }
    }
    match stack.as_slice() {
        [] => Err(EvaluationError::Empty.into()),
        [result] => Ok(*result),
        _ => Err(EvaluationError::InvalidExpression { remaining: stack }.into()),
    }
}

fn missing_operands(op: Operator, found: usize) -> EvaluationError {
    EvaluationError::MissingOperands {
        op,
        needed: op.arity(),
        found,
    }
}

fn apply_unary(op: Operator, operand: f64) -> Result<f64, DomainError> {
    match op {
        Operator::Negate => Ok(-operand),
        Operator::Factorial => factorial(operand),
        _ => unreachable!("binary operator '{}' applied to one operand", op),
    }
}

fn apply_binary(op: Operator, left: f64, right: f64) -> Result<f64, DomainError> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div if right == 0.0 => Err(DomainError::DivisionByZero),
        Operator::Div => Ok(left / right),
        Operator::Pow => Ok(power(left, right)),
        Operator::Negate | Operator::Factorial => {
            unreachable!("unary operator '{}' applied to two operands", op)
        }
    }
}

/// `n!`, computed as the product `1 * 2 * ... * n`. Overflows to infinity past `170!`.
pub fn factorial(n: f64) -> Result<f64, DomainError> {
    if n < 0.0 {
        return Err(DomainError::NegativeFactorial(n));
    }
    if n.is_infinite() {
        return Ok(f64::INFINITY);
    }
    if n.fract() != 0.0 {
        return Err(DomainError::NonIntegerFactorial(n));
    }
    if n > MAX_FACTORIAL {
        return Ok(f64::INFINITY);
    }
    let mut product = 1.0;
    let mut i = 2.0;
    while i <= n {
        product *= i;
        i += 1.0;
    }
    Ok(product)
}

/// Real exponentiation.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}
