use shunting_yard::{
    calculate, evaluate, shunt, CalcError, DomainError, EvaluationError, Operator, Paren,
    SyntaxError, Token,
};

#[test]
fn test_invalid_char() {
    assert_eq!(
        shunt("3 + x"),
        Err(SyntaxError::InvalidChar { ch: 'x', col: 4 })
    );
    assert_eq!(shunt("2 % 3").unwrap_err().col(), Some(2));
}

#[test]
fn test_invalid_number() {
    assert_eq!(
        shunt("1 + 1.2.3"),
        Err(SyntaxError::InvalidNumber {
            text: "1.2.3".to_owned(),
            col: Some(4),
        })
    );
    assert!(matches!(
        shunt("."),
        Err(SyntaxError::InvalidNumber { .. })
    ));
}

#[test]
fn test_mismatched_parens() {
    assert_eq!(shunt("(1+2"), Err(SyntaxError::UnclosedOpen { col: 0 }));
    assert_eq!(shunt("1+2)"), Err(SyntaxError::UnmatchedClose { col: 3 }));
    assert_eq!(shunt(")("), Err(SyntaxError::UnmatchedClose { col: 0 }));
}

#[test]
fn test_empty_token() {
    assert_eq!(Token::number(""), Err(SyntaxError::EmptyToken));
    assert_eq!(SyntaxError::EmptyToken.col(), None);
}

#[test]
fn test_syntax_error_display() {
    let err = shunt("12 + a").unwrap_err();
    assert_eq!(err.to_string(), "Invalid token 'a'.");
    assert_eq!(
        err.show("12 + a").to_string(),
        "Syntax Error: Invalid token 'a'.\n12 + a\n     ^"
    );

    let err = shunt("1 + 1.2.3").unwrap_err();
    assert_eq!(
        err.show("1 + 1.2.3").to_string(),
        "Syntax Error: Invalid number '1.2.3'.\n1 + 1.2.3\n    ^^^^^"
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        calculate("5 / 0"),
        Err(CalcError::Domain(DomainError::DivisionByZero))
    );
    assert_eq!(
        calculate("1 / (2 - 2)"),
        Err(CalcError::Domain(DomainError::DivisionByZero))
    );
}

#[test]
fn test_bad_factorial() {
    assert_eq!(
        calculate("(-1)!"),
        Err(CalcError::Domain(DomainError::NegativeFactorial(-1.0)))
    );
    assert_eq!(
        calculate("2.5!"),
        Err(CalcError::Domain(DomainError::NonIntegerFactorial(2.5)))
    );
}

#[test]
fn test_missing_operands() {
    assert_eq!(
        calculate("1 +"),
        Err(CalcError::Evaluation(EvaluationError::MissingOperands {
            op: Operator::Add,
            needed: 2,
            found: 1,
        }))
    );
    assert_eq!(
        calculate("+"),
        Err(CalcError::Evaluation(EvaluationError::MissingOperands {
            op: Operator::Add,
            needed: 2,
            found: 0,
        }))
    );
    assert_eq!(
        calculate("!"),
        Err(CalcError::Evaluation(EvaluationError::MissingOperands {
            op: Operator::Factorial,
            needed: 1,
            found: 0,
        }))
    );
    assert_eq!(
        calculate("-"),
        Err(CalcError::Evaluation(EvaluationError::MissingOperand(
            Operator::Negate
        )))
    );
}

#[test]
fn test_leftover_operands() {
    let postfix = vec![Token::number("1").unwrap(), Token::number("2").unwrap()];
    let err = evaluate(&postfix).unwrap_err();
    assert_eq!(
        err,
        CalcError::Evaluation(EvaluationError::InvalidExpression {
            remaining: vec![1.0, 2.0],
        })
    );
    assert_eq!(
        err.to_string(),
        "Evaluation Error: Invalid expression. Remaining stack: [1, 2]."
    );
}

#[test]
fn test_empty_evaluation() {
    assert_eq!(
        calculate(""),
        Err(CalcError::Evaluation(EvaluationError::Empty))
    );
}

#[test]
fn test_paren_in_postfix() {
    let postfix = vec![Token::paren(Paren::Open), Token::number("1").unwrap()];
    assert_eq!(
        evaluate(&postfix),
        Err(CalcError::Evaluation(EvaluationError::UnexpectedToken(
            "(".to_owned()
        )))
    );
}

#[test]
fn test_errors_convert() {
    fn run(source: &str) -> Result<f64, CalcError> {
        let postfix = shunt(source)?;
        evaluate(&postfix)
    }
    assert!(matches!(run("(1"), Err(CalcError::Syntax(_))));
    assert_eq!(run("(1)"), Ok(1.0));
}
