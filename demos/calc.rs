use clap::Parser;
use colored::Colorize;
use shunting_yard::{calculate, shunt, show_postfix, CalcError};
use std::io::{self, BufRead, Write};

/// Evaluate infix arithmetic with the Shunting Yard algorithm.
///
/// With no arguments, runs the built-in self tests.
#[derive(Debug, Parser)]
#[command(name = "calc")]
struct Args {
    /// Read expressions from stdin, one per line, until `e`, `exit`, or end of input.
    #[arg(short, long)]
    interactive: bool,
    /// An expression to evaluate.
    expr: Option<String>,
}

const SHUNTING_CASES: &[(&str, &str)] = &[
    ("3 + 4", "3 4 +"),
    ("3 + 4 * 2 / ( 1 - 5 )", "3 4 2 * 1 5 - / +"),
    ("( 1 + 2 ) * 3", "1 2 + 3 *"),
    ("3+4*2-5!", "3 4 2 * + 5 ! -"),
    ("2^3^4", "2 3 4 ^ ^"),
    ("3+4*2/(1-5)^2^3", "3 4 2 * 1 5 - 2 3 ^ ^ / +"),
    ("3(5)", "3 5 *"),
    ("(4)5", "4 5 *"),
    ("(12)(15)", "12 15 *"),
    ("(4)3!", "4 3 ! *"),
    ("-5", "- 5"),
    ("-(5 + 3)", "- 5 3 +"),
    ("(2+3)!4", "2 3 + ! 4 *"),
    ("", ""),
];

const EVALUATION_CASES: &[(&str, f64)] = &[
    ("2 + 3", 5.0),
    ("15 / 3", 5.0),
    ("3! - 5", 1.0),
    ("5 + (1 + 2) * 4 - 3", 14.0),
    ("2.5 + 3.5", 6.0),
    ("-2 + 3 * 2.5", 5.5),
    ("2! + 3 ^ 2 - 1", 10.0),
    ("-(10 / 2)-2", -7.0),
    ("(-2+10 / 2) - 2 + 1.5", 2.5),
];

fn report(expr: &str, err: &CalcError) {
    match err {
        CalcError::Syntax(err) => println!("{}", err.show(expr).to_string().red()),
        err => println!("{} {}", "Error:".red(), err),
    }
}

fn interactive() -> io::Result<()> {
    println!("Enter expressions to evaluate or type 'e' to exit:");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line == "e" || line == "exit" {
            break;
        }
        match calculate(line) {
            Ok(result) => println!("Result: {}", result),
            Err(err) => report(line, &err),
        }
    }
    Ok(())
}

fn self_test() {
    let mut failures = 0;

    println!("Now testing shunting");
    for (input, expected) in SHUNTING_CASES {
        let actual = shunt(input).map(|postfix| show_postfix(&postfix));
        if actual.as_deref() == Ok(*expected) {
            println!("{} '{}'", "Passed:".green(), input);
        } else {
            failures += 1;
            println!(
                "{} '{}': expected '{}', got {:?}",
                "Failed:".red(),
                input,
                expected,
                actual
            );
        }
    }

    println!("Now testing evaluation");
    for (input, expected) in EVALUATION_CASES {
        match calculate(input) {
            Ok(result) if result == *expected => {
                println!("{} '{}' = {}", "Passed:".green(), input, result)
            }
            result => {
                failures += 1;
                println!(
                    "{} '{}': expected {}, got {:?}",
                    "Failed:".red(),
                    input,
                    expected,
                    result
                );
            }
        }
    }

    let total = SHUNTING_CASES.len() + EVALUATION_CASES.len();
    if failures == 0 {
        println!("{}", format!("All {} tests passed", total).green());
    } else {
        println!("{}", format!("{} of {} tests failed", failures, total).red());
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if args.interactive {
        interactive()?;
    } else if let Some(expr) = args.expr {
        match calculate(&expr) {
            Ok(result) => println!("{}", result),
            Err(err) => report(&expr, &err),
        }
    } else {
        self_test();
    }
    Ok(())
}
