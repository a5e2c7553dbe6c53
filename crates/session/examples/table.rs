//! Prints the iteration table of a bisection run.
//!
//! # Usage
//!
//! ```text
//! cargo run --example table
//! cargo run --example table -- "cos(x) - x" 0 1
//! cargo run --example table -- "x^2 - 2" 0 2 1e-10 60
//! cargo run --example table -- step
//! ```
//!
//! With no arguments the preset problem `x^3 - x - 2` on `[1, 2]` is solved.
//! `step` walks the preset one iteration at a time, the way a front end's
//! step button would.

use std::error::Error;

use rootstep_session::{Config, Inputs, IterationRecord, Session, SignClass, Summary};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut session = Session::new();

    if args.first().map(String::as_str) == Some("step") {
        let inputs = Inputs::example();
        print_header();
        loop {
            let report = session.step(&inputs)?;
            if let Some(record) = report.record {
                print_row(&record);
            }
            if report.finished {
                break;
            }
        }
    } else {
        let inputs = parse_inputs(&args)?;
        print_header();
        for record in session.calculate(&inputs)? {
            print_row(record);
        }
    }

    match Summary::from_records(session.records()) {
        Some(summary) => println!(
            "\nroot ≈ {:.10}  f(root) = {:.3e}  error = {:.3e}  iterations = {}",
            summary.root, summary.f_root, summary.error, summary.iterations
        ),
        None => println!("\nno iterations were needed"),
    }
    Ok(())
}

fn parse_inputs(args: &[String]) -> Result<Inputs, Box<dyn Error>> {
    let Some(expression) = args.first() else {
        return Ok(Inputs::example());
    };

    let number = |i: usize, default: f64| -> Result<f64, Box<dyn Error>> {
        Ok(args.get(i).map(|s| s.parse()).transpose()?.unwrap_or(default))
    };
    let defaults = Config::default();
    let max_iters = args
        .get(4)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(defaults.max_iters());

    Ok(Inputs::new(
        expression.as_str(),
        [number(1, 1.0)?, number(2, 2.0)?],
        Config::new(number(3, defaults.tolerance())?, max_iters),
    ))
}

fn print_header() {
    println!(
        "{:>4}  {:>14}  {:>14}  {:>14}  {:>4}  {:>12}",
        "n", "a", "b", "c", "sign", "f(c)"
    );
}

fn print_row(record: &IterationRecord) {
    let sign = match record.sign {
        SignClass::Negative => "-",
        SignClass::Positive => "+",
    };
    println!(
        "{:>4}  {:>14.10}  {:>14.10}  {:>14.10}  {:>4}  {:>12.3e}",
        record.index, record.a, record.b, record.c, sign, record.fc
    );
}
