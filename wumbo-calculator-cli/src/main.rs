use anyhow::{bail, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::io;
use std::io::{BufRead, Write};
use wumbo_calculator::evaluator::{
    format_result, infix_converter, lexer, postfix_evaluator, tokens_to_string,
};

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate; starts an interactive session when omitted
    expression: Option<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();

    match arguments.expression {
        Some(expression) => evaluate_once(&expression),
        None => run_interactive(),
    }
}

fn evaluate_once(expression: &str) -> Result<()> {
    let result = evaluate_logged(expression);
    if result.is_nan() {
        bail!("invalid expression");
    }
    println!("{}", format_result(result));
    Ok(())
}

/// Reads expressions line by line, chaining off of the previous result
/// the way the calculator display does: a line that starts with an
/// operator is applied to the last result, and a failed line clears it.
fn run_interactive() -> Result<()> {
    let stdin = io::stdin();
    let mut last_result = String::new();

    print_prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            if !last_result.is_empty() {
                println!("{}", last_result);
            }
            print_prompt()?;
            continue;
        }

        let expression = if starts_with_operator(input) && !last_result.is_empty() {
            format!("{}{}", last_result, input)
        } else {
            input.to_string()
        };

        let result = evaluate_logged(&expression);
        if result.is_nan() {
            eprintln!("invalid expression");
            last_result.clear();
        } else {
            last_result = format_result(result);
            println!("{}", last_result);
        }
        print_prompt()?;
    }
    Ok(())
}

fn starts_with_operator(input: &str) -> bool {
    matches!(input.chars().next(), Some('+' | '-' | '*' | '/' | '^'))
}

fn evaluate_logged(expression: &str) -> f64 {
    let tokens = lexer::tokenize(expression);
    log::debug!("tokens: {:?}", tokens);

    let postfix_tokens = infix_converter::infix_to_postfix(tokens);
    log::debug!(
        "postfix: {}",
        tokens_to_string(&postfix_tokens).unwrap_or_default()
    );

    match postfix_evaluator::evaluate_postfix(&postfix_tokens) {
        Ok(value) => value,
        Err(error) => {
            log::debug!("evaluation failed: {:#}", error);
            f64::NAN
        }
    }
}

fn print_prompt() -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}
