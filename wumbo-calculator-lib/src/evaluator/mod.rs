pub mod infix_converter;
pub mod lexer;
pub mod operator;
pub mod postfix_evaluator;
pub mod token;

use crate::evaluator::operator::Operator;
use crate::evaluator::token::Token;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Evaluates the given arithmetic expression.
///
/// Every kind of failure collapses into the NaN sentinel: a malformed
/// expression, division by zero, or a domain error from
/// exponentiation. Callers distinguish failure from a legitimate
/// result with [`f64::is_nan`], which is all a calculator front-end
/// needs in order to decide between displaying and clearing.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression, or NaN.
///
/// # Examples
///
/// ```
/// use wumbo_calculator::evaluator::evaluate;
///
/// assert_eq!(evaluate("2+3*4"), 14.0);
/// assert!(evaluate("3+").is_nan());
/// ```
pub fn evaluate(expression: &str) -> f64 {
    match try_evaluate(expression) {
        Ok(value) => value,
        Err(_) => f64::NAN,
    }
}

/// Evaluates the given arithmetic expression, reporting failures as
/// errors instead of the NaN sentinel that [`evaluate`] uses.
///
/// Note that division by zero is not an error at this level: it yields
/// an `Ok(NaN)` result, which the arithmetic then propagates.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use wumbo_calculator::evaluator::try_evaluate;
///
/// let value = try_evaluate("(2+3)*4")?;
/// assert_eq!(value, 20.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn try_evaluate(expression: &str) -> Result<f64> {
    let tokens = lexer::tokenize(expression);
    let postfix_tokens = infix_converter::infix_to_postfix(tokens);
    postfix_evaluator::evaluate_postfix(&postfix_tokens)
        .with_context(|| format!("Failed to evaluate expression: {}", expression))
}

/// Formats an evaluation result with six significant digits, the way
/// the calculator display does.
///
/// The output is itself a valid expression, so a front-end can
/// substitute it back into the input buffer and let the next operation
/// chain off of the previous result.
///
/// # Arguments
///
/// * `value`: The value to format.
///
/// returns: The formatted value.
///
/// # Examples
///
/// ```
/// use wumbo_calculator::evaluator::format_result;
///
/// assert_eq!(format_result(14.0), "14");
/// assert_eq!(format_result(2.0 / 3.0), "0.666667");
/// ```
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let significant_digits: usize = 6;
    let exponential = format!("{:.*e}", significant_digits - 1, value);
    let exponent: i32 = exponential
        .split('e')
        .nth(1)
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0);
    if exponent < -4 || exponent >= significant_digits as i32 {
        let mantissa = exponential.split('e').next().unwrap_or(&exponential);
        format!("{}e{}", trim_trailing_zeros(mantissa), exponent)
    } else {
        let decimals = (significant_digits as i32 - 1 - exponent).max(0) as usize;
        trim_trailing_zeros(&format!("{:.*}", decimals, value))
    }
}

fn trim_trailing_zeros(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}

/// Pretty-prints the given tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use wumbo_calculator::evaluator::lexer::tokenize;
/// use wumbo_calculator::evaluator::tokens_to_string;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("1+2^3");
/// let pretty_printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(pretty_printed_tokens, "1 + 2^3");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Operator(operator) if *operator == Operator::Exponentiate => {
                builder.append(token.to_string())
            }
            Token::Operator(_) => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
    }

    builder.string().context("Failed to build token string")
}
