use crate::evaluator::token::Token;
use anyhow::{bail, Context, Result};

/// Reduces the given postfix tokens to a single value using an operand
/// stack.
///
/// # Arguments
///
/// * `tokens`: Tokens, ordered in postfix notation, to reduce.
///
/// returns: The value of the expression, or an error when the tokens do
/// not describe a well-formed expression.
pub fn evaluate_postfix(tokens: &[Token]) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(value) => operands.push(*value),
            Token::Operator(operator) => {
                let second_operand = operands
                    .pop()
                    .with_context(|| format!("Operator '{}' is missing its second operand", operator))?;
                let first_operand = operands
                    .pop()
                    .with_context(|| format!("Operator '{}' is missing its first operand", operator))?;
                operands.push(operator.apply(first_operand, second_operand));
            }
            Token::OpenParenthesis | Token::CloseParenthesis => {
                bail!("There should not be any parenthesis present in the input")
            }
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        [] => bail!("Expression reduced to no value at all"),
        _ => bail!("Expression reduced to more than one value"),
    }
}
