use crate::evaluator::operator::{Associativity, Operator};
use crate::evaluator::token::Token;

/// Reorders the given infix tokens into postfix (Reverse Polish) order
/// using the shunting-yard algorithm.
///
/// Unbalanced parentheses are tolerated rather than reported: an
/// unmatched `)` just empties the operator stack, and unmatched `(`
/// tokens are dropped during the final flush, since no operator in the
/// output could ever consume them. An expression that was malformed in
/// this way still tends to fail later, when the postfix form does not
/// reduce to a single value.
pub fn infix_to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::OpenParenthesis => operators.push(token),
            Token::Operator(operator) => {
                pop_higher_precedence_operators(&mut operators, &mut output, operator);
                operators.push(token);
            }
            Token::CloseParenthesis => {
                pop_until_open_parenthesis(&mut operators, &mut output);
            }
        }
    }

    transfer_leftover_operators(&mut operators, &mut output);

    output
}

/// Pops operators that should be applied before the incoming one: any
/// with strictly greater precedence, and equal-precedence ones when the
/// incoming operator is left-associative. Equal-precedence chains of the
/// right-associative `^` are left on the stack, which is what groups
/// exponentiation right-to-left.
fn pop_higher_precedence_operators(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    incoming: Operator,
) {
    while let Some(&Token::Operator(top_of_stack)) = operators.last() {
        let applies_first = top_of_stack.precedence_gt(&incoming)
            || (top_of_stack.precedence_eq(&incoming)
                && incoming.associativity() == Associativity::Left);
        if !applies_first {
            break;
        }
        operators.pop();
        output.push(Token::Operator(top_of_stack));
    }
}

fn pop_until_open_parenthesis(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(token) = operators.pop() {
        if token == Token::OpenParenthesis {
            // Discard the open parenthesis.
            return;
        }
        output.push(token);
    }
    // No matching parenthesis was on the stack; the unbalanced input is
    // tolerated and the pop loop simply ends.
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(token) = operators.pop() {
        match token {
            Token::OpenParenthesis => {
                // An unmatched open parenthesis is not an operator, so
                // emitting it would only poison the output; drop it.
            }
            token => output.push(token),
        }
    }
}
