use crate::evaluator::token::Token;
use itertools::Itertools;
use std::iter::Peekable;
use std::str::Chars;

/// Splits the given expression into a sequence of tokens.
///
/// Tokenization is deliberately permissive: whitespace is skipped, and
/// so is any character that is neither part of a number, an operator
/// symbol nor a parenthesis. Strict validation is left to the later
/// pipeline stages, which is why this function cannot fail.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in source order.
///
/// # Examples
///
/// ```
/// use wumbo_calculator::evaluator::lexer::tokenize;
///
/// let tokens = tokenize("1 + 2.5");
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut characters = expression.chars().peekable();
    while let Some(&character) = characters.peek() {
        if character.is_whitespace() {
            characters.next();
        } else if character.is_ascii_digit() || character == '.' {
            let literal = scan_numeric_literal(&mut characters);
            // A literal the float parser rejects (a lone '.') has
            // already been consumed, so it is skipped like any other
            // unrecognized character.
            if let Ok(value) = literal.parse::<f64>() {
                tokens.push(Token::Number(value));
            }
        } else {
            if let Ok(token) = character.to_string().parse() {
                tokens.push(token);
            }
            characters.next();
        }
    }
    tokens
}

/// Consumes the maximal run of digits containing at most one decimal
/// point (a second point terminates the literal), plus any exponent
/// suffix that follows it.
fn scan_numeric_literal(characters: &mut Peekable<Chars>) -> String {
    let mut seen_decimal_point = false;
    let mut literal: String = characters
        .peeking_take_while(|&character| {
            if character.is_ascii_digit() {
                true
            } else if character == '.' && !seen_decimal_point {
                seen_decimal_point = true;
                true
            } else {
                false
            }
        })
        .collect();
    scan_exponent_suffix(characters, &mut literal);
    literal
}

/// Consumes an exponent suffix (`e`/`E`, an optional sign, digits)
/// when one follows the literal, matching what the float parser
/// accepts. Without this, a formatted result in scientific notation
/// would tokenize into two numbers instead of one, breaking the
/// chain-from-prior-result behavior.
fn scan_exponent_suffix(characters: &mut Peekable<Chars>, literal: &mut String) {
    let mut lookahead = characters.clone();
    let mut suffix = String::new();
    match lookahead.next() {
        Some(marker) if marker == 'e' || marker == 'E' => suffix.push(marker),
        _ => return,
    }
    if let Some(&sign) = lookahead.peek() {
        if sign == '+' || sign == '-' {
            lookahead.next();
            suffix.push(sign);
        }
    }
    let digits: String = lookahead.peeking_take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        // An `e` with no digits after it is not an exponent; leave it
        // for the main loop to skip.
        return;
    }
    suffix.push_str(&digits);
    // The suffix is all ASCII, so its length is its character count.
    for _ in 0..suffix.len() {
        characters.next();
    }
    literal.push_str(&suffix);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::operator::Operator;
    use pretty_assertions::assert_eq;

    #[test]
    fn expression_with_every_token_kind_tokenizes() {
        let actual = tokenize("(1 + 2.5) ^ 2");

        let expected = vec![
            Token::OpenParenthesis,
            Token::Number(1.0),
            Token::Operator(Operator::Add),
            Token::Number(2.5),
            Token::CloseParenthesis,
            Token::Operator(Operator::Exponentiate),
            Token::Number(2.0),
        ];
        assert_eq!(actual, expected)
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(tokenize("  1\t+\n2  "), tokenize("1+2"))
    }

    #[test]
    fn numeric_literal_is_maximal() {
        let actual = tokenize("12.25");

        assert_eq!(actual, vec![Token::Number(12.25)])
    }

    #[test]
    fn leading_decimal_point_literal_tokenizes() {
        let actual = tokenize(".5");

        assert_eq!(actual, vec![Token::Number(0.5)])
    }

    #[test]
    fn second_decimal_point_terminates_literal() {
        let actual = tokenize("1.2.3");

        assert_eq!(actual, vec![Token::Number(1.2), Token::Number(0.3)])
    }

    #[test]
    fn exponent_suffix_is_part_of_literal() {
        assert_eq!(tokenize("1.23457e7"), vec![Token::Number(12345700.0)]);
        assert_eq!(tokenize("2E3"), vec![Token::Number(2000.0)]);
        assert_eq!(tokenize("2e-3"), vec![Token::Number(0.002)]);
        assert_eq!(tokenize("2e+3"), vec![Token::Number(2000.0)]);
    }

    #[test]
    fn exponent_marker_without_digits_is_not_an_exponent() {
        // The dangling `e` is skipped like any unrecognized character,
        // and the `+` remains an operator.
        let actual = tokenize("2e + 1");

        let expected = vec![
            Token::Number(2.0),
            Token::Operator(Operator::Add),
            Token::Number(1.0),
        ];
        assert_eq!(actual, expected)
    }

    #[test]
    fn lone_decimal_point_is_skipped() {
        let actual = tokenize("1 . 2");

        assert_eq!(actual, vec![Token::Number(1.0), Token::Number(2.0)])
    }

    #[test]
    fn unrecognized_characters_are_skipped() {
        let actual = tokenize("1a + %2");

        let expected = vec![
            Token::Number(1.0),
            Token::Operator(Operator::Add),
            Token::Number(2.0),
        ];
        assert_eq!(actual, expected)
    }

    #[test]
    fn empty_expression_yields_no_tokens() {
        assert_eq!(tokenize(""), vec![])
    }
}
