use crate::evaluator::operator::Operator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    OpenParenthesis,
    CloseParenthesis,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Operator(Operator::Add)),
            "-" => Ok(Token::Operator(Operator::Subtract)),
            "*" => Ok(Token::Operator(Operator::Multiply)),
            "/" => Ok(Token::Operator(Operator::Divide)),
            "^" => Ok(Token::Operator(Operator::Exponentiate)),
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            input => input.parse::<f64>().map(Token::Number).map_err(|_| ()),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols_parse_into_operator_tokens() {
        assert_eq!("+".parse(), Ok(Token::Operator(Operator::Add)));
        assert_eq!("-".parse(), Ok(Token::Operator(Operator::Subtract)));
        assert_eq!("*".parse(), Ok(Token::Operator(Operator::Multiply)));
        assert_eq!("/".parse(), Ok(Token::Operator(Operator::Divide)));
        assert_eq!("^".parse(), Ok(Token::Operator(Operator::Exponentiate)));
    }

    #[test]
    fn parentheses_parse_into_parenthesis_tokens() {
        assert_eq!("(".parse(), Ok(Token::OpenParenthesis));
        assert_eq!(")".parse(), Ok(Token::CloseParenthesis));
    }

    #[test]
    fn numeric_text_parses_into_number_token() {
        assert_eq!("42".parse(), Ok(Token::Number(42.0)));
        assert_eq!("1.5".parse(), Ok(Token::Number(1.5)));
        assert_eq!(".5".parse(), Ok(Token::Number(0.5)));
    }

    #[test]
    fn unrecognized_text_does_not_parse() {
        assert_eq!("x".parse::<Token>(), Err(()));
        assert_eq!("".parse::<Token>(), Err(()));
    }
}
