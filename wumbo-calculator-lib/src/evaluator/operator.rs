use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Exponentiate => '^',
        }
    }

    pub(crate) fn associativity(&self) -> Associativity {
        match self {
            Operator::Add
            | Operator::Subtract
            | Operator::Multiply
            | Operator::Divide => Associativity::Left,
            Operator::Exponentiate => Associativity::Right,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 0,
            Operator::Multiply | Operator::Divide => 1,
            Operator::Exponentiate => 2,
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    /// Applies the operator to its two operands.
    ///
    /// Division by exactly zero yields NaN instead of an error, and
    /// exponentiation inherits the domain behavior of [`f64::powf`]
    /// (a negative base with a fractional exponent is also NaN).
    pub fn apply(&self, first_operand: f64, second_operand: f64) -> f64 {
        match self {
            Operator::Add => first_operand + second_operand,
            Operator::Subtract => first_operand - second_operand,
            Operator::Multiply => first_operand * second_operand,
            Operator::Divide => {
                if second_operand == 0.0 {
                    f64::NAN
                } else {
                    first_operand / second_operand
                }
            }
            Operator::Exponentiate => f64::powf(first_operand, second_operand),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
