//! Arithmetic expression evaluation for the Wumbo calculator.
//!
//! The only non-trivial part of a calculator is turning an expression
//! string into a number, so that pipeline is what this crate provides;
//! any front-end (graphical or terminal) is expected to collect the
//! string, call [`evaluator::evaluate`] and format or clear based on
//! the result.

pub mod evaluator;
