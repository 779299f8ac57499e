//! Integer arithmetic grammar
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := integer | '(' expression ')'
//! ```
//!
//! Precedence and left associativity come purely from the shape of the
//! grammar. Each level is a named unit struct so the three rules can refer to
//! each other; `factor` reaches back to `expression` through [`crate::lazy`].
//!
//! Internally every level yields `Option<i64>`: a subexpression that parses
//! but overflows or divides by zero is `None`, and the `None` flows up through
//! the enclosing folds. The public levels turn it into "no parse" so that an
//! arithmetic failure can never be mistaken for the end of the input.
//!
//! Recursion depth follows the parenthesis nesting of the input and is not
//! bounded here. [`crate::eval::Evaluator`] checks nesting before parsing.

pub mod operator;

use crate::ascii::number::integer::checked_integer;
use crate::between::between;
use crate::filter::FilterExt;
use crate::lazy::lazy;
use crate::many::many;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::{Parsed, Parser};
use crate::then::ThenExt;
use crate::utf8::char::is_char;

pub use operator::{Operator, operator};

/// `term (('+' | '-') term)*`
#[derive(Debug, Clone, Copy, Default)]
pub struct Expression;

/// `factor (('*' | '/') factor)*`
#[derive(Debug, Clone, Copy, Default)]
pub struct Term;

/// `integer | '(' expression ')'`
#[derive(Debug, Clone, Copy, Default)]
pub struct Factor;

/// Convenience function to create an Expression parser
pub fn expression() -> Expression {
    Expression
}

/// Convenience function to create a Term parser
pub fn term() -> Term {
    Term
}

/// Convenience function to create a Factor parser
pub fn factor() -> Factor {
    Factor
}

impl<'code> Parser<'code> for Expression {
    type Output = i64;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        log::trace!("expression: {:?}", input);
        Sum.filter_map(|value| value).parse(input)
    }
}

impl<'code> Parser<'code> for Term {
    type Output = i64;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        Product.filter_map(|value| value).parse(input)
    }
}

impl<'code> Parser<'code> for Factor {
    type Output = i64;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        Atom.filter_map(|value| value).parse(input)
    }
}

/// [`Expression`] with arithmetic failure kept as `None`
#[derive(Debug, Clone, Copy)]
struct Sum;

/// [`Term`] with arithmetic failure kept as `None`
#[derive(Debug, Clone, Copy)]
struct Product;

/// [`Factor`] with arithmetic failure kept as `None`
#[derive(Debug, Clone, Copy)]
struct Atom;

impl<'code> Parser<'code> for Sum {
    type Output = Option<i64>;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        chain_left(Product, "+-").parse(input)
    }
}

impl<'code> Parser<'code> for Product {
    type Output = Option<i64>;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        chain_left(Atom, "*/").parse(input)
    }
}

impl<'code> Parser<'code> for Atom {
    type Output = Option<i64>;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        checked_integer()
            .or(between(is_char('('), lazy(|| Sum), is_char(')')))
            .parse(input)
    }
}

/// One `unit`, then as many `(operator, unit)` pairs as match, folded left
///
/// A `None` operand, overflow or division by zero anywhere in the fold makes
/// the value `None`. The text is still consumed.
fn chain_left<U>(
    unit: U,
    symbols: &'static str,
) -> impl for<'code> Parser<'code, Output = Option<i64>>
where
    U: for<'code> Parser<'code, Output = Option<i64>> + Copy,
{
    unit.then(many(operator(symbols).then(unit)))
        .map(|(first, rest)| fold_left(first, rest))
}

fn fold_left(first: Option<i64>, rest: Vec<(Operator, Option<i64>)>) -> Option<i64> {
    rest.into_iter()
        .try_fold(first?, |acc, (op, value)| op.apply(acc, value?))
}
