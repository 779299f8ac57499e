use super::many::repeat;
use super::parser::{Parsed, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Repetition is greedy and never backtracks: only the first result of the
/// inner parser is followed at each step, and exactly one result is produced.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'code, P> Parser<'code> for Some<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        let result = repeat(&self.parser, input);

        // Zero matches is a failed parse, never an empty list
        if result.parsed.is_empty() {
            Vec::new()
        } else {
            vec![result]
        }
    }
}

/// Convenience function to create a Some parser
pub fn some<'code, P>(parser: P) -> Some<P>
where
    P: Parser<'code>,
{
    Some::new(parser)
}
