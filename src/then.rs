use super::parser::{Parsed, Parser, ParsingResult};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Every result of the first parser is continued with the second parser on its
/// remainder, so ambiguous inputs produce the full cross product of readings
/// in order.
///
/// Note: When chaining multiple `.then()` calls, this produces nested tuples like
/// `((a, b), c)`. Use [`crate::plus::Plus`] to accumulate a flat list instead.
///
/// Example:
/// ```
/// use parsicalc::ascii::natural;
/// use parsicalc::then::ThenExt;
/// use parsicalc::utf8::is_char;
/// use parsicalc::Parser;
///
/// let results = natural().then(is_char('.')).then(natural()).parse("123.456");
/// let ((int_part, _), frac_part) = results[0].parsed;
/// assert_eq!(int_part, 123);
/// assert_eq!(frac_part, 456);
/// ```
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P1::Output: Clone,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        let mut results = Vec::new();
        for first in self.parser1.parse(input) {
            let mut seconds = self.parser2.parse(first.unparsed);
            let Some(last) = seconds.pop() else {
                continue;
            };
            for second in seconds {
                results.push(ParsingResult::new(
                    (first.parsed.clone(), second.parsed),
                    second.unparsed,
                ));
            }
            results.push(ParsingResult::new((first.parsed, last.parsed), last.unparsed));
        }
        results
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Then::new(parser1, parser2)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, other)
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}
