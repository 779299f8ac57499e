use crate::parser::{Parsed, Parser, ParsingResult};

/// A parser combinator that also returns the slice of input each result consumed
///
/// Because every remainder is a suffix of the input, the consumed text is the
/// input with that suffix cut off, so `consumed + unparsed == input` always holds.
pub struct Consumed<P> {
    parser: P,
}

impl<P> Consumed<P> {
    pub fn new(parser: P) -> Self {
        Consumed { parser }
    }
}

impl<'code, P> Parser<'code> for Consumed<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, &'code str);

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        self.parser
            .parse(input)
            .into_iter()
            .map(|result| {
                let unparsed = result.unparsed;
                let text = &input[..input.len() - unparsed.len()];
                ParsingResult::new((result.parsed, text), unparsed)
            })
            .collect()
    }
}

/// Extension trait to capture consumed input on any parser
pub trait ConsumedExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture the text it consumed
    fn with_consumed(self) -> Consumed<Self> {
        Consumed::new(self)
    }
}

impl<'code, P> ConsumedExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Consumed combinator
pub fn consumed<P>(parser: P) -> Consumed<P> {
    Consumed::new(parser)
}
