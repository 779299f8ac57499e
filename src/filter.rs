use crate::parser::{Parsed, Parser, ParsingResult};

/// Parser that keeps only the results whose value satisfies a predicate
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, P, F, T> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        let mut results = self.parser.parse(input);
        results.retain(|result| (self.predicate)(&result.parsed));
        results
    }
}

/// Parser that maps every value through a fallible function
///
/// Results for which the function returns `None` are dropped, so a value that
/// cannot be represented turns into "no parse" rather than a panic.
pub struct FilterMapParser<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> FilterMapParser<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Self { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for FilterMapParser<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> Option<U>,
{
    type Output = U;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        self.parser
            .parse(input)
            .into_iter()
            .filter_map(|result| {
                let unparsed = result.unparsed;
                (self.mapper)(result.parsed).map(|parsed| ParsingResult::new(parsed, unparsed))
            })
            .collect()
    }
}

/// Extension trait to add filter methods to all parsers
pub trait FilterExt<'code>: Parser<'code> {
    fn filter<F>(self, predicate: F) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate)
    }

    fn filter_map<F, U>(self, mapper: F) -> FilterMapParser<Self, F>
    where
        F: Fn(Self::Output) -> Option<U>,
    {
        FilterMapParser::new(self, mapper)
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(parser: P, predicate: F) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate)
}

/// Convenience function to create a filter-mapped parser
pub fn filter_map<'code, P, F, U>(parser: P, mapper: F) -> FilterMapParser<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Option<U>,
{
    FilterMapParser::new(parser, mapper)
}
