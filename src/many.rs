use super::parser::{Parsed, Parser, ParsingResult};

/// Run `parser` repeatedly, committing to its first result at every step
///
/// Returns the collected values and the remainder at the point where `parser`
/// stopped matching. A step that consumes nothing counts as a failed step, so
/// parsers that can match the empty string do not loop forever.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    input: &'code str,
) -> ParsingResult<'code, Vec<P::Output>>
where
    P: Parser<'code>,
{
    let mut items = Vec::new();
    let mut rest = input;

    while let Some(step) = parser.parse(rest).into_iter().next() {
        if step.unparsed.len() >= rest.len() {
            break;
        }
        items.push(step.parsed);
        rest = step.unparsed;
    }

    ParsingResult::new(items, rest)
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Always succeeds with exactly one result; see [`crate::some::Some`] for the
/// repetition rules.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        vec![repeat(&self.parser, input)]
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
