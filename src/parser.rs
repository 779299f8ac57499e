/// One way of reading a prefix of the input
///
/// `unparsed` always borrows a suffix of the string handed to the parser that
/// produced this result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsingResult<'code, T> {
    pub parsed: T,
    pub unparsed: &'code str,
}

impl<'code, T> ParsingResult<'code, T> {
    pub fn new(parsed: T, unparsed: &'code str) -> Self {
        ParsingResult { parsed, unparsed }
    }

    /// Transform the parsed value, keeping the remainder
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParsingResult<'code, U> {
        ParsingResult::new(f(self.parsed), self.unparsed)
    }
}

/// Every way a parser could read the input
///
/// An empty vector is the only failure signal. More than one element means the
/// input is ambiguous for that parser.
pub type Parsed<'code, T> = Vec<ParsingResult<'code, T>>;

/// Core parser trait for parser combinators
pub trait Parser<'code>: Sized {
    type Output;

    /// Run the parser on `input`
    ///
    /// Must be deterministic and must return (possibly empty) results for
    /// every input, including the empty string.
    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        (**self).parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::is_char;

    #[test]
    fn test_result_map_keeps_remainder() {
        let result = ParsingResult::new(2, "rest").map(|n| n * 21);
        assert_eq!(result, ParsingResult::new(42, "rest"));
    }

    #[test]
    fn test_reference_is_a_parser() {
        let parser = is_char('a');
        let by_ref = &parser;

        assert_eq!(by_ref.parse("ab"), parser.parse("ab"));
        assert_eq!(by_ref.parse("ab"), vec![ParsingResult::new('a', "b")]);
    }
}
