use super::parser::{Parsed, Parser, ParsingResult};

/// Sequencing that appends to a list instead of nesting pairs
///
/// The first parser already yields a `Vec<T>` (typically from [`crate::some`],
/// [`crate::many`] or an earlier `plus`); the second parser's value is pushed
/// onto its end. Chaining `a.plus(b).plus(c)` therefore yields `[.., b, c]`
/// rather than `(([..], b), c)`. Ambiguity is handled exactly like
/// [`crate::then::Then`].
pub struct Plus<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Plus<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Plus { parser1, parser2 }
    }
}

impl<'code, P1, P2, T> Parser<'code> for Plus<P1, P2>
where
    P1: Parser<'code, Output = Vec<T>>,
    P2: Parser<'code, Output = T>,
    T: Clone,
{
    type Output = Vec<T>;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        let mut results = Vec::new();
        for first in self.parser1.parse(input) {
            let mut seconds = self.parser2.parse(first.unparsed);
            let Some(last) = seconds.pop() else {
                continue;
            };
            for second in seconds {
                let mut items = first.parsed.clone();
                items.push(second.parsed);
                results.push(ParsingResult::new(items, second.unparsed));
            }
            let mut items = first.parsed;
            items.push(last.parsed);
            results.push(ParsingResult::new(items, last.unparsed));
        }
        results
    }
}

/// Convenience function to create a Plus parser
pub fn plus<'code, P1, P2, T>(parser1: P1, parser2: P2) -> Plus<P1, P2>
where
    P1: Parser<'code, Output = Vec<T>>,
    P2: Parser<'code, Output = T>,
{
    Plus::new(parser1, parser2)
}

/// Extension trait to add .plus() to list-producing parsers
pub trait PlusExt<'code, T>: Parser<'code, Output = Vec<T>> + Sized {
    fn plus<P>(self, other: P) -> Plus<Self, P>
    where
        P: Parser<'code, Output = T>,
    {
        Plus::new(self, other)
    }
}

impl<'code, P, T> PlusExt<'code, T> for P where P: Parser<'code, Output = Vec<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit;
    use crate::many::many;
    use crate::map::MapExt;
    use crate::then::tests::OneOrTwo;
    use crate::utf8::char::{char, is_char};

    #[test]
    fn test_plus_flat_list() {
        let parser = is_char('a').map(|c| vec![c]).plus(is_char('b')).plus(is_char('c'));

        assert_eq!(parser.parse("abcd"), vec![ParsingResult::new(vec!['a', 'b', 'c'], "d")]);
    }

    #[test]
    fn test_plus_after_repetition() {
        let parser = many(digit()).plus(digit().map(|d| d * 100));

        // `many` is greedy and leaves nothing for the trailing digit
        assert!(parser.parse("123").is_empty());

        let parser = many(is_char('x')).plus(char());
        assert_eq!(parser.parse("xxy!"), vec![ParsingResult::new(vec!['x', 'x', 'y'], "!")]);
    }

    #[test]
    fn test_plus_failure_is_absorbing() {
        let parser = plus(is_char('a').map(|c| vec![c]), is_char('b'));

        assert!(parser.parse("ac").is_empty());
        assert!(parser.parse("bb").is_empty());
        assert!(parser.parse("").is_empty());
    }

    #[test]
    fn test_plus_cross_product() {
        let parser = OneOrTwo.map(|s| vec![s]).plus(OneOrTwo);

        assert_eq!(
            parser.parse("abc"),
            vec![
                ParsingResult::new(vec!["a", "b"], "c"),
                ParsingResult::new(vec!["a", "bc"], ""),
                ParsingResult::new(vec!["ab", "c"], ""),
            ]
        );
    }
}
