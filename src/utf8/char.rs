use crate::parser::{Parsed, Parser, ParsingResult};
use std::borrow::Cow;

/// Parser that consumes and returns a single character
pub struct CharParser;

impl<'code> Parser<'code> for CharParser {
    type Output = char;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        let mut chars = input.chars();
        match chars.next() {
            Some(ch) => vec![ParsingResult::new(ch, chars.as_str())],
            None => Vec::new(),
        }
    }
}

/// Convenience function to create a CharParser
pub fn char() -> CharParser {
    CharParser
}

/// Parser that matches a specific character
pub struct IsChar(char);

impl<'code> Parser<'code> for IsChar {
    type Output = char;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        match input.strip_prefix(self.0) {
            Some(rest) => vec![ParsingResult::new(self.0, rest)],
            None => Vec::new(),
        }
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: char) -> IsChar {
    IsChar(expected)
}

/// Parser that matches any character from a set
///
/// The set is given as a string; order and duplicates do not matter.
pub struct OneOf {
    allowed: Cow<'static, str>,
}

impl OneOf {
    pub fn new(allowed: impl Into<Cow<'static, str>>) -> Self {
        OneOf {
            allowed: allowed.into(),
        }
    }
}

impl<'code> Parser<'code> for OneOf {
    type Output = char;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        let mut results = char().parse(input);
        results.retain(|result| self.allowed.contains(result.parsed));
        results
    }
}

/// Convenience function to create a parser for one character out of `allowed`
pub fn one_of(allowed: impl Into<Cow<'static, str>>) -> OneOf {
    OneOf::new(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_char() {
        let parser = char();

        let results = parser.parse("hello");
        assert_eq!(results, vec![ParsingResult::new('h', "ello")]);

        let results = parser.parse(results[0].unparsed);
        assert_eq!(results, vec![ParsingResult::new('e', "llo")]);
    }

    #[test]
    fn test_unicode_chars() {
        // Swedish characters (2-byte UTF-8)
        let parser = char();

        let results = parser.parse("åäö");
        assert_eq!(results, vec![ParsingResult::new('å', "äö")]);

        let results = parser.parse(results[0].unparsed);
        assert_eq!(results, vec![ParsingResult::new('ä', "ö")]);
    }

    #[test]
    fn test_emoji() {
        let results = char().parse("🚀!");
        assert_eq!(results, vec![ParsingResult::new('🚀', "!")]);
    }

    #[test]
    fn test_char_empty_input() {
        assert!(char().parse("").is_empty());
    }

    #[test]
    fn test_is_char_match() {
        let results = is_char('(').parse("(1)");
        assert_eq!(results, vec![ParsingResult::new('(', "1)")]);
    }

    #[test]
    fn test_is_char_mismatch() {
        assert!(is_char('(').parse(")1(").is_empty());
        assert!(is_char('(').parse("").is_empty());
    }

    #[test]
    fn test_one_of_members() {
        let parser = one_of("+-");

        assert_eq!(parser.parse("+1"), vec![ParsingResult::new('+', "1")]);
        assert_eq!(parser.parse("-1"), vec![ParsingResult::new('-', "1")]);
    }

    #[test]
    fn test_one_of_non_member() {
        let parser = one_of("+-");

        assert!(parser.parse("*1").is_empty());
        assert!(parser.parse("1").is_empty());
        assert!(parser.parse("").is_empty());
    }

    #[test]
    fn test_one_of_owned_set() {
        let allowed: String = ['x', 'ß'].iter().collect();
        let parser = one_of(allowed);

        assert_eq!(parser.parse("ßa"), vec![ParsingResult::new('ß', "a")]);
        assert!(parser.parse("s").is_empty());
    }

    #[test]
    fn test_one_of_empty_set_never_matches() {
        assert!(one_of("").parse("a").is_empty());
    }
}
