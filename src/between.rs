use crate::parser::{Parsed, Parser, ParsingResult};

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
/// No whitespace is skipped around any of the three parts.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P2::Output: Clone,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, input: &'code str) -> Parsed<'code, Self::Output> {
        let mut results = Vec::new();
        for open in self.open.parse(input) {
            for content in self.content.parse(open.unparsed) {
                let mut closes = self.close.parse(content.unparsed);
                let Some(last) = closes.pop() else {
                    continue;
                };
                for close in closes {
                    results.push(ParsingResult::new(content.parsed.clone(), close.unparsed));
                }
                results.push(ParsingResult::new(content.parsed, last.unparsed));
            }
        }
        results
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{integer, natural};
    use crate::some::some;
    use crate::utf8::char::is_char;
    use crate::utf8::letter;

    #[test]
    fn test_brackets_number() {
        let parser = between(is_char('['), integer(), is_char(']'));

        assert_eq!(parser.parse("[-42]"), vec![ParsingResult::new(-42, "")]);
    }

    #[test]
    fn test_parentheses_word() {
        let parser = between(is_char('('), some(letter()), is_char(')'));

        assert_eq!(
            parser.parse("(hello)"),
            vec![ParsingResult::new(vec!['h', 'e', 'l', 'l', 'o'], "")]
        );
    }

    #[test]
    fn test_missing_open_delimiter_fails() {
        let parser = between(is_char('['), natural(), is_char(']'));

        assert!(parser.parse("42]").is_empty());
    }

    #[test]
    fn test_missing_close_delimiter_fails() {
        let parser = between(is_char('['), natural(), is_char(']'));

        assert!(parser.parse("[42").is_empty());
        assert!(parser.parse("[42)").is_empty());
    }

    #[test]
    fn test_empty_content_fails() {
        let parser = between(is_char('['), natural(), is_char(']'));

        assert!(parser.parse("[]").is_empty());
    }

    #[test]
    fn test_with_remaining_content() {
        let parser = between(is_char('['), natural(), is_char(']'));

        assert_eq!(parser.parse("[42] extra"), vec![ParsingResult::new(42, " extra")]);
    }
}
