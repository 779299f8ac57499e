use crate::filter::FilterExt;
use crate::parser::Parser;
use crate::utf8::char::char;

/// Parser for a single letter, using the Unicode `Alphabetic` property
///
/// Letters outside ASCII (`é`, `Ω`, `中`) are accepted.
pub fn letter() -> impl for<'code> Parser<'code, Output = char> {
    char().filter(|c| c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsingResult;

    #[test]
    fn test_ascii_letters() {
        for letter_char in ('a'..='z').chain('A'..='Z') {
            let input = format!("{}1", letter_char);
            let results = letter().parse(&input);

            assert_eq!(
                results,
                vec![ParsingResult::new(letter_char, "1")],
                "Failed for ASCII letter: {}",
                letter_char
            );
        }
    }

    #[test]
    fn test_non_ascii_letters() {
        let test_cases = [
            // Latin-1 and Latin Extended-A
            ("é", 'é'),
            ("Ñ", 'Ñ'),
            ("ß", 'ß'),
            ("Ž", 'Ž'),
            // Greek
            ("Ω", 'Ω'),
            ("λ", 'λ'),
            // Cyrillic
            ("Ж", 'Ж'),
            // CJK ideograph
            ("中", '中'),
        ];

        for (input, expected) in test_cases {
            let results = letter().parse(input);
            assert_eq!(
                results,
                vec![ParsingResult::new(expected, "")],
                "Failed for letter: {} (U+{:04X})",
                input,
                expected as u32
            );
        }
    }

    #[test]
    fn test_non_letters_fail() {
        let non_letters = ["1", "!", " ", "\t", "_", "٣", "🚀", "+"];

        for input in non_letters {
            assert!(
                letter().parse(input).is_empty(),
                "Expected no parse for non-letter: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(letter().parse("").is_empty());
    }
}
