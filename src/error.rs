use thiserror::Error;

/// Why an input could not be evaluated as a whole expression
///
/// The parsers themselves only ever report "no results"; this type is where
/// that outcome is turned into something a caller can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The expression parser produced no result at all
    #[error("invalid expression: {input:?}")]
    NoParse { input: String },

    /// A value was parsed but text was left over
    #[error("unexpected trailing input at byte offset {offset}: {remainder:?} (parsed value: {value})")]
    TrailingInput {
        value: i64,
        offset: usize,
        remainder: String,
    },

    /// Parentheses nest deeper than the evaluator allows
    #[error("expression nests {depth} parentheses deep, limit is {limit}")]
    TooDeep { depth: usize, limit: usize },
}

impl EvalError {
    /// Byte offset into the input where the problem starts, if there is one
    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::TrailingInput { offset, .. } => Some(*offset),
            EvalError::NoParse { .. } | EvalError::TooDeep { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_parse_display() {
        let error = EvalError::NoParse {
            input: "abc".to_string(),
        };

        assert_eq!(error.to_string(), "invalid expression: \"abc\"");
        assert_eq!(error.position(), None);
    }

    #[test]
    fn test_trailing_input_display() {
        let error = EvalError::TrailingInput {
            value: 3,
            offset: 3,
            remainder: "abcd".to_string(),
        };

        let display = error.to_string();
        assert!(display.contains("byte offset 3"));
        assert!(display.contains("\"abcd\""));
        assert!(display.contains("parsed value: 3"));
        assert_eq!(error.position(), Some(3));
    }

    #[test]
    fn test_too_deep_display() {
        let error = EvalError::TooDeep {
            depth: 300,
            limit: 256,
        };

        assert_eq!(
            error.to_string(),
            "expression nests 300 parentheses deep, limit is 256"
        );
    }
}
