use crate::arithmetic::expression;
use crate::error::EvalError;
use crate::parser::Parser;

/// Default maximum parenthesis nesting accepted by [`Evaluator`]
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Evaluates whole inputs with the arithmetic grammar
///
/// This is the boundary between the parsers, where failure is an empty result
/// list, and callers that want a value or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    max_depth: usize,
    allow_trailing: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing: false,
        }
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inputs whose parentheses nest deeper than `max_depth`
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Accept a value even when input is left unparsed after it
    pub fn allow_trailing(mut self, allow_trailing: bool) -> Self {
        self.allow_trailing = allow_trailing;
        self
    }

    pub fn evaluate(&self, input: &str) -> Result<i64, EvalError> {
        let depth = nesting_depth(input);
        if depth > self.max_depth {
            log::debug!("rejecting input nested {} deep", depth);
            return Err(EvalError::TooDeep {
                depth,
                limit: self.max_depth,
            });
        }

        // The grammar is unambiguous, so at most one result comes back
        let Some(result) = expression().parse(input).into_iter().next() else {
            log::debug!("no parse for {:?}", input);
            return Err(EvalError::NoParse {
                input: input.to_string(),
            });
        };

        if !result.unparsed.is_empty() && !self.allow_trailing {
            let offset = input.len() - result.unparsed.len();
            log::debug!("parsed {} but {:?} is left over", result.parsed, result.unparsed);
            return Err(EvalError::TrailingInput {
                value: result.parsed,
                offset,
                remainder: result.unparsed.to_string(),
            });
        }

        log::trace!("{:?} = {}", input, result.parsed);
        Ok(result.parsed)
    }
}

/// Evaluate `input` with the default [`Evaluator`]
pub fn evaluate(input: &str) -> Result<i64, EvalError> {
    Evaluator::default().evaluate(input)
}

/// Deepest run of unclosed `(` anywhere in `input`
///
/// Unmatched `)` never lower the count below zero. This over-approximates how
/// deep the parser will recurse, which is what the limit needs.
pub fn nesting_depth(input: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    for ch in input.chars() {
        match ch {
            '(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}
