//! # ParsiCalc - Parser Combinators and an Arithmetic Evaluator
//!
//! A small parser combinator library over `&str`, and an integer arithmetic
//! grammar built from it.
//!
//! A parser maps an input to every way it can read a prefix of it: a list of
//! [`ParsingResult`]s, each holding the parsed value and the unparsed rest of
//! the input. An empty list is the only failure signal. The library emphasizes:
//!
//! - **Zero panics**: Failure is an ordinary, empty return value
//! - **Composability**: Small parsers combine into larger ones using combinators
//! - **Ambiguity support**: Sequencing forms the full cross product of readings
//!
//! ```
//! use parsicalc::Parser;
//! use parsicalc::arithmetic::expression;
//!
//! let results = expression().parse("(2+(3+2*4+(5*2)+2)*5)");
//! assert_eq!(results[0].parsed, 117);
//! assert_eq!(results[0].unparsed, "");
//! ```

pub mod arithmetic;
pub mod ascii;
pub mod between;
pub mod consumed;
pub mod error;
pub mod eval;
pub mod filter;
pub mod lazy;
pub mod many;
pub mod map;
pub mod or;
pub mod parser;
pub mod plus;
pub mod some;
pub mod then;
pub mod utf8;

pub use between::between;
pub use consumed::{ConsumedExt, consumed};
pub use error::EvalError;
pub use eval::{Evaluator, evaluate};
pub use filter::{FilterExt, filter, filter_map};
pub use lazy::lazy;
pub use many::many;
pub use map::{MapExt, map};
pub use or::{OrExt, or};
pub use parser::{Parsed, Parser, ParsingResult};
pub use plus::{PlusExt, plus};
pub use some::some;
pub use then::{ThenExt, then};
