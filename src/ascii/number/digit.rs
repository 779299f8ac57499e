use crate::filter::FilterExt;
use crate::parser::Parser;
use crate::utf8::char::char;

/// Parser that matches a single ASCII digit (0-9) and returns its value
///
/// Decimal digits from other scripts are not accepted.
pub fn digit() -> impl for<'code> Parser<'code, Output = u32> {
    char().filter_map(|c| c.to_digit(10))
}
