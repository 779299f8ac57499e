use super::digit::digit;
use crate::filter::FilterExt;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::some::some;

/// Parser that matches one or more ASCII digits and returns them as a u64
///
/// Leading zeros are accepted. A run of digits too large for `u64` is not a
/// number this parser can produce, so it yields no result.
pub fn natural() -> impl for<'code> Parser<'code, Output = u64> {
    checked_natural().filter_map(|value| value)
}

/// Like [`natural`], but a run of digits too large for `u64` is still consumed
/// and reported as `None`
pub(crate) fn checked_natural() -> impl for<'code> Parser<'code, Output = Option<u64>> {
    some(digit()).map(place_value)
}

/// Fold digits, most significant first, into a single value
fn place_value(digits: Vec<u32>) -> Option<u64> {
    digits
        .into_iter()
        .try_fold(0u64, |acc, d| acc.checked_mul(10)?.checked_add(u64::from(d)))
}
