use super::natural::checked_natural;
use crate::filter::FilterExt;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::then::ThenExt;
use crate::utf8::char::one_of;

/// Parser that matches ASCII integer numbers (optionally signed)
///
/// A leading `+` or `-` is always tried first; without one the digits are read
/// as a plain natural number. Values outside the `i64` range yield no result.
pub fn integer() -> impl for<'code> Parser<'code, Output = i64> {
    checked_integer().filter_map(|value| value)
}

/// Like [`integer`], but an out-of-range literal is still consumed and
/// reported as `None`
pub(crate) fn checked_integer() -> impl for<'code> Parser<'code, Output = Option<i64>> {
    one_of("+-")
        .then(checked_natural())
        .map(|(sign, magnitude)| magnitude.and_then(|m| apply_sign(sign, m)))
        .or(checked_natural().map(|magnitude| magnitude.and_then(|m| i64::try_from(m).ok())))
}

fn apply_sign(sign: char, magnitude: u64) -> Option<i64> {
    match sign {
        // Goes through zero so that i64::MIN is reachable
        '-' => 0i64.checked_sub_unsigned(magnitude),
        _ => i64::try_from(magnitude).ok(),
    }
}
