//! Floor-rounding integer division and modulo.
//!
//! The day-number formulas are only correct when every quotient rounds
//! toward negative infinity. Rust's `/` and `%` truncate toward zero, which
//! shifts results by one day for proleptic dates with negative years.

/// Integer division rounded toward negative infinity.
///
/// `mother` must be non-zero.
pub(crate) fn floor_div(child: i64, mother: i64) -> i64 {
    let q = child / mother;
    if (child % mother != 0) && ((child < 0) != (mother < 0)) {
        q - 1
    } else {
        q
    }
}

/// Remainder that is always in `0..|mother|`.
///
/// The sign of `mother` is ignored.
pub(crate) fn floor_mod(child: i64, mother: i64) -> i64 {
    child.rem_euclid(mother.abs())
}
