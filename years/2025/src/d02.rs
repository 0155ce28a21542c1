//! Invalid product ids, made up of a sequence of digits repeated several
//! times.
//!
//! Ids are never enumerated. An id with `len` digits made out of a pattern of
//! `period` digits is the pattern multiplied by `1 0..01 0..01` and so on, so
//! the ids in a range are an arithmetic series over the patterns.


use core::ops::RangeInclusive;

use lib::prelude::*;

/// Largest number of digits an id can have.
const MAX_DIGITS: u32 = 20;

/// Sum the ids in `range` whose digits are some sequence repeated exactly
/// twice.
///
/// # Examples
///
/// ```
/// use y2025::d02::sum_doubled;
///
/// assert_eq!(sum_doubled(&(11..=22)), 11 + 22);
/// assert_eq!(sum_doubled(&(1188511880..=1188511890)), 1188511885);
/// assert_eq!(sum_doubled(&(1698522..=1698528)), 0);
/// ```
pub fn sum_doubled(range: &RangeInclusive<u64>) -> u128 {
    (2..=MAX_DIGITS)
        .step_by(2)
        .map(|len| periodic_sum(range, len, len / 2))
        .sum()
}

/// Sum the ids in `range` whose digits are some sequence repeated at least
/// twice. An id with several periods, like `1111`, is only counted once.
///
/// # Examples
///
/// ```
/// use y2025::d02::sum_repeated;
///
/// assert_eq!(sum_repeated(&(95..=115)), 99 + 111);
/// assert_eq!(sum_repeated(&(1111..=1111)), 1111);
/// assert_eq!(sum_repeated(&(824824821..=824824827)), 824824824);
/// ```
pub fn sum_repeated(range: &RangeInclusive<u64>) -> u128 {
    let mut sum = 0i128;

    for len in 2..=MAX_DIGITS {
        // Ids with period `d` also have every period that `d` divides, so the
        // union over all proper periods is built through inclusion-exclusion
        // with the Möbius function.
        for period in (1..len).filter(|period| len % period == 0) {
            let sign = -i128::from(mobius(len / period));

            if sign != 0 {
                sum += sign * periodic_sum(range, len, period) as i128;
            }
        }
    }

    sum.unsigned_abs()
}

/// Sum the ids in `range` which have `len` digits and repeat a pattern of
/// `period` digits.
fn periodic_sum(range: &RangeInclusive<u64>, len: u32, period: u32) -> u128 {
    let multiplier = (10u128.pow(len) - 1) / (10u128.pow(period) - 1);

    // Patterns can't have leading zeros.
    let first = u128::from(*range.start())
        .div_ceil(multiplier)
        .max(10u128.pow(period - 1));

    let last = (u128::from(*range.end()) / multiplier).min(10u128.pow(period) - 1);

    if first > last {
        return 0;
    }

    multiplier * (first + last) * (last - first + 1) / 2
}

/// The Möbius function for small `n`.
fn mobius(mut n: u32) -> i8 {
    let mut sign = 1;
    let mut p = 2;

    while p * p <= n {
        if n % p == 0 {
            n /= p;

            if n % p == 0 {
                return 0;
            }

            sign = -sign;
        }

        p += 1;
    }

    if n > 1 {
        sign = -sign;
    }

    sign
}

/// Sum the doubled ids, and the repeated ids, over all ranges.
pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut doubled = 0u128;
    let mut repeated = 0u128;

    for range in input.iter::<Delimited<',', Range<'-', u64>>>() {
        let Delimited(Range(range)) = range?;
        log::trace!("{range:?}");
        doubled += sum_doubled(&range);
        repeated += sum_repeated(&range);
    }

    let doubled = u64::try_from(doubled).context("sum of doubled ids overflows")?;
    let repeated = u64::try_from(repeated).context("sum of repeated ids overflows")?;
    Ok((doubled, repeated))
}
