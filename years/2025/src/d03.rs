//! Banks of batteries, where the joltage of a bank is the number formed by the
//! digits of the batteries that are turned on.

#[cfg(test)]
mod tests;

use lib::prelude::*;
use thiserror::Error;

/// Error raised by [max_joltage].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("bank has {len} batteries, but {count} should be turned on")]
    TooShort { len: usize, count: usize },
    #[error("bad battery {battery:?} at {index}")]
    NotDigit { index: usize, battery: char },
    #[error("joltage of {count} batteries overflows")]
    Overflow { count: usize },
}

/// Turn on exactly `count` batteries in `bank` to form the largest possible
/// joltage.
///
/// # Examples
///
/// ```
/// use y2025::d03::{max_joltage, BankError};
///
/// assert_eq!(max_joltage(b"987654321111111", 2), Ok(98));
/// assert_eq!(max_joltage(b"811111111111119", 2), Ok(89));
/// assert_eq!(max_joltage(b"234234234234278", 12), Ok(434234234278));
/// assert_eq!(max_joltage(b"12", 3), Err(BankError::TooShort { len: 2, count: 3 }));
/// ```
pub fn max_joltage(bank: &[u8], count: usize) -> Result<u64, BankError> {
    if let Some((index, &b)) = bank.iter().enumerate().find(|(_, b)| !b.is_ascii_digit()) {
        return Err(BankError::NotDigit {
            index,
            battery: char::from(b),
        });
    }

    if bank.len() < count {
        return Err(BankError::TooShort {
            len: bank.len(),
            count,
        });
    }

    let mut start = 0;
    let mut joltage = 0u64;

    for remaining in (0..count).rev() {
        // Leave enough batteries for the remaining picks.
        let window = &bank[start..bank.len() - remaining];

        let mut best = 0;

        for (n, &b) in window.iter().enumerate() {
            if b > window[best] {
                best = n;
            }
        }

        start += best + 1;

        joltage = joltage
            .checked_mul(10)
            .and_then(|j| j.checked_add(u64::from(window[best] - b'0')))
            .ok_or(BankError::Overflow { count })?;
    }

    Ok(joltage)
}

/// Sum the largest joltages of every bank, turning on two and twelve batteries
/// respectively.
pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut two = 0;
    let mut twelve = 0;

    while let Some(bank) = input.try_line::<&[u8]>()? {
        if bank.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        two += max_joltage(bank, 2).with_context(|| bank.as_bstr().to_string())?;
        twelve += max_joltage(bank, 12).with_context(|| bank.as_bstr().to_string())?;
    }

    Ok((two, twelve))
}
