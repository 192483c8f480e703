//! Decimal digit palindromes.
//!
//! The check builds the full digit sequence and compares it against itself
//! from both ends. It is O(d) in time and space, not in-place.

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Decimal digits of `n`, least significant first.
///
/// `digits(0)` is `[0]`.
pub fn digits(mut n: u64) -> Vec<u8> {
    let mut digits = Vec::new();
    while n / 10 != 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits.push(n as u8);
    digits
}

/// Palindrome check for a value already known to be non-negative.
#[instrument(level = "trace")]
pub fn is_palindrome_unsigned(n: u64) -> bool {
    let digits = digits(n);
    let len = digits.len();
    for i in 0..len {
        if digits[i] != digits[len - 1 - i] {
            debug!(index = i, "digit mismatch");
            return false;
        }
    }
    true
}

/// Returns whether the decimal representation of `n` reads the same in both
/// directions.
///
/// Negative input is rejected with [`DomainError::NegativeNumber`].
#[instrument(level = "debug")]
pub fn is_palindrome(n: i64) -> DomainResult<bool> {
    let n = u64::try_from(n).map_err(|_| DomainError::NegativeNumber(n))?;
    Ok(is_palindrome_unsigned(n))
}

/// Human readable result line, e.g. `12321 is a palindrom.`
pub fn verdict(n: i64) -> DomainResult<String> {
    if is_palindrome(n)? {
        Ok(format!("{} is a palindrom.", n))
    } else {
        Ok(format!("{} is NOT a palindrom.", n))
    }
}
