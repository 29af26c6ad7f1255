//! Base-N decoding of share values.
//!
//! Digits are `0-9` followed by `a-z`, case-insensitive, so a digit's value is
//! its position in `0123456789abcdefghijklmnopqrstuvwxyz`. Every step of the
//! accumulation is done on a [`BigUint`], so values of any length decode
//! exactly.

use crate::error::DecodeError;
use num_bigint::BigUint;
use num_traits::Zero;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Decodes `value`, written most significant digit first in `base`.
///
/// # Errors
/// - [`DecodeError::InvalidBase`] if `base` is outside `2..=36`.
/// - [`DecodeError::Empty`] if `value` has no digits.
/// - [`DecodeError::InvalidDigit`] if a character is not in the alphabet or
///   its digit value is not below `base`.
pub fn decode(value: &str, base: u32) -> Result<BigUint, DecodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::InvalidBase(base));
    }
    if value.is_empty() {
        return Err(DecodeError::Empty);
    }

    let radix = BigUint::from(base);
    value
        .chars()
        .enumerate()
        .try_fold(BigUint::zero(), |acc, (position, character)| {
            match character.to_digit(MAX_BASE) {
                Some(digit) if digit < base => Ok(acc * &radix + digit),
                _ => Err(DecodeError::InvalidDigit {
                    character,
                    position,
                    base,
                }),
            }
        })
}
