// src/core/sizing.rs
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::models::ResolvedSizing;

/// Accepted password lengths, in characters.
pub const LENGTH_RANGE: RangeInclusive<usize> = 7..=40;

/// Accepted password entropy targets, in bits.
pub const ENTROPY_RANGE: RangeInclusive<u32> = 40..=256;

// Defaults applied when neither length nor entropy is requested. They are a
// fixed pair, not derived from one another: floor(15 * log2(94)) would be 98.
pub const DEFAULT_LENGTH: usize = 15;
pub const DEFAULT_ENTROPY_BITS: u32 = 96;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizingError {
    #[error("{0} is not a valid password length (expected 7-40)")]
    InvalidLength(usize),

    #[error("{0} is not a valid password entropy value (expected 40-256 bits)")]
    InvalidEntropy(u32),

    #[error("length and entropy cannot be requested together")]
    ConflictingOptions,
}

pub type Result<T> = std::result::Result<T, SizingError>;

/// Resolves the (length, entropy) pair for one run.
///
/// Exactly one of `length` and `entropy` may be requested; the other value is
/// derived from the alphabet size. Requesting neither selects the defaults.
/// Validation happens here rather than in the argument parser, so the rules
/// hold for any caller.
///
/// `bits_per_char` is rounded half away from zero (`f64::round`): a resolved
/// pair of 52 bits over 8 characters reports 7 bits per character.
pub fn resolve(
    length: Option<usize>,
    entropy: Option<u32>,
    alphabet_size: usize,
) -> Result<ResolvedSizing> {
    let bits_per_symbol = (alphabet_size as f64).log2();

    let (length, entropy_bits) = match (length, entropy) {
        (Some(_), Some(_)) => return Err(SizingError::ConflictingOptions),
        (Some(length), None) => {
            if !LENGTH_RANGE.contains(&length) {
                return Err(SizingError::InvalidLength(length));
            }
            (length, (length as f64 * bits_per_symbol).floor() as u32)
        }
        (None, Some(entropy)) => {
            if !ENTROPY_RANGE.contains(&entropy) {
                return Err(SizingError::InvalidEntropy(entropy));
            }
            ((f64::from(entropy) / bits_per_symbol).ceil() as usize, entropy)
        }
        (None, None) => (DEFAULT_LENGTH, DEFAULT_ENTROPY_BITS),
    };

    let bits_per_char = (entropy_bits as f64 / length as f64).round() as u32;

    Ok(ResolvedSizing { length, entropy_bits, bits_per_char })
}
