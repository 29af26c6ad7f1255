use num_bigint::BigUint;
use std::collections::BTreeMap;

use crate::decode::decode;
use crate::error::RecoveryError;

/// A recovered secret: the constant term of the share polynomial, reduced
/// modulo the prime.
pub type Secret = BigUint;

/// One participant's share as it arrives from input data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    /// Share index, used as the x-coordinate. Always at least 1.
    pub index: u64,
    /// Radix of `value`, expected in `2..=36`.
    pub base: u32,
    /// The y-coordinate, written in `base`.
    pub value: String,
}

impl Share {
    pub fn new(index: u64, base: u32, value: impl Into<String>) -> Self {
        Share {
            index,
            base,
            value: value.into(),
        }
    }

    /// Decodes the share into a point, tagging any failure with this share's index.
    pub fn to_point(&self) -> Result<Point, RecoveryError> {
        let y = decode(&self.value, self.base).map_err(|source| RecoveryError::Share {
            index: self.index,
            source,
        })?;
        Ok(Point { x: self.index, y })
    }
}

/// A decoded share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u64,
    pub y: BigUint,
}

impl Point {
    pub fn new(x: u64, y: impl Into<BigUint>) -> Self {
        Point { x, y: y.into() }
    }
}

/// Everything needed to recover one secret.
///
/// `shares` is keyed by index, so iteration is in ascending numeric order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecoveryRequest {
    /// Number of shares originally issued (`n`). Advisory only.
    pub total_shares: usize,
    /// Number of shares needed to recover the secret (`k`).
    pub threshold: usize,
    pub shares: BTreeMap<u64, Share>,
}

impl RecoveryRequest {
    pub fn new(total_shares: usize, threshold: usize) -> Self {
        RecoveryRequest {
            total_shares,
            threshold,
            shares: BTreeMap::new(),
        }
    }

    /// Adds a share, replacing any earlier share with the same index.
    pub fn with_share(mut self, share: Share) -> Self {
        self.shares.insert(share.index, share);
        self
    }
}
