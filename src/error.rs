use num_bigint::BigUint;
use thiserror::Error;

/// Failure to decode a single base-N value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid base {0}, expected 2..=36")]
    InvalidBase(u32),

    #[error("invalid digit '{character}' at position {position} for base {base}")]
    InvalidDigit {
        character: char,
        position: usize,
        base: u32,
    },

    #[error("empty value")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    #[error("invalid modulus {0}: must be a prime of at least 2")]
    InvalidModulus(BigUint),

    #[error("no points to interpolate")]
    NoPoints,

    #[error("duplicate x coordinate {x}")]
    DuplicateX { x: u64 },

    /// The Lagrange denominator for `x` has no inverse. This only happens
    /// when the modulus is not prime or two x values collide modulo it.
    #[error("denominator for x = {x} is not invertible modulo the prime")]
    NotInvertible { x: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    #[error("invalid threshold {0}: at least one share is required")]
    InvalidThreshold(usize),

    #[error("share {index}: {source}")]
    Share {
        index: u64,
        #[source]
        source: DecodeError,
    },

    #[error("insufficient shares: need {needed}, have {available}")]
    InsufficientShares { needed: usize, available: usize },

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

impl RecoveryError {
    /// Index of the share that caused the failure, for share-level errors.
    pub fn share_index(&self) -> Option<u64> {
        match self {
            RecoveryError::Share { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Errors raised while building a [`RecoveryConfig`](crate::RecoveryConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("prime {0:?} is not a decimal integer")]
    InvalidPrime(String),

    #[error(transparent)]
    Modulus(#[from] InterpolationError),
}

/// Errors raised while turning a JSON document into a request.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid share index {0:?}, expected a positive integer")]
    InvalidIndex(String),

    #[error("share index {0} appears more than once")]
    DuplicateIndex(u64),

    #[error("share {index}: base {base:?} is not an integer")]
    InvalidBase { index: u64, base: String },
}
