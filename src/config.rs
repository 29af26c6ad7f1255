use clap::ValueEnum;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::interpolate::{check_modulus, default_prime};

/// What to do when a share picked for recovery cannot be decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SharePolicy {
    /// Abort the whole recovery on the first bad share.
    #[default]
    FailFast,
    /// Drop the bad share and take the next index instead. Substituting a
    /// share changes which subset defines the polynomial.
    Skip,
}

/// Knobs for a recovery run.
///
/// Serializes as `{"policy": "fail-fast", "prime": "<decimal>"}`; missing
/// fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    pub policy: SharePolicy,
    /// Modulus of the field the interpolation runs in. Must be prime and
    /// larger than any secret that should come back unreduced.
    #[serde(with = "decimal_prime")]
    pub prime: BigUint,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        RecoveryConfig {
            policy: SharePolicy::default(),
            prime: default_prime(),
        }
    }
}

impl RecoveryConfig {
    pub fn with_policy(mut self, policy: SharePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_prime(mut self, prime: BigUint) -> Self {
        self.prime = prime;
        self
    }
}

/// Parses a decimal modulus and rejects values below 2.
pub fn parse_prime(text: &str) -> Result<BigUint, ConfigError> {
    let prime = BigUint::parse_bytes(text.trim().as_bytes(), 10)
        .ok_or_else(|| ConfigError::InvalidPrime(text.to_string()))?;
    check_modulus(&prime)?;
    Ok(prime)
}

mod decimal_prime {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(prime: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&prime.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_prime(&text).map_err(de::Error::custom)
    }
}
