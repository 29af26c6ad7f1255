//! Recovery of Shamir-shared secrets from base-encoded shares.
//!
//! Each share is an `(index, base, value)` triple. Values are decoded into
//! exact big integers and the secret is recovered by Lagrange interpolation
//! at `x = 0` modulo a large prime.

pub mod config;
pub mod decode;
pub mod error;
pub mod input;
pub mod interpolate;
pub mod recover;
pub mod types;

pub use config::{parse_prime, RecoveryConfig, SharePolicy};
pub use decode::decode;
pub use error::{ConfigError, DecodeError, InputError, InterpolationError, RecoveryError};
pub use input::{load_request, parse_request, read_request};
pub use interpolate::{check_modulus, default_prime, interpolate_at, interpolate_at_zero, mod_inverse};
pub use recover::{recover, recover_with, verify_shares, Verification};
pub use types::{Point, RecoveryRequest, Secret, Share};
