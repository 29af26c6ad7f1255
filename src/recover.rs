//! Share selection and secret recovery.
//!
//! The `k` lowest share indices are used. Under [`SharePolicy::FailFast`] a
//! selected share that fails to decode aborts the request; under
//! [`SharePolicy::Skip`] it is passed over and the next index takes its place.

use crate::config::{RecoveryConfig, SharePolicy};
use crate::error::RecoveryError;
use crate::interpolate::{interpolate_at, interpolate_at_zero};
use crate::types::{Point, RecoveryRequest, Secret};
use log::{debug, info, warn};

/// Outcome of checking every share in a request against the recovered polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub secret: Secret,
    /// Indices of the shares that defined the polynomial.
    pub used: Vec<u64>,
    /// Remaining shares that lie on the polynomial.
    pub consistent: Vec<u64>,
    /// Remaining shares that do not.
    pub inconsistent: Vec<u64>,
    /// Remaining shares whose value could not be decoded.
    pub undecodable: Vec<u64>,
}

/// Recovers the secret with the default configuration: fail fast, 2^521 - 1.
pub fn recover(request: &RecoveryRequest) -> Result<Secret, RecoveryError> {
    recover_with(request, &RecoveryConfig::default())
}

/// Recovers the secret of `request` under `config`.
///
/// # Errors
/// - [`RecoveryError::InvalidThreshold`] if the threshold is zero.
/// - [`RecoveryError::InsufficientShares`] if fewer than `k` usable shares exist.
/// - [`RecoveryError::Share`] if a selected share fails to decode under
///   [`SharePolicy::FailFast`].
pub fn recover_with(
    request: &RecoveryRequest,
    config: &RecoveryConfig,
) -> Result<Secret, RecoveryError> {
    let points = select_points(request, config.policy)?;
    let secret = interpolate_at_zero(&points, &config.prime)?;
    info!(
        "Recovered secret from shares {:?}",
        points.iter().map(|p| p.x).collect::<Vec<_>>()
    );
    Ok(secret)
}

/// Recovers the secret, then tests every share that was not used against the
/// same polynomial.
///
/// Selection is identical to [`recover_with`]. Shares outside the selection
/// never cause an error; they are sorted into the report instead.
pub fn verify_shares(
    request: &RecoveryRequest,
    config: &RecoveryConfig,
) -> Result<Verification, RecoveryError> {
    // Step 1: Recover from the selected shares
    let points = select_points(request, config.policy)?;
    let secret = interpolate_at_zero(&points, &config.prime)?;
    let used: Vec<u64> = points.iter().map(|p| p.x).collect();

    // Step 2: Evaluate the polynomial at every other index
    let mut consistent = Vec::new();
    let mut inconsistent = Vec::new();
    let mut undecodable = Vec::new();
    for share in request.shares.values().filter(|s| !used.contains(&s.index)) {
        let point = match share.to_point() {
            Ok(point) => point,
            Err(err) => {
                warn!("{}", err);
                undecodable.push(share.index);
                continue;
            }
        };
        let expected = interpolate_at(&points, point.x, &config.prime)?;
        if expected == &point.y % &config.prime {
            consistent.push(point.x);
        } else {
            warn!("Share {} does not lie on the recovered polynomial", point.x);
            inconsistent.push(point.x);
        }
    }

    Ok(Verification {
        secret,
        used,
        consistent,
        inconsistent,
        undecodable,
    })
}

/// Picks and decodes the `k` points used for interpolation.
fn select_points(
    request: &RecoveryRequest,
    policy: SharePolicy,
) -> Result<Vec<Point>, RecoveryError> {
    let needed = request.threshold;
    if needed == 0 {
        return Err(RecoveryError::InvalidThreshold(needed));
    }
    if request.total_shares != request.shares.len() {
        warn!(
            "Request declares {} shares but carries {}",
            request.total_shares,
            request.shares.len()
        );
    }
    if needed > request.total_shares {
        warn!(
            "Threshold {} exceeds declared share count {}",
            needed, request.total_shares
        );
    }

    let mut points = Vec::with_capacity(needed);
    match policy {
        SharePolicy::FailFast => {
            if request.shares.len() < needed {
                return Err(RecoveryError::InsufficientShares {
                    needed,
                    available: request.shares.len(),
                });
            }
            for share in request.shares.values().take(needed) {
                points.push(share.to_point()?);
                debug!("Decoded share {} (base {})", share.index, share.base);
            }
        }
        SharePolicy::Skip => {
            for share in request.shares.values() {
                if points.len() == needed {
                    break;
                }
                match share.to_point() {
                    Ok(point) => {
                        debug!("Decoded share {} (base {})", share.index, share.base);
                        points.push(point);
                    }
                    Err(err) => warn!("Skipping {}", err),
                }
            }
            if points.len() < needed {
                return Err(RecoveryError::InsufficientShares {
                    needed,
                    available: points.len(),
                });
            }
        }
    }

    Ok(points)
}
