// SPDX-License-Identifier: MIT OR Apache-2.0
//! Clamping helpers.

use crate::error::PositionError;

/// Clamp `value` into `[lower, upper]`.
///
/// Returns `lower` when `value < lower`, `upper` when `value > upper`, and
/// `value` unchanged otherwise. Unlike [`f64::clamp`] this never panics:
/// with `upper < lower` the lower check wins, and a NaN `value` is returned
/// as is. Use [`try_bound_within`] to reject such inputs instead.
pub fn bound_within(value: f64, lower: f64, upper: f64) -> f64 {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Checked variant of [`bound_within`].
///
/// Rejects NaN in any argument and an upper bound below the lower bound.
pub fn try_bound_within(value: f64, lower: f64, upper: f64) -> Result<f64, PositionError> {
    if value.is_nan() || lower.is_nan() || upper.is_nan() {
        return Err(PositionError::NotANumber);
    }
    if upper < lower {
        return Err(PositionError::InvertedBounds { lower, upper });
    }
    Ok(bound_within(value, lower, upper))
}
