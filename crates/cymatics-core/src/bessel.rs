//! Crude closed-form stand-ins for the Bessel functions J0 and J1.
//!
//! Below [`BESSEL_ASYMPTOTIC_THRESHOLD`] a single trigonometric term is used;
//! above it the large-argument asymptotic form takes over. These are tuned for
//! plausible nodal patterns, not numerical accuracy, and the rendered patterns
//! depend on the exact seam and phase offsets.

use crate::constants::BESSEL_ASYMPTOTIC_THRESHOLD;
use std::f64::consts::{FRAC_PI_4, PI};

#[inline]
fn asymptotic_envelope(z_abs: f64) -> f64 {
    (2.0 / (PI * z_abs)).sqrt()
}

/// Approximate J0. Total over all reals; even in `z`.
pub fn bessel_j0(z: f64) -> f64 {
    if z == 0.0 {
        return 1.0;
    }
    let z_abs = z.abs();
    if z_abs < BESSEL_ASYMPTOTIC_THRESHOLD {
        return z.cos();
    }
    asymptotic_envelope(z_abs) * (z_abs - FRAC_PI_4).cos()
}

/// Approximate J1. Total over all reals.
///
/// The asymptotic branch uses `|z|`, so unlike the true J1 it is not odd for
/// large negative arguments. Only non-negative arguments occur in the sampler.
pub fn bessel_j1(z: f64) -> f64 {
    if z == 0.0 {
        return 0.0;
    }
    let z_abs = z.abs();
    if z_abs < BESSEL_ASYMPTOTIC_THRESHOLD {
        return z.sin() / 2.0;
    }
    asymptotic_envelope(z_abs) * (z_abs - 3.0 * FRAC_PI_4).sin()
}
