//! Standing-wave samplers for the square plate and the circular membrane.
//!
//! Each sample is a static spatial eigenmode times the shared temporal term
//! `cos(2 pi f t)`, so animation never needs a new mode selection.

use crate::bessel::{bessel_j0, bessel_j1};
use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Temporal oscillation shared by both geometries.
#[inline]
pub fn oscillation(frequency: f64, time: f64) -> f64 {
    (TAU * frequency * time).cos()
}

/// Plate displacement at normalized `(x, y)` in `[0, 1]^2`.
#[inline]
pub fn sample_square(x: f64, y: f64, n: u32, m: u32, time: f64, frequency: f64) -> f64 {
    (PI * n as f64 * x).sin() * (PI * m as f64 * y).sin() * oscillation(frequency, time)
}

/// Polar coordinate of pixel `(px, py)` against the circle inscribed in a
/// `width` x `height` surface. `rho` is 1 on the rim.
#[inline]
pub fn membrane_polar(px: f64, py: f64, width: f64, height: f64) -> (f64, f64) {
    let radius = 0.5 * width.min(height);
    let center = DVec2::new(width / 2.0, height / 2.0);
    let d = DVec2::new(px, py) - center;
    (d.length() / radius, d.y.atan2(d.x))
}

/// Spatial factor of membrane mode (radial, angular) at polar `(rho, theta)`.
/// Zero outside the unit disc.
pub fn membrane_spatial(rho: f64, theta: f64, radial: u32, angular: u32) -> f64 {
    if rho > 1.0 {
        return 0.0;
    }
    if rho == 0.0 {
        // avoids J1(z)/z at z = 0
        return if angular == 0 { 1.0 } else { 0.0 };
    }
    let z = PI * radial as f64 * rho;
    if angular == 0 {
        bessel_j0(z)
    } else {
        bessel_j1(z) * (angular as f64 * theta).sin() / z
    }
}

/// Membrane displacement at pixel `(px, py)` of a `width` x `height` surface.
#[allow(clippy::too_many_arguments)]
pub fn sample_membrane(
    px: f64,
    py: f64,
    width: f64,
    height: f64,
    radial: u32,
    angular: u32,
    time: f64,
    frequency: f64,
) -> f64 {
    let (rho, theta) = membrane_polar(px, py, width, height);
    if rho > 1.0 {
        return 0.0;
    }
    membrane_spatial(rho, theta, radial, angular) * oscillation(frequency, time)
}
