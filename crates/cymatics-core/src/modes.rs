//! Mode selection: map a target frequency to integer vibration-mode indices.
//!
//! The square plate uses a brute-force nearest search over the Chladni formula
//! `f(n, m) = C * sqrt(n^2 + m^2)`, since that mapping has no integer inverse.
//! The membrane uses a direct heuristic estimate with no search.

use crate::constants::{
    ANGULAR_MODE_DIVISOR, CHLADNI_CONSTANT, MEMBRANE_CONSTANT, RADIAL_MODE_DIVISOR,
    SQUARE_MODE_MAX,
};
use crate::geometry::GeometryMode;
use std::fmt;

/// Mode numbers (n, m) of a simply-supported square plate, each in `1..=10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SquareModes {
    pub n: u32,
    pub m: u32,
}

/// Radial (>= 1) and angular (>= 0) indices of a circular membrane mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MembraneModes {
    pub radial: u32,
    pub angular: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeIndices {
    Square(SquareModes),
    Membrane(MembraneModes),
}

impl ModeIndices {
    /// Geometry these indices were selected for.
    pub fn geometry(&self) -> GeometryMode {
        match self {
            ModeIndices::Square(_) => GeometryMode::SquarePlate,
            ModeIndices::Membrane(_) => GeometryMode::CircularMembrane,
        }
    }
}

impl fmt::Display for ModeIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeIndices::Square(s) => write!(f, "({},{})", s.n, s.m),
            ModeIndices::Membrane(mm) => write!(f, "({},{})", mm.radial, mm.angular),
        }
    }
}

/// Eigenfrequency of plate mode (n, m) under the simplified Chladni law.
#[inline]
pub fn square_mode_frequency(n: u32, m: u32) -> f64 {
    let (n, m) = (n as f64, m as f64);
    CHLADNI_CONSTANT * (n * n + m * m).sqrt()
}

/// Nearest plate mode to `frequency`. Row-major scan; ties keep the earliest pair.
pub fn select_square_modes(frequency: f64) -> SquareModes {
    let mut best = SquareModes { n: 1, m: 1 };
    let mut min_diff = f64::INFINITY;
    for n in 1..=SQUARE_MODE_MAX {
        for m in 1..=SQUARE_MODE_MAX {
            let diff = (square_mode_frequency(n, m) - frequency).abs();
            if diff < min_diff {
                min_diff = diff;
                best = SquareModes { n, m };
            }
        }
    }
    best
}

/// Heuristic membrane indices: `k = sqrt(f / M)`, radial `k/2`, angular `k/3`.
pub fn select_membrane_modes(frequency: f64) -> MembraneModes {
    let k = (frequency / MEMBRANE_CONSTANT).sqrt();
    // `as u32` saturates and maps NaN to 0, which the max() floors then absorb.
    let radial = ((k / RADIAL_MODE_DIVISOR).floor() as u32).max(1);
    let angular = (k / ANGULAR_MODE_DIVISOR).floor() as u32;
    MembraneModes { radial, angular }
}

pub fn select_modes(mode: GeometryMode, frequency: f64) -> ModeIndices {
    match mode {
        GeometryMode::SquarePlate => ModeIndices::Square(select_square_modes(frequency)),
        GeometryMode::CircularMembrane => {
            ModeIndices::Membrane(select_membrane_modes(frequency))
        }
    }
}

/// Single-entry memo of the last mode selection.
///
/// Keyed by geometry and the exact bit pattern of the frequency, so a hit
/// always returns what [`select_modes`] would.
#[derive(Clone, Debug, Default)]
pub struct ModeCache {
    entry: Option<(GeometryMode, u64, ModeIndices)>,
}

impl ModeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, mode: GeometryMode, frequency: f64) -> ModeIndices {
        let bits = frequency.to_bits();
        if let Some((m, b, indices)) = self.entry {
            if m == mode && b == bits {
                return indices;
            }
        }
        let indices = select_modes(mode, frequency);
        if self.entry.map(|(_, _, prev)| prev) != Some(indices) {
            log::debug!("[modes] {} {:.1} Hz -> {}", mode.label(), frequency, indices);
        }
        self.entry = Some((mode, bits, indices));
        indices
    }

    /// Drop the memo; the next `get` recomputes.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}
