use crate::constants::{FREQ_MAX_HZ, FREQ_MIN_HZ};
use crate::error::{ParseFrequencyError, ParseGeometryError};
use std::fmt;
use std::str::FromStr;

/// Which vibrating surface is being modelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeometryMode {
    #[default]
    SquarePlate,
    CircularMembrane,
}

impl GeometryMode {
    /// Human-readable name used in the overlay.
    pub fn label(self) -> &'static str {
        match self {
            GeometryMode::SquarePlate => "Square Plate",
            GeometryMode::CircularMembrane => "Circular Membrane",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            GeometryMode::SquarePlate => GeometryMode::CircularMembrane,
            GeometryMode::CircularMembrane => GeometryMode::SquarePlate,
        }
    }
}

impl fmt::Display for GeometryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GeometryMode::SquarePlate => "square",
            GeometryMode::CircularMembrane => "circular",
        })
    }
}

impl FromStr for GeometryMode {
    type Err = ParseGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" | "plate" => Ok(GeometryMode::SquarePlate),
            "circular" | "circle" | "membrane" => Ok(GeometryMode::CircularMembrane),
            _ => Err(ParseGeometryError(s.to_string())),
        }
    }
}

/// Clamp a frequency into the supported input range.
#[inline]
pub fn clamp_frequency(frequency: f64) -> f64 {
    frequency.clamp(FREQ_MIN_HZ, FREQ_MAX_HZ)
}

/// Parse user-entered frequency text and clamp it into range.
pub fn parse_frequency(text: &str) -> Result<f64, ParseFrequencyError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ParseFrequencyError::NotANumber(text.to_string()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ParseFrequencyError::OutOfDomain(value));
    }
    Ok(clamp_frequency(value))
}
