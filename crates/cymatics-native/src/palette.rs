//! Maps the scalar field to RGBA texels.

use cymatics_core::FieldFrame;

/// Colour for one displacement value: magnitude drives red up and green down
/// over a constant blue. `intensity` scales the magnitude before clamping.
#[inline]
pub fn colorize(value: f64, intensity: f64) -> [u8; 4] {
    let mag = (value.abs() * intensity).clamp(0.0, 1.0);
    let c = (mag * 255.0).round() as u8;
    [c, 255 - c, 255, 255]
}

/// Colorize a whole frame into `out`, resizing it to match.
pub fn colorize_frame(frame: &FieldFrame, intensity: f64, out: &mut Vec<[u8; 4]>) {
    out.clear();
    out.extend(frame.values().iter().map(|&v| colorize(v, intensity)));
}
