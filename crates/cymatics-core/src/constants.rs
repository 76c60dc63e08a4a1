// Shared physical and tuning constants used by the core and the native frontend.

// Physical constants
pub const CHLADNI_CONSTANT: f64 = 0.054; // square steel plate: f = C * sqrt(n^2 + m^2)
pub const MEMBRANE_CONSTANT: f64 = 0.961; // circular membrane heuristic scale

// Mode search
pub const SQUARE_MODE_MAX: u32 = 10; // n and m are searched over 1..=SQUARE_MODE_MAX
pub const RADIAL_MODE_DIVISOR: f64 = 2.0;
pub const ANGULAR_MODE_DIVISOR: f64 = 3.0;

// Bessel stand-ins switch to the asymptotic form at |z| >= this
pub const BESSEL_ASYMPTOTIC_THRESHOLD: f64 = 3.0;

// Frequency input
pub const FREQ_MIN_HZ: f64 = 50.0;
pub const FREQ_MAX_HZ: f64 = 4000.0;
pub const DEFAULT_FREQ_HZ: f64 = 440.0;
pub const FREQ_STEP_FINE_HZ: f64 = 1.0;
pub const FREQ_STEP_HZ: f64 = 10.0;
pub const FREQ_STEP_COARSE_HZ: f64 = 100.0;

// Transient intensity boost after a frequency change
pub const INTENSITY_BASELINE: f64 = 1.0;
pub const INTENSITY_BOOST: f64 = 0.5; // extra intensity right after a change
pub const INTENSITY_BOOST_SEC: f64 = 0.6; // linear decay back to baseline

// Frame pacing and surface sizing
pub const TARGET_FPS: f64 = 30.0;
pub const CANVAS_HEIGHT_FRACTION: f64 = 0.75;
pub const CANVAS_WIDTH_FRACTION: f64 = 0.9;
// Cap on the CPU-sampled field resolution. Larger viewports stretch the field
// with linear filtering, which softens nodal lines on big windows.
pub const FIELD_MAX_SIDE: u32 = 512;

// Tone envelope
pub const TONE_ATTACK_SEC: f32 = 0.02;
pub const TONE_RELEASE_SEC: f32 = 0.08;
pub const TONE_AMPLITUDE: f32 = 0.25;
pub const TONE_GLIDE_SEC: f32 = 0.03; // frequency smoothing to avoid zipper noise

/// Side length of the square drawing surface for a window of the given size.
#[inline]
pub fn canvas_side(window_width: f64, window_height: f64) -> f64 {
    (window_height * CANVAS_HEIGHT_FRACTION).min(window_width * CANVAS_WIDTH_FRACTION)
}
