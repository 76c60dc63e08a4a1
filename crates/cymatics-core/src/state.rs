//! Application state shared by input handling and the render entry point.
//!
//! The host owns one [`AppState`] and passes it by reference to both its
//! event handlers and its frame loop. Time is always supplied by the host as
//! seconds on its own monotonic clock; the state never reads a clock itself.

use crate::constants::{
    DEFAULT_FREQ_HZ, INTENSITY_BASELINE, INTENSITY_BOOST, INTENSITY_BOOST_SEC,
};
use crate::frame::FieldFrame;
use crate::geometry::{clamp_frequency, GeometryMode};
use crate::modes::{ModeCache, ModeIndices};

#[derive(Clone, Debug)]
pub struct AppState {
    frequency: f64,
    mode: GeometryMode,
    playing: bool,
    epoch_sec: f64,
    changed_at_sec: Option<f64>,
    cache: ModeCache,
}

impl AppState {
    pub fn new(now_sec: f64) -> Self {
        Self {
            frequency: DEFAULT_FREQ_HZ,
            mode: GeometryMode::default(),
            playing: false,
            epoch_sec: now_sec,
            changed_at_sec: None,
            cache: ModeCache::new(),
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn mode(&self) -> GeometryMode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Set the drive frequency (clamped into range) and restart the animation
    /// clock. Returns the frequency actually applied.
    pub fn set_frequency(&mut self, frequency: f64, now_sec: f64) -> f64 {
        let f = clamp_frequency(frequency);
        self.frequency = f;
        self.epoch_sec = now_sec;
        self.changed_at_sec = Some(now_sec);
        f
    }

    pub fn nudge_frequency(&mut self, delta_hz: f64, now_sec: f64) -> f64 {
        self.set_frequency(self.frequency + delta_hz, now_sec)
    }

    /// Switch geometry. The clock restarts so the new pattern starts in phase.
    pub fn set_mode(&mut self, mode: GeometryMode, now_sec: f64) {
        self.mode = mode;
        self.epoch_sec = now_sec;
    }

    pub fn toggle_mode(&mut self, now_sec: f64) -> GeometryMode {
        self.set_mode(self.mode.toggled(), now_sec);
        self.mode
    }

    pub fn set_playing(&mut self, playing: bool, now_sec: f64) {
        if playing && !self.playing {
            self.epoch_sec = now_sec;
        }
        self.playing = playing;
    }

    pub fn toggle_playing(&mut self, now_sec: f64) -> bool {
        self.set_playing(!self.playing, now_sec);
        self.playing
    }

    /// Seconds since the current (mode, frequency) epoch, never negative.
    pub fn elapsed(&self, now_sec: f64) -> f64 {
        (now_sec - self.epoch_sec).max(0.0)
    }

    /// Display intensity: baseline plus a boost that decays linearly to zero
    /// over [`INTENSITY_BOOST_SEC`] after the last frequency change.
    pub fn intensity(&self, now_sec: f64) -> f64 {
        let Some(changed_at) = self.changed_at_sec else {
            return INTENSITY_BASELINE;
        };
        let since = (now_sec - changed_at).max(0.0);
        let remaining = (1.0 - since / INTENSITY_BOOST_SEC).max(0.0);
        INTENSITY_BASELINE + INTENSITY_BOOST * remaining
    }

    pub fn modes(&mut self) -> ModeIndices {
        self.cache.get(self.mode, self.frequency)
    }

    /// Overlay text: frequency line, then geometry and mode line.
    pub fn info_lines(&mut self) -> [String; 2] {
        let modes = self.modes();
        [
            format!("Frequency: {} Hz", self.frequency),
            format!("{}: Mode {}", self.mode.label(), modes),
        ]
    }

    /// Render the field for the current state into `frame`.
    pub fn render_frame(&mut self, frame: &mut FieldFrame, now_sec: f64) -> ModeIndices {
        let t = self.elapsed(now_sec);
        frame.render(self.mode, self.frequency, t, &mut self.cache)
    }
}
