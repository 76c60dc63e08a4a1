//! Per-frame sweep of the field over a pixel grid.

use crate::field::{sample_membrane, sample_square};
use crate::geometry::GeometryMode;
use crate::modes::{ModeCache, ModeIndices};

/// Row-major scalar field, one displacement value per pixel.
#[derive(Clone, Debug)]
pub struct FieldFrame {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl FieldFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width as usize * height as usize],
        }
    }

    /// Change the grid size. Reuses the allocation when it is large enough.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.values.clear();
        self.values.resize(width as usize * height as usize, 0.0);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Fill every pixel for `mode` at `frequency`, `time` seconds into the epoch.
    ///
    /// Mode indices are resolved once per call. Returns the indices used.
    pub fn render(
        &mut self,
        mode: GeometryMode,
        frequency: f64,
        time: f64,
        cache: &mut ModeCache,
    ) -> ModeIndices {
        let indices = cache.get(mode, frequency);
        let (w, h) = (self.width as f64, self.height as f64);
        let row_len = self.width as usize;
        if row_len == 0 {
            return indices;
        }
        for (y, row) in self.values.chunks_exact_mut(row_len).enumerate() {
            let yf = y as f64;
            match indices {
                ModeIndices::Square(s) => {
                    for (x, v) in row.iter_mut().enumerate() {
                        *v = sample_square(x as f64 / w, yf / h, s.n, s.m, time, frequency);
                    }
                }
                ModeIndices::Membrane(mm) => {
                    for (x, v) in row.iter_mut().enumerate() {
                        *v = sample_membrane(
                            x as f64, yf, w, h, mm.radial, mm.angular, time, frequency,
                        );
                    }
                }
            }
        }
        indices
    }
}
