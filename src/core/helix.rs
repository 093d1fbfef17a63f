//! DNA helix renderer
//!
//! Two mirrored sine strands scrolling upward, joined by a rung per row.

use super::config::HelixConfig;
use super::scene::{Painter, Scene, MIN_SPACING};
use crate::theme::colors;

/// One row of the helix at a given clock value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixRow {
    pub index: usize,
    pub y: f64,
    /// Horizontal displacement of the first strand from the center line;
    /// the second strand sits at `-offset`.
    pub offset: f64,
    pub alpha: f64,
}

impl HelixRow {
    pub fn strands(&self, center_x: f64) -> (f64, f64) {
        (center_x + self.offset, center_x - self.offset)
    }
}

pub struct Helix {
    config: HelixConfig,
    width: f64,
    height: f64,
    clock: u64,
}

impl Helix {
    pub fn new(config: HelixConfig, width: f64, height: f64) -> Self {
        Self {
            config,
            width,
            height,
            clock: 0,
        }
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn row(&self, index: usize) -> HelixRow {
        let HelixConfig {
            amplitude,
            frequency,
            spacing,
            speed,
            ..
        } = self.config;
        let t = self.clock as f64;
        let i = index as f64;
        let phase = i * frequency * 10.0 + t * speed;

        HelixRow {
            index,
            y: i * spacing - t % spacing,
            offset: phase.sin() * amplitude,
            alpha: 0.15 + 0.1 * (i * 0.5).sin(),
        }
    }

    /// Rows covering the surface plus two extra so scrolling never shows a gap.
    pub fn rows(&self) -> Vec<HelixRow> {
        let spacing = self.config.spacing;
        if spacing.is_nan() || spacing < MIN_SPACING || !self.height.is_finite() {
            return Vec::new();
        }
        let limit = self.height / spacing + 2.0;
        (0..).take_while(|&i| (i as f64) < limit).map(|i| self.row(i)).collect()
    }

    pub fn advance(&mut self) {
        self.clock = self.clock.wrapping_add(1);
    }
}

impl Scene for Helix {
    fn name(&self) -> &'static str {
        "helix"
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn frame<P: Painter>(&mut self, painter: &mut P) {
        painter.clear(self.width, self.height);
        let cx = self.width / 2.0;
        let dot = self.config.dot_radius;

        for row in self.rows() {
            let (x1, x2) = row.strands(cx);
            painter.fill_circle((x1, row.y), dot, colors::TEAL.with_alpha(row.alpha + 0.2));
            painter.fill_circle((x2, row.y), dot, colors::GOLD.with_alpha(row.alpha + 0.1));
            painter.line((x1, row.y), (x2, row.y), colors::WHITE.with_alpha(row.alpha * 0.5), 1.0);
        }

        self.advance();
    }
}
