//! Radar map renderer: static grid, pulsing rings, center marker

use super::config::RadarConfig;
use super::scene::{Painter, Point, Scene, MIN_SPACING};
use crate::theme::colors;

/// Derived state of one pulse ring; a pure function of clock and index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseRing {
    pub index: usize,
    pub radius: f64,
    pub alpha: f64,
}

impl PulseRing {
    pub fn at(config: &RadarConfig, clock: u64, index: usize) -> Self {
        let t = clock as f64;
        let i = index as f64;
        let radius = (t * config.ring_speed + i * config.ring_offset) % config.ring_cycle
            + config.ring_min_radius;
        let alpha = (config.peak_alpha - (t * config.fade_rate + i * config.fade_offset) % 1.0).max(0.0);
        Self { index, radius, alpha }
    }
}

pub struct Radar {
    config: RadarConfig,
    width: f64,
    height: f64,
    clock: u64,
}

impl Radar {
    pub fn new(config: RadarConfig, width: f64, height: f64) -> Self {
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

    pub fn center(&self) -> Point {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn rings(&self) -> Vec<PulseRing> {
        (0..self.config.rings)
            .map(|i| PulseRing::at(&self.config, self.clock, i))
            .collect()
    }

    /// Vertical then horizontal grid segments
    pub fn grid_lines(&self) -> Vec<(Point, Point)> {
        let step = self.config.grid_spacing;
        if step.is_nan() || step < MIN_SPACING {
            return Vec::new();
        }
        let (w, h) = (self.width, self.height);
        let columns = (0..).map(|i| i as f64 * step).take_while(|&x| x < w);
        let rows = (0..).map(|i| i as f64 * step).take_while(|&y| y < h);

        columns
            .map(|x| ((x, 0.0), (x, h)))
            .chain(rows.map(|y| ((0.0, y), (w, y))))
            .collect()
    }

    pub fn advance(&mut self) {
        self.clock = self.clock.wrapping_add(1);
    }
}

impl Scene for Radar {
    fn name(&self) -> &'static str {
        "radar"
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn frame<P: Painter>(&mut self, painter: &mut P) {
        painter.clear(self.width, self.height);

        let grid = colors::TEAL.with_alpha(0.1);
        for (from, to) in self.grid_lines() {
            painter.line(from, to, grid, 1.0);
        }

        let center = self.center();
        for ring in self.rings() {
            painter.stroke_circle(
                center,
                ring.radius,
                colors::TEAL.with_alpha(ring.alpha * self.config.stroke_alpha),
                2.0,
            );
        }

        painter.fill_circle(center, self.config.marker_outer, colors::GOLD.with_alpha(0.9));
        painter.fill_circle(center, self.config.marker_inner, colors::WHITE);

        self.advance();
    }
}
