//! Drawing seam shared by the canvas renderers
//!
//! Renderers only talk to a [`Painter`]; the browser build backs it with a
//! `CanvasRenderingContext2d`, tests and the simulator with [`CountingPainter`].

use crate::theme::Rgba;

pub type Point = (f64, f64);

/// Row and grid spacings below one pixel disable the layer instead of
/// producing an unbounded number of primitives.
pub const MIN_SPACING: f64 = 1.0;

pub trait Painter {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, line_width: f64);
    fn line(&mut self, from: Point, to: Point, color: Rgba, line_width: f64);
}

/// A self-contained animation redrawn once per display frame.
///
/// Each scene owns its clock and any pointer state; nothing is shared
/// between scenes.
pub trait Scene {
    fn name(&self) -> &'static str;

    /// Resynchronize to the surface's on-screen size.
    fn resize(&mut self, width: f64, height: f64);

    /// Clear, draw, and advance one frame.
    fn frame<P: Painter>(&mut self, painter: &mut P);
}

/// Painter that only tallies draw calls
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CountingPainter {
    pub clears: u64,
    pub filled: u64,
    pub stroked: u64,
    pub lines: u64,
}

impl CountingPainter {
    pub fn total(&self) -> u64 {
        self.filled + self.stroked + self.lines
    }
}

impl Painter for CountingPainter {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, _center: Point, _radius: f64, _color: Rgba) {
        self.filled += 1;
    }

    fn stroke_circle(&mut self, _center: Point, _radius: f64, _color: Rgba, _line_width: f64) {
        self.stroked += 1;
    }

    fn line(&mut self, _from: Point, _to: Point, _color: Rgba, _line_width: f64) {
        self.lines += 1;
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// One recorded draw call
    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear,
        Fill { center: Point, radius: f64, color: Rgba },
        Stroke { center: Point, radius: f64, color: Rgba },
        Line { from: Point, to: Point, color: Rgba },
    }

    #[derive(Debug, Default)]
    pub struct RecordingPainter {
        pub ops: Vec<Op>,
    }

    impl Painter for RecordingPainter {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.ops.push(Op::Clear);
        }

        fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
            self.ops.push(Op::Fill { center, radius, color });
        }

        fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, _line_width: f64) {
            self.ops.push(Op::Stroke { center, radius, color });
        }

        fn line(&mut self, from: Point, to: Point, color: Rgba, _line_width: f64) {
            self.ops.push(Op::Line { from, to, color });
        }
    }
}
