//! Platform-agnostic time utilities
//!
//! Provides milliseconds since app start and a rolling frame-rate counter.

use std::collections::VecDeque;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm")))]
pub fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Frames per second over the last 60 frame timestamps
pub struct FpsCounter {
    frames: VecDeque<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::with_capacity(61),
        }
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.frames.push_back(now_ms);
        if self.frames.len() > 60 {
            self.frames.pop_front();
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.front(), self.frames.back()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / (elapsed / 1000.0)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.fps(), 0.0);
        for i in 0..100 {
            fps.tick(i as f64 * 20.0);
        }
        assert!((fps.fps() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_fps_window_keeps_last_sixty_frames() {
        let mut fps = FpsCounter::new();
        // A slow start falls out of the window once 60 newer frames arrive
        fps.tick(0.0);
        fps.tick(1000.0);
        for i in 1..=60 {
            fps.tick(1000.0 + i as f64 * 10.0);
        }
        assert_eq!(fps.frames.len(), 60);
        assert_eq!(fps.frames.front(), Some(&1010.0));
        assert!((fps.fps() - 100.0).abs() < 1e-9);
    }
}
