//! Frame-driven value interpolation

/// Cubic ease-out; input is clamped to [0, 1].
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Interpolates `from -> to` over `duration_ms`, sampled with frame timestamps.
///
/// The first sampled timestamp becomes the start time, mirroring how
/// `requestAnimationFrame` hands out its first timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    start: Option<f64>,
}

/// One sample of a tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    pub progress: f64,
    pub value: f64,
    pub done: bool,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            start: None,
        }
    }

    pub fn sample(&mut self, timestamp_ms: f64) -> TweenSample {
        let start = *self.start.get_or_insert(timestamp_ms);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((timestamp_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        };

        if progress >= 1.0 {
            return TweenSample {
                progress: 1.0,
                value: self.to,
                done: true,
            };
        }

        TweenSample {
            progress,
            value: self.from + (self.to - self.from) * ease_out_cubic(progress),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
    }

    #[test]
    fn test_tween_latches_first_timestamp() {
        let mut tween = Tween::new(0.0, 100.0, 1000.0);
        let first = tween.sample(5_000.0);
        assert_eq!(first.value, 0.0);
        assert!(!first.done);

        let mid = tween.sample(5_500.0);
        assert!((mid.value - 87.5).abs() < 1e-9);

        let end = tween.sample(6_000.0);
        assert!(end.done);
        assert_eq!(end.value, 100.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tween = Tween::new(0.0, 10.0, 0.0);
        let s = tween.sample(1.0);
        assert!(s.done);
        assert_eq!(s.value, 10.0);
    }
}
