//! Animated stat counters (`[data-count]`, optional `[data-suffix]`)

use num_format::{Locale, ToFormattedString};
use tracing::debug;

use super::tween::Tween;

/// Format an integer with `,` thousands separators ("1,500").
pub fn group_thousands(value: i64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Leading integer of `text`: optional whitespace and sign, then digits up to
/// the first non-digit ("99.9" is 99, "1500+" is 1500).
pub fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits_len = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    text[..sign_len + digits_len].parse().ok()
}

/// Text to display for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    suffix: String,
    tween: Tween,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: f64, suffix: impl Into<String>) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            tween: Tween::new(0.0, target as f64, duration_ms),
        }
    }

    /// Build from the raw `data-count` / `data-suffix` attribute values.
    pub fn from_attributes(count: &str, suffix: Option<&str>, duration_ms: f64) -> Option<Self> {
        let Some(target) = leading_integer(count) else {
            debug!(count, "Ignoring counter with unparseable target");
            return None;
        };
        Some(Self::new(target, duration_ms, suffix.unwrap_or_default()))
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn sample(&mut self, timestamp_ms: f64) -> CounterFrame {
        let sample = self.tween.sample(timestamp_ms);
        // Terminal frame shows the exact target, never a float-rounded value
        let shown = if sample.done {
            self.target
        } else {
            sample.value.floor() as i64
        };
        CounterFrame {
            text: format!("{}{}", group_thousands(shown), self.suffix),
            done: sample.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown_value(text: &str, suffix: &str) -> i64 {
        text.trim_end_matches(suffix).replace(',', "").parse().expect("numeric text")
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1500), "1,500");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-25_000), "-25,000");
    }

    #[test]
    fn test_counter_ends_exactly_on_target() {
        let mut counter = CounterAnimation::new(1500, 2000.0, "");
        counter.sample(100.0);
        let end = counter.sample(2100.0);
        assert!(end.done);
        assert_eq!(end.text, "1,500");

        let mut counter = CounterAnimation::new(1500, 2000.0, "+");
        counter.sample(0.0);
        assert_eq!(counter.sample(9_999.0).text, "1,500+");
    }

    #[test]
    fn test_counter_never_overshoots() {
        let mut counter = CounterAnimation::new(1500, 2000.0, "%");
        let mut prev = 0;
        let mut ts = 0.0;
        loop {
            let frame = counter.sample(ts);
            let value = shown_value(&frame.text, "%");
            assert!(value <= 1500);
            assert!(value >= prev);
            prev = value;
            if frame.done {
                break;
            }
            ts += 16.7;
        }
        assert_eq!(prev, 1500);
    }

    #[test]
    fn test_from_attributes() {
        let counter = CounterAnimation::from_attributes(" 250 ", Some("+"), 2000.0).expect("valid");
        assert_eq!(counter.target(), 250);
        assert!(CounterAnimation::from_attributes("many", None, 2000.0).is_none());
    }

    #[test]
    fn test_target_uses_leading_integer() {
        let target = |count: &str| CounterAnimation::from_attributes(count, None, 2000.0).map(|c| c.target());
        assert_eq!(target("99.9"), Some(99));
        assert_eq!(target("1500+"), Some(1500));
        assert_eq!(target("  -12px"), Some(-12));
        assert_eq!(target("+7"), Some(7));
        assert_eq!(target(".5"), None);
        assert_eq!(target("-"), None);
        assert_eq!(target(""), None);
        // Overflowing digit runs are rejected rather than wrapped
        assert_eq!(target("99999999999999999999"), None);
    }
}
