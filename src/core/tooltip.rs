//! Tooltip placement

/// Gap between the anchor's top edge and the tooltip
pub const TOOLTIP_GAP: f64 = 8.0;

/// Viewport-relative box, as returned by `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Document coordinates (left, top) that center a `tip_width x tip_height`
/// tooltip horizontally above `anchor`.
pub fn place_above(anchor: Rect, scroll: (f64, f64), tip_width: f64, tip_height: f64) -> (f64, f64) {
    let left = anchor.left + scroll.0 + anchor.width / 2.0 - tip_width / 2.0;
    let top = anchor.top + scroll.1 - tip_height - TOOLTIP_GAP;
    (left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_above_anchor() {
        let anchor = Rect {
            left: 100.0,
            top: 300.0,
            width: 40.0,
            height: 20.0,
        };
        assert_eq!(place_above(anchor, (0.0, 0.0), 60.0, 24.0), (90.0, 268.0));
        // Page scrolled: document coordinates shift by the scroll offset
        assert_eq!(place_above(anchor, (5.0, 1000.0), 60.0, 24.0), (95.0, 1268.0));
    }
}
