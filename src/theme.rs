//! Site palette: teal and gold accents on a dark navy base

use std::fmt;

/// RGB color with a fractional alpha, formatted as a CSS `rgba()` string
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

pub mod colors {
    use super::Rgba;

    pub const TEAL: Rgba = Rgba::rgb(148, 210, 189);      // #94D2BD - particles, helix strand, radar
    pub const GOLD: Rgba = Rgba::rgb(233, 196, 106);      // #E9C46A - helix strand, map marker
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TOOLTIP_BG: Rgba = Rgba::rgb(26, 26, 46);   // #1A1A2E
}

/// Inline style applied to every generated tooltip element
pub const TOOLTIP_STYLE: &str = "position:absolute;background:#1a1a2e;color:#fff;padding:6px 12px;\
border-radius:6px;font-size:0.78rem;white-space:nowrap;z-index:9999;pointer-events:none;\
opacity:0;transition:opacity 0.2s;";

/// Entry animation restarted on product cards revealed by the filter
pub const CARD_FADE_IN: &str = "fadeInUp 0.4s ease both";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(colors::TEAL.with_alpha(0.5).css(), "rgba(148,210,189,0.5)");
        assert_eq!(colors::WHITE.css(), "rgba(255,255,255,1)");
    }
}
