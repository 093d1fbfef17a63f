//! Navigation and scroll-driven state

use tracing::trace;

/// Page assumed when the path ends in `/`
pub const DEFAULT_PAGE: &str = "index.html";

pub fn navbar_scrolled(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

pub fn back_to_top_visible(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

/// Scroll progress as a percentage; a page that cannot scroll reports 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let total = scroll_height - viewport_height;
    if total <= 0.0 {
        return 0.0;
    }
    (scroll_y / total * 100.0).clamp(0.0, 100.0)
}

/// Last path segment, used to highlight the current nav link.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => DEFAULT_PAGE,
    }
}

/// Mobile hamburger menu; while open the page body does not scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        trace!(open = self.open, "Menu toggled");
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for `body.style.overflow`
    pub fn body_overflow(&self) -> &'static str {
        body_overflow(self.open)
    }
}

pub fn body_overflow(locked: bool) -> &'static str {
    if locked {
        "hidden"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert!(!navbar_scrolled(60.0, 60.0));
        assert!(navbar_scrolled(60.5, 60.0));
        assert!(!back_to_top_visible(0.0, 400.0));
        assert!(back_to_top_visible(401.0, 400.0));
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        // Short page
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        // Overscroll bounce
        assert_eq!(scroll_progress(1100.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/site/products.html"), "products.html");
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("about.html"), "about.html");
    }

    #[test]
    fn test_menu_locks_scroll_while_open() {
        let mut menu = MenuState::default();
        assert_eq!(menu.body_overflow(), "");
        assert!(menu.toggle());
        assert_eq!(menu.body_overflow(), "hidden");
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");
    }
}
