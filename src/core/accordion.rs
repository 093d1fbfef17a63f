//! FAQ accordion: at most one item open at a time

use tracing::trace;

/// Result of a click on an accordion item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionChange {
    pub closed: Option<usize>,
    pub opened: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Click on `index`: closes it if open, otherwise closes the open item and opens it.
    pub fn toggle(&mut self, index: usize) -> AccordionChange {
        if index >= self.len {
            return AccordionChange { closed: None, opened: None };
        }

        let change = match self.open {
            Some(open) if open == index => AccordionChange {
                closed: Some(index),
                opened: None,
            },
            previous => AccordionChange {
                closed: previous,
                opened: Some(index),
            },
        };
        self.open = change.opened;

        trace!(index, ?change, "Accordion toggled");
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open_item() {
        let mut acc = Accordion::new(3);
        assert_eq!(acc.open_item(), None);

        let change = acc.toggle(0);
        assert_eq!(change, AccordionChange { closed: None, opened: Some(0) });

        let change = acc.toggle(2);
        assert_eq!(change, AccordionChange { closed: Some(0), opened: Some(2) });
        assert!(acc.is_open(2));
        assert!(!acc.is_open(0));
    }

    #[test]
    fn test_clicking_open_item_closes_everything() {
        let mut acc = Accordion::new(3);
        acc.toggle(1);
        let change = acc.toggle(1);
        assert_eq!(change, AccordionChange { closed: Some(1), opened: None });
        assert_eq!(acc.open_item(), None);
        assert!((0..3).all(|i| !acc.is_open(i)));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut acc = Accordion::new(2);
        acc.toggle(0);
        acc.toggle(5);
        assert_eq!(acc.open_item(), Some(0));
    }
}
