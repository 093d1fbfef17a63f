//! Product catalog: category tabs and the detail modal

use tracing::debug;

/// Tab value meaning "no filtering"
pub const ALL_CATEGORIES: &str = "all";
/// Icon shown when a card does not carry `data-icon`
pub const DEFAULT_ICON: &str = "🏥";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
    /// Tab without `data-filter`: selects the cards without `data-category`
    Uncategorized,
}

impl CategoryFilter {
    /// Parse a tab's `data-filter` value.
    pub fn from_tab(value: Option<&str>) -> Self {
        match value {
            Some(ALL_CATEGORIES) => Self::All,
            Some(category) => Self::Category(category.to_string()),
            None => Self::Uncategorized,
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category == Some(wanted.as_str()),
            Self::Uncategorized => category.is_none(),
        }
    }
}

/// Tab strip plus the cards it filters
#[derive(Debug, Clone)]
pub struct ProductFilter {
    tabs: Vec<CategoryFilter>,
    cards: Vec<Option<String>>,
    active_tab: Option<usize>,
}

impl ProductFilter {
    pub fn new(tabs: Vec<CategoryFilter>, cards: Vec<Option<String>>) -> Self {
        Self {
            tabs,
            cards,
            active_tab: None,
        }
    }

    pub fn active_tab(&self) -> Option<usize> {
        self.active_tab
    }

    /// Filter currently in force; show-all until a tab is activated
    pub fn active_filter(&self) -> CategoryFilter {
        self.active_tab
            .and_then(|i| self.tabs.get(i).cloned())
            .unwrap_or(CategoryFilter::All)
    }

    pub fn activate(&mut self, tab: usize) -> bool {
        if tab >= self.tabs.len() {
            return false;
        }
        self.active_tab = Some(tab);
        debug!(tab, filter = ?self.tabs[tab], "Product filter activated");
        true
    }

    pub fn is_visible(&self, card: usize) -> bool {
        self.cards
            .get(card)
            .is_some_and(|category| self.active_filter().matches(category.as_deref()))
    }

    pub fn visibility(&self) -> Vec<bool> {
        let filter = self.active_filter();
        self.cards.iter().map(|c| filter.matches(c.as_deref())).collect()
    }
}

/// Fields copied from a product card into the shared modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub icon: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub features: Vec<String>,
}

impl ProductDetails {
    /// Build from a card's data attributes (`icon`, `name`, `category`, `desc`, `features`).
    pub fn from_attributes<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let icon = attr("icon")
            .filter(|icon| !icon.is_empty())
            .unwrap_or_else(|| DEFAULT_ICON.to_string());
        let features = attr("features")
            .map(|raw| split_features(&raw))
            .unwrap_or_default();

        Self {
            icon,
            name: attr("name").unwrap_or_default(),
            category: attr("category").unwrap_or_default(),
            description: attr("desc").unwrap_or_default(),
            features,
        }
    }
}

/// Split a `|`-delimited feature list, trimming each entry.
pub fn split_features(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('|').map(|f| f.trim().to_string()).collect()
}

/// Ways the modal can be dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    Backdrop,
    Escape,
}

#[derive(Debug, Clone, Default)]
pub struct ProductModal {
    current: Option<ProductDetails>,
}

impl ProductModal {
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&ProductDetails> {
        self.current.as_ref()
    }

    pub fn open(&mut self, details: ProductDetails) {
        debug!(name = %details.name, "Product modal opened");
        self.current = Some(details);
    }

    /// Returns whether the modal was open.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        let was_open = self.current.take().is_some();
        if was_open {
            debug!(?trigger, "Product modal closed");
        }
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn catalog() -> ProductFilter {
        let tabs = ["all", "imaging", "surgical"]
            .iter()
            .map(|t| CategoryFilter::from_tab(Some(*t)))
            .collect();
        let cards = ["imaging", "surgical", "imaging", "monitoring"]
            .iter()
            .map(|c| Some(c.to_string()))
            .chain(std::iter::once(None))
            .collect();
        ProductFilter::new(tabs, cards)
    }

    #[test]
    fn test_default_shows_all() {
        let filter = catalog();
        assert_eq!(filter.active_filter(), CategoryFilter::All);
        assert!(filter.visibility().iter().all(|&v| v));
    }

    #[test]
    fn test_category_tab_shows_only_matching() {
        let mut filter = catalog();
        assert!(filter.activate(1));
        assert_eq!(filter.visibility(), vec![true, false, true, false, false]);
        assert_eq!(filter.active_tab(), Some(1));

        assert!(filter.activate(0));
        assert_eq!(filter.visibility(), vec![true; 5]);
    }

    #[test]
    fn test_tab_without_filter_selects_uncategorized_cards() {
        let tabs = vec![CategoryFilter::from_tab(Some("imaging")), CategoryFilter::from_tab(None)];
        let cards = vec![Some("imaging".to_string()), None, Some(String::new())];
        let mut filter = ProductFilter::new(tabs, cards);

        assert!(filter.activate(1));
        assert_eq!(filter.active_filter(), CategoryFilter::Uncategorized);
        assert_eq!(filter.visibility(), vec![false, true, false]);

        assert!(filter.activate(0));
        assert_eq!(filter.visibility(), vec![true, false, false]);
    }

    #[test]
    fn test_unknown_tab_keeps_state() {
        let mut filter = catalog();
        filter.activate(2);
        assert!(!filter.activate(9));
        assert!(filter.is_visible(1));
        assert!(!filter.is_visible(0));
        assert!(!filter.is_visible(42));
    }

    #[test]
    fn test_details_from_attributes() {
        let attrs: HashMap<&str, &str> = HashMap::from([
            ("name", "UltraScan 9"),
            ("category", "imaging"),
            ("desc", "Portable ultrasound"),
            ("features", " Wireless probe | 4K display |Cloud sync"),
        ]);
        let details = ProductDetails::from_attributes(|k| attrs.get(k).map(|v| v.to_string()));

        assert_eq!(details.icon, DEFAULT_ICON);
        assert_eq!(details.name, "UltraScan 9");
        assert_eq!(details.features, vec!["Wireless probe", "4K display", "Cloud sync"]);
    }

    #[test]
    fn test_modal_open_close() {
        let mut modal = ProductModal::default();
        assert!(!modal.close(CloseTrigger::Escape));

        modal.open(ProductDetails::from_attributes(|_| None));
        assert!(modal.is_open());
        assert!(modal.current().is_some_and(|d| d.features.is_empty()));

        assert!(modal.close(CloseTrigger::Backdrop));
        assert!(!modal.is_open());
    }
}
