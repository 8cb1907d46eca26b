//! Per-session application state.
//!
//! Holds everything a single visitor's view depends on: the page being
//! shown, the search box contents and the cart. The view layer owns one
//! `AppState` and passes it by reference; events mutate it through `&mut`.

use core::fmt;
use core::str::FromStr;

use hista_core::{Category, CategoryFilter, Product};

use crate::cart::Cart;
use crate::catalog::Catalog;

/// Top-level pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Games,
    Apps,
    About,
    Cart,
}

impl Page {
    /// The category selector this page browses with.
    #[must_use]
    pub const fn category_filter(self) -> CategoryFilter {
        match self {
            Self::Games => CategoryFilter::Only(Category::Games),
            Self::Apps => CategoryFilter::Only(Category::Apps),
            Self::Home | Self::About | Self::Cart => CategoryFilter::All,
        }
    }

    /// Heading shown at the top of the page.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Featured Products",
            Self::Games => Category::Games.label(),
            Self::Apps => Category::Apps.label(),
            Self::About => "About Us",
            Self::Cart => "Cart",
        }
    }
}

impl From<CategoryFilter> for Page {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => Self::Home,
            CategoryFilter::Only(Category::Games) => Self::Games,
            CategoryFilter::Only(Category::Apps) => Self::Apps,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Games => write!(f, "games"),
            Self::Apps => write!(f, "apps"),
            Self::About => write!(f, "about"),
            Self::Cart => write!(f, "cart"),
        }
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "games" => Ok(Self::Games),
            "apps" => Ok(Self::Apps),
            "about" => Ok(Self::About),
            "cart" => Ok(Self::Cart),
            _ => Err(format!("invalid page: {s}")),
        }
    }
}

/// State of one storefront session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    page: Page,
    search: String,
    cart: Cart,
}

impl AppState {
    /// Fresh session on the home page with an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Switch to another page. Search text and cart are kept.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// Replace the search box contents.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Selector for the current page.
    #[must_use]
    pub const fn category_filter(&self) -> CategoryFilter {
        self.page.category_filter()
    }

    /// Products to show on the current page for the current search.
    #[must_use]
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.filter(self.category_filter(), &self.search)
    }

    /// Number shown on the cart button, hidden when the cart is empty.
    #[must_use]
    pub fn cart_badge(&self) -> Option<usize> {
        match self.cart.line_count() {
            0 => None,
            count => Some(count),
        }
    }

    /// Heading for the current page.
    #[must_use]
    pub const fn page_title(&self) -> &'static str {
        self.page.title()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hista_core::ProductId;

    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = AppState::new();
        assert_eq!(state.page(), Page::Home);
        assert_eq!(state.search(), "");
        assert!(state.cart().is_empty());
        assert_eq!(state.cart_badge(), None);
        assert_eq!(state.page_title(), "Featured Products");
    }

    #[test]
    fn test_page_selectors() {
        assert_eq!(Page::Home.category_filter(), CategoryFilter::All);
        assert_eq!(Page::Games.category_filter(), CategoryFilter::Only(Category::Games));
        assert_eq!(Page::Apps.category_filter(), CategoryFilter::Only(Category::Apps));
        assert_eq!(Page::About.category_filter(), CategoryFilter::All);
        assert_eq!(Page::Cart.category_filter(), CategoryFilter::All);
    }

    #[test]
    fn test_page_for_selector_round_trips() {
        for page in [Page::Home, Page::Games, Page::Apps] {
            assert_eq!(Page::from(page.category_filter()), page);
        }
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(Page::Games.title(), "Games");
        assert_eq!(Page::Apps.title(), "Applications");
        assert_eq!(Page::About.title(), "About Us");
    }

    #[test]
    fn test_page_from_str() {
        for page in [Page::Home, Page::Games, Page::Apps, Page::About, Page::Cart] {
            assert_eq!(page.to_string().parse::<Page>().unwrap(), page);
        }
        assert!("checkout".parse::<Page>().is_err());
    }

    #[test]
    fn test_visible_products_follow_page_and_search() {
        let catalog = Catalog::builtin();
        let mut state = AppState::new();

        state.navigate(Page::Games);
        let names: Vec<_> = state
            .visible_products(&catalog)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["FIFA 24", "Call of Duty"]);

        state.set_search("CALL");
        let names: Vec<_> = state
            .visible_products(&catalog)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Call of Duty"]);

        state.navigate(Page::Apps);
        assert!(state.visible_products(&catalog).is_empty());
    }

    #[test]
    fn test_cart_survives_navigation() {
        let catalog = Catalog::builtin();
        let mut state = AppState::new();
        state.cart_mut().add(catalog.get(ProductId::new(4)).unwrap());
        state.cart_mut().add(catalog.get(ProductId::new(4)).unwrap());
        state.cart_mut().add(catalog.get(ProductId::new(2)).unwrap());
        state.navigate(Page::Cart);

        assert_eq!(state.cart_badge(), Some(2));
        assert_eq!(state.cart().unit_count(), 3);
        assert_eq!(state.page_title(), "Cart");
    }
}
