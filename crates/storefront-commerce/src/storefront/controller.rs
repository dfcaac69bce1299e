//! The storefront controller: user actions over catalog, filters, cart and
//! view state.

use crate::cart::{CartLedger, CartSummary, CheckoutOutcome, LineKey};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::{visible_products, FilterSelection, PriceRange, ShopTab, SortKey};
use crate::storefront::ViewState;

/// One shopper's session.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    selection: FilterSelection,
    cart: CartLedger,
    view: ViewState,
}

impl Storefront {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: FilterSelection::default(),
            cart: CartLedger::new(),
            view: ViewState::new(),
        }
    }

    /// Start from a given selection instead of the defaults.
    pub fn with_selection(mut self, selection: FilterSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    // Browsing

    /// Switch tabs, resetting category, brand, price range and sort.
    pub fn change_tab(&mut self, tab: ShopTab) {
        tracing::debug!(tab = tab.slug(), "tab changed");
        self.selection = FilterSelection::for_tab(tab);
    }

    /// The hero's "Shop Now" button. Jumps to new arrivals and leaves the
    /// other filters alone.
    pub fn shop_now(&mut self) {
        self.selection.tab = ShopTab::NewArrivals;
    }

    pub fn set_category(&mut self, label: &str) {
        self.selection = self.selection.clone().with_category(label);
    }

    pub fn set_brand(&mut self, label: &str) {
        self.selection = self.selection.clone().with_brand(label);
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.selection.price_range = range;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.selection.sort = sort;
    }

    /// Set the sort from a menu slug; unknown slugs select the default.
    pub fn set_sort_slug(&mut self, slug: &str) {
        let sort = SortKey::from_str(slug).unwrap_or_else(|| {
            tracing::warn!(slug, "unknown sort key, using featured");
            SortKey::default()
        });
        self.set_sort(sort);
    }

    pub fn clear_filters(&mut self) {
        self.selection.clear_filters();
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        visible_products(&self.catalog, &self.selection)
    }

    pub fn result_count(&self) -> usize {
        self.visible_products().len()
    }

    pub fn page_title(&self) -> &'static str {
        self.selection.tab.page_title()
    }

    /// The hero banner shows on the home tab only.
    pub fn shows_hero(&self) -> bool {
        self.selection.tab == ShopTab::Home
    }

    // Quick view

    pub fn quick_view(&mut self, id: &ProductId) -> Result<&Product, CommerceError> {
        let product = self
            .catalog
            .find(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        self.view.open_quick_view(product.id.clone());
        Ok(product)
    }

    pub fn close_quick_view(&mut self) {
        self.view.close_quick_view();
    }

    /// Product in the quick-view modal, if it is open.
    pub fn quick_view_product(&self) -> Option<&Product> {
        if !self.view.quick_view_open {
            return None;
        }
        self.view
            .selected_product
            .as_ref()
            .and_then(|id| self.catalog.find(id))
    }

    /// "Add to Cart" inside the modal.
    ///
    /// Needs both a size and a color; on success the modal closes.
    pub fn add_from_quick_view(&mut self, size: Option<&str>, color: Option<&str>) -> Option<LineKey> {
        let (size, color) = match (size, color) {
            (Some(s), Some(c)) if !s.is_empty() && !c.is_empty() => (s, c),
            _ => return None,
        };
        let product = self.quick_view_product()?.clone();
        let key = self.cart.add_item(&product, Some(size), Some(color));
        self.view.close_quick_view();
        Some(key)
    }

    // Cart

    pub fn add_to_cart(
        &mut self,
        id: &ProductId,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<LineKey, CommerceError> {
        let product = self
            .catalog
            .find(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        Ok(self.cart.add_item(product, size, color))
    }

    pub fn open_cart(&mut self) {
        self.view.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.view.cart_open = false;
    }

    pub fn update_quantity(&mut self, key: &LineKey, quantity: i64) -> bool {
        self.cart.set_quantity(key, quantity)
    }

    pub fn remove_from_cart(&mut self, key: &LineKey) -> bool {
        self.cart.remove_item(key)
    }

    /// Units shown on the header's cart icon.
    pub fn cart_badge(&self) -> i64 {
        self.cart.item_count()
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary()
    }

    pub fn checkout(&self) -> CheckoutOutcome {
        self.cart.checkout()
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(Catalog::seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    fn visible_ids(store: &Storefront) -> Vec<String> {
        store.visible_products().iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_change_tab_resets_filters() {
        let mut store = Storefront::default();
        store.set_category("Jackets");
        store.set_brand("Heritage Denim");
        store.set_price_range(PriceRange::major(100, 200, Currency::USD));
        store.set_sort(SortKey::Rating);

        store.change_tab(ShopTab::Men);
        assert_eq!(store.selection(), &FilterSelection::for_tab(ShopTab::Men));
        assert_eq!(store.page_title(), "Men's Collection");
        assert!(!store.shows_hero());
    }

    #[test]
    fn test_shop_now_keeps_filters() {
        let mut store = Storefront::default();
        store.set_category("Jackets");
        store.shop_now();
        assert_eq!(store.selection().tab, ShopTab::NewArrivals);
        assert_eq!(store.selection().category.label(), "Jackets");
        assert_eq!(visible_ids(&store), vec!["2"]);
    }

    #[test]
    fn test_result_count_and_clear() {
        let mut store = Storefront::default();
        assert!(store.shows_hero());
        store.set_price_range(PriceRange::major(0, 100, Currency::USD));
        assert_eq!(store.result_count(), 1);
        store.clear_filters();
        assert_eq!(store.result_count(), 8);
    }

    #[test]
    fn test_unknown_sort_slug_falls_back() {
        let mut store = Storefront::default();
        store.set_sort_slug("price-high");
        assert_eq!(store.selection().sort, SortKey::PriceHigh);
        store.set_sort_slug("bestselling");
        assert_eq!(store.selection().sort, SortKey::Featured);
    }

    #[test]
    fn test_quick_view_requires_size_and_color() {
        let mut store = Storefront::default();
        store.quick_view(&id("2")).unwrap();
        assert!(store.view().quick_view_open);

        assert_eq!(store.add_from_quick_view(Some("M"), None), None);
        assert_eq!(store.add_from_quick_view(Some(""), Some("Black")), None);
        assert!(store.cart().is_empty());
        assert!(store.view().quick_view_open);

        let key = store.add_from_quick_view(Some("M"), Some("Black")).unwrap();
        assert_eq!(key.to_string(), "2-M-Black");
        assert!(!store.view().quick_view_open);
        assert_eq!(store.cart_badge(), 1);
    }

    #[test]
    fn test_quick_view_unknown_product() {
        let mut store = Storefront::default();
        assert!(matches!(
            store.quick_view(&id("42")),
            Err(CommerceError::ProductNotFound(_))
        ));
        assert!(!store.view().quick_view_open);
        assert_eq!(store.add_from_quick_view(Some("M"), Some("Black")), None);
    }

    #[test]
    fn test_cart_actions() {
        let mut store = Storefront::default();
        let key = store.add_to_cart(&id("1"), Some("M"), Some("Black")).unwrap();
        store.add_to_cart(&id("1"), Some("M"), Some("Black")).unwrap();
        assert_eq!(store.cart_badge(), 2);
        assert_eq!(store.cart_total(), Money::from_major(158, Currency::USD));

        store.open_cart();
        store.quick_view(&id("3")).unwrap();
        assert!(store.view().cart_open && store.view().quick_view_open);

        assert!(store.update_quantity(&key, 0));
        assert!(store.cart().is_empty());
        assert!(!store.remove_from_cart(&key));
        store.close_cart();
        assert!(!store.view().cart_open);
        assert_eq!(store.checkout(), CheckoutOutcome::Unavailable);
    }
}
