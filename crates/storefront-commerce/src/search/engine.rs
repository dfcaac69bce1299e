//! The filter/sort pipeline.

use crate::catalog::{Catalog, Product};
use crate::search::FilterSelection;

/// Products visible for `selection`, in display order.
///
/// Attribute filters run first, then the tab predicate, then a stable sort.
/// Neither the catalog nor the selection is touched.
pub fn visible_products<'a>(catalog: &'a Catalog, selection: &FilterSelection) -> Vec<&'a Product> {
    filter_products(catalog.products(), selection)
}

/// [`visible_products`] over any product slice.
pub fn filter_products<'a>(products: &'a [Product], selection: &FilterSelection) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = products
        .iter()
        .filter(|p| selection.attributes_match(p))
        .filter(|p| selection.tab.matches(p))
        .collect();

    selection.sort.apply(&mut visible);

    tracing::debug!(
        tab = selection.tab.slug(),
        category = selection.category.label(),
        brand = selection.brand.label(),
        sort = selection.sort.slug(),
        total = products.len(),
        visible = visible.len(),
        "recomputed visible products"
    );

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use crate::search::{PriceRange, ShopTab, SortKey};

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    fn two_products() -> Vec<Product> {
        vec![
            Product::new("1", "Tee", Money::from_major(79, Currency::USD), "T-Shirts", "A")
                .new_arrival(),
            Product::new("2", "Jacket", Money::from_major(189, Currency::USD), "Jackets", "B"),
        ]
    }

    #[test]
    fn test_new_arrivals_tab() {
        let products = two_products();
        let selection = FilterSelection::for_tab(ShopTab::NewArrivals);
        assert_eq!(ids(&filter_products(&products, &selection)), vec!["1"]);
    }

    #[test]
    fn test_home_price_high() {
        let products = two_products();
        let selection = FilterSelection::new().with_sort(SortKey::PriceHigh);
        assert_eq!(ids(&filter_products(&products, &selection)), vec!["2", "1"]);
    }

    #[test]
    fn test_seed_tabs() {
        let catalog = Catalog::seed();
        let tab = |t| ids(&visible_products(&catalog, &FilterSelection::for_tab(t)));

        assert_eq!(tab(ShopTab::Home), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert_eq!(tab(ShopTab::NewArrivals), vec!["1", "2", "4", "8"]);
        assert_eq!(tab(ShopTab::Men), vec!["1", "2", "3", "5", "6", "7"]);
        assert_eq!(tab(ShopTab::Women), vec!["1", "2", "4", "7"]);
        assert_eq!(tab(ShopTab::Accessories), vec!["8"]);
        assert_eq!(tab(ShopTab::Sale), vec!["1", "7"]);
    }

    #[test]
    fn test_attribute_filters_combine_with_tab() {
        let catalog = Catalog::seed();
        let selection = FilterSelection::for_tab(ShopTab::Men)
            .with_category("T-Shirts")
            .with_price_range(PriceRange::major(0, 100, Currency::USD));
        assert_eq!(ids(&visible_products(&catalog, &selection)), vec!["1"]);

        let selection = FilterSelection::for_tab(ShopTab::Accessories).with_category("Jackets");
        assert!(visible_products(&catalog, &selection).is_empty());
    }

    #[test]
    fn test_default_range_hides_nothing_in_seed() {
        let catalog = Catalog::seed();
        let visible = visible_products(&catalog, &FilterSelection::new());
        assert_eq!(visible.len(), catalog.len());
    }

    #[test]
    fn test_every_result_satisfies_predicates() {
        let catalog = Catalog::seed();
        for tab in ShopTab::ALL {
            for sort in SortKey::ALL {
                for brand in catalog.brand_options() {
                    let selection = FilterSelection::for_tab(tab)
                        .with_brand(brand)
                        .with_sort(sort)
                        .with_price_range(PriceRange::major(100, 300, Currency::USD));
                    let visible = visible_products(&catalog, &selection);
                    assert!(visible.iter().all(|p| selection.matches(p)));
                    let expected = catalog.products().iter().filter(|p| selection.matches(p)).count();
                    assert_eq!(visible.len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_catalog_untouched() {
        let catalog = Catalog::seed();
        let before = catalog.clone();
        let _ = visible_products(&catalog, &FilterSelection::new().with_sort(SortKey::Rating));
        assert_eq!(catalog, before);
    }
}
