//! Storefront navigation tabs and their product predicates.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A storefront navigation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShopTab {
    #[default]
    Home,
    NewArrivals,
    Men,
    Women,
    Accessories,
    Sale,
}

/// Extra predicate a tab applies on top of the attribute filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabRule {
    /// No additional filtering.
    Everything,
    /// Only products flagged as new.
    NewOnly,
    /// Only products flagged as on sale.
    SaleOnly,
    /// Only products whose category is in the set.
    Categories(&'static [&'static str]),
}

/// Tab → rule lookup table.
///
/// Jackets and T-Shirts appear in both the men's and women's sets.
pub const TAB_RULES: [(ShopTab, TabRule); 6] = [
    (ShopTab::Home, TabRule::Everything),
    (ShopTab::NewArrivals, TabRule::NewOnly),
    (
        ShopTab::Men,
        TabRule::Categories(&["T-Shirts", "Jackets", "Pants", "Hoodies", "Blazers"]),
    ),
    (
        ShopTab::Women,
        TabRule::Categories(&["Sweaters", "Jackets", "T-Shirts"]),
    ),
    (ShopTab::Accessories, TabRule::Categories(&["Accessories"])),
    (ShopTab::Sale, TabRule::SaleOnly),
];

impl TabRule {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            TabRule::Everything => true,
            TabRule::NewOnly => product.is_new,
            TabRule::SaleOnly => product.is_sale,
            TabRule::Categories(set) => set.contains(&product.category.as_str()),
        }
    }
}

impl ShopTab {
    /// Tabs in navigation order.
    pub const ALL: [ShopTab; 6] = [
        ShopTab::Home,
        ShopTab::NewArrivals,
        ShopTab::Men,
        ShopTab::Women,
        ShopTab::Accessories,
        ShopTab::Sale,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ShopTab::Home => "home",
            ShopTab::NewArrivals => "new-arrivals",
            ShopTab::Men => "men",
            ShopTab::Women => "women",
            ShopTab::Accessories => "accessories",
            ShopTab::Sale => "sale",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            ShopTab::Home => "Home",
            ShopTab::NewArrivals => "New Arrivals",
            ShopTab::Men => "Men",
            ShopTab::Women => "Women",
            ShopTab::Accessories => "Accessories",
            ShopTab::Sale => "Sale",
        }
    }

    /// Heading shown above the product grid.
    pub fn page_title(&self) -> &'static str {
        match self {
            ShopTab::Home => "Featured Products",
            ShopTab::NewArrivals => "New Arrivals",
            ShopTab::Men => "Men's Collection",
            ShopTab::Women => "Women's Collection",
            ShopTab::Accessories => "Accessories",
            ShopTab::Sale => "Sale Items",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let slug = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    /// The rule from [`TAB_RULES`] for this tab.
    pub fn rule(&self) -> TabRule {
        TAB_RULES
            .iter()
            .find(|(tab, _)| tab == self)
            .map(|(_, rule)| *rule)
            .unwrap_or(TabRule::Everything)
    }

    /// Category set the tab restricts to, if it is category based.
    pub fn category_set(&self) -> Option<&'static [&'static str]> {
        match self.rule() {
            TabRule::Categories(set) => Some(set),
            _ => None,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.rule().matches(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(category: &str) -> Product {
        Product::new("p", "P", Money::from_major(10, Currency::USD), category, "B")
    }

    #[test]
    fn test_every_tab_has_a_rule() {
        for tab in ShopTab::ALL {
            assert_eq!(
                TAB_RULES.iter().filter(|(t, _)| *t == tab).count(),
                1,
                "{:?}",
                tab
            );
        }
    }

    #[test]
    fn test_men_and_women_overlap() {
        let men = ShopTab::Men.category_set().unwrap();
        let women = ShopTab::Women.category_set().unwrap();
        let mut shared: Vec<_> = men.iter().filter(|c| women.contains(*c)).collect();
        shared.sort();
        assert_eq!(shared, vec![&"Jackets", &"T-Shirts"]);
    }

    #[test]
    fn test_category_tabs() {
        assert!(ShopTab::Men.matches(&product("Blazers")));
        assert!(!ShopTab::Men.matches(&product("Sweaters")));
        assert!(ShopTab::Women.matches(&product("Sweaters")));
        assert!(ShopTab::Accessories.matches(&product("Accessories")));
        assert!(!ShopTab::Accessories.matches(&product("Jackets")));
        assert!(ShopTab::Home.matches(&product("Anything")));
    }

    #[test]
    fn test_flag_tabs() {
        let plain = product("Pants");
        assert!(!ShopTab::NewArrivals.matches(&plain));
        assert!(!ShopTab::Sale.matches(&plain));
        assert!(ShopTab::NewArrivals.matches(&plain.clone().new_arrival()));
        assert!(ShopTab::Sale.matches(&plain.on_sale()));
    }

    #[test]
    fn test_slug_roundtrip() {
        for tab in ShopTab::ALL {
            assert_eq!(ShopTab::from_str(tab.slug()), Some(tab));
        }
        assert_eq!(ShopTab::from_str("NEW-ARRIVALS"), Some(ShopTab::NewArrivals));
        assert_eq!(ShopTab::from_str("kids"), None);
        assert_eq!(
            serde_json::to_string(&ShopTab::NewArrivals).unwrap(),
            "\"new-arrivals\""
        );
    }
}
