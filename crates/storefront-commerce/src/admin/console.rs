//! The admin console: in-memory CRUD over products, categories, brands and
//! orders, plus the dashboard figures.

use crate::admin::drafts::{BrandDraft, CategoryDraft, ProductDraft};
use crate::admin::orders::{filter_orders, Order, OrderQuery, OrderStatus};
use crate::catalog::{Brand, Catalog, Category, Product, ALL};
use crate::error::CommerceError;
use crate::ids::{BrandId, CategoryId, OrderId, ProductId};
use crate::money::{Currency, Money};
use crate::seed;
use serde::{Deserialize, Serialize};

/// Number of orders listed under "Recent Orders".
pub const RECENT_ORDERS: usize = 5;

/// Sidebar sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdminSection {
    #[default]
    Dashboard,
    Products,
    Categories,
    Brands,
    Orders,
    Users,
    Settings,
}

impl AdminSection {
    pub const ALL: [AdminSection; 7] = [
        AdminSection::Dashboard,
        AdminSection::Products,
        AdminSection::Categories,
        AdminSection::Brands,
        AdminSection::Orders,
        AdminSection::Users,
        AdminSection::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "dashboard",
            AdminSection::Products => "products",
            AdminSection::Categories => "categories",
            AdminSection::Brands => "brands",
            AdminSection::Orders => "orders",
            AdminSection::Users => "users",
            AdminSection::Settings => "settings",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "Dashboard",
            AdminSection::Products => "Products",
            AdminSection::Categories => "Categories",
            AdminSection::Brands => "Brands",
            AdminSection::Orders => "Orders",
            AdminSection::Users => "Users",
            AdminSection::Settings => "Settings",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|section| section.as_str() == s)
    }

    /// Sections that only render a placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, AdminSection::Users | AdminSection::Settings)
    }
}

/// Figures on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub product_count: usize,
    pub order_count: usize,
    /// Sum of order totals, cancelled orders excluded.
    pub revenue: Money,
    /// Count per status, in [`OrderStatus::ALL`] order.
    pub orders_by_status: Vec<(OrderStatus, usize)>,
    /// Newest orders first.
    pub recent_orders: Vec<Order>,
}

/// Admin console state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminConsole {
    products: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
    orders: Vec<Order>,
    currency: Currency,
    section: AdminSection,
}

impl AdminConsole {
    /// Console over a catalog's products.
    ///
    /// Category and brand records are derived from the catalog's option
    /// lists; the sample orders are attached.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let categories = catalog
            .category_options()
            .into_iter()
            .filter(|name| *name != ALL)
            .enumerate()
            .map(|(i, name)| {
                Category::new(
                    CategoryId::new((i + 1).to_string()),
                    name,
                    seed::category_description(name),
                )
            })
            .collect();
        let brands = catalog
            .brand_options()
            .into_iter()
            .filter(|name| *name != ALL)
            .enumerate()
            .map(|(i, name)| Brand::new(BrandId::new((i + 1).to_string()), name, ""))
            .collect();

        let mut console = Self {
            products: catalog.products().to_vec(),
            categories,
            brands,
            orders: seed::orders(),
            currency: catalog.currency(),
            section: AdminSection::default(),
        };
        console.recount();
        console
    }

    /// Console over the built-in catalog.
    pub fn seed() -> Self {
        Self::from_catalog(&Catalog::seed())
    }

    pub fn section(&self) -> AdminSection {
        self.section
    }

    pub fn set_section(&mut self, section: AdminSection) {
        self.section = section;
    }

    // Products

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products whose name, category or brand contains `term`.
    pub fn search_products(&self, term: &str) -> Vec<&Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.category.to_lowercase().contains(&term)
                    || p.brand.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Pre-filled editor for an existing product.
    pub fn edit_draft(&self, id: &ProductId) -> Result<ProductDraft, CommerceError> {
        self.product(id)
            .map(ProductDraft::from)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn add_product(&mut self, draft: ProductDraft) -> Result<ProductId, CommerceError> {
        let id = ProductId::generate();
        let product = draft.into_product(id.clone(), self.currency)?;
        tracing::info!(product = %id, name = %product.name, "product added");
        self.products.push(product);
        self.recount();
        Ok(id)
    }

    pub fn update_product(&mut self, id: &ProductId, draft: ProductDraft) -> Result<(), CommerceError> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        self.products[index] = draft.into_product(id.clone(), self.currency)?;
        tracing::info!(product = %id, "product updated");
        self.recount();
        Ok(())
    }

    pub fn delete_product(&mut self, id: &ProductId) -> Result<Product, CommerceError> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        let removed = self.products.remove(index);
        tracing::info!(product = %id, "product deleted");
        self.recount();
        Ok(removed)
    }

    // Categories

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn search_categories(&self, term: &str) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.matches(term)).collect()
    }

    pub fn add_category(&mut self, draft: CategoryDraft) -> Result<CategoryId, CommerceError> {
        draft.validate()?;
        let id = CategoryId::generate();
        tracing::info!(category = %id, name = %draft.name, "category added");
        self.categories
            .push(Category::new(id.clone(), draft.name, draft.description));
        self.recount();
        Ok(id)
    }

    pub fn update_category(&mut self, id: &CategoryId, draft: CategoryDraft) -> Result<(), CommerceError> {
        draft.validate()?;
        let category = self
            .categories
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| CommerceError::CategoryNotFound(id.to_string()))?;
        category.name = draft.name;
        category.description = draft.description;
        tracing::info!(category = %id, "category updated");
        self.recount();
        Ok(())
    }

    /// Remove a category record. Products keep their category name.
    pub fn delete_category(&mut self, id: &CategoryId) -> Result<Category, CommerceError> {
        let index = self
            .categories
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| CommerceError::CategoryNotFound(id.to_string()))?;
        tracing::info!(category = %id, "category deleted");
        Ok(self.categories.remove(index))
    }

    // Brands

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn search_brands(&self, term: &str) -> Vec<&Brand> {
        self.brands.iter().filter(|b| b.matches(term)).collect()
    }

    pub fn add_brand(&mut self, draft: BrandDraft) -> Result<BrandId, CommerceError> {
        draft.validate()?;
        let id = BrandId::generate();
        let mut brand = Brand::new(id.clone(), draft.name.clone(), draft.description.clone());
        brand.logo = draft.logo();
        tracing::info!(brand = %id, name = %brand.name, "brand added");
        self.brands.push(brand);
        self.recount();
        Ok(id)
    }

    pub fn update_brand(&mut self, id: &BrandId, draft: BrandDraft) -> Result<(), CommerceError> {
        draft.validate()?;
        let logo = draft.logo();
        let brand = self
            .brands
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| CommerceError::BrandNotFound(id.to_string()))?;
        brand.name = draft.name;
        brand.description = draft.description;
        brand.logo = logo;
        tracing::info!(brand = %id, "brand updated");
        self.recount();
        Ok(())
    }

    /// Remove a brand record. Products keep their brand name.
    pub fn delete_brand(&mut self, id: &BrandId) -> Result<Brand, CommerceError> {
        let index = self
            .brands
            .iter()
            .position(|b| &b.id == id)
            .ok_or_else(|| CommerceError::BrandNotFound(id.to_string()))?;
        tracing::info!(brand = %id, "brand deleted");
        Ok(self.brands.remove(index))
    }

    // Orders

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    pub fn filter_orders(&self, query: &OrderQuery) -> Vec<&Order> {
        filter_orders(&self.orders, query)
    }

    /// Set an order's status. Any transition is allowed.
    pub fn update_order_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<(), CommerceError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))?;
        tracing::info!(
            order = %id,
            from = order.status.as_str(),
            to = status.as_str(),
            "order status updated"
        );
        order.status = status;
        Ok(())
    }

    // Dashboard

    pub fn dashboard(&self) -> DashboardStats {
        let revenue = self
            .orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .fold(Money::zero(self.currency), |acc, o| acc + o.total);

        let orders_by_status = OrderStatus::ALL
            .into_iter()
            .map(|status| (status, self.orders.iter().filter(|o| o.status == status).count()))
            .collect();

        let mut recent_orders = self.orders.clone();
        recent_orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        recent_orders.truncate(RECENT_ORDERS);

        DashboardStats {
            product_count: self.products.len(),
            order_count: self.orders.len(),
            revenue,
            orders_by_status,
            recent_orders,
        }
    }

    fn recount(&mut self) {
        for category in &mut self.categories {
            category.product_count = self
                .products
                .iter()
                .filter(|p| p.category == category.name)
                .count();
        }
        for brand in &mut self.brands {
            brand.product_count = self.products.iter().filter(|p| p.brand == brand.name).count();
        }
    }
}

impl Default for AdminConsole {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft::new()
            .with_name("Wool Scarf")
            .with_price(59.0)
            .with_category("Accessories")
            .with_brand("Luxury Knits")
            .with_description("Warm merino scarf")
            .with_images(["scarf.jpg"])
            .with_sizes(["One Size"])
            .with_colors(["Gray"])
    }

    fn category_count(console: &AdminConsole, name: &str) -> usize {
        console
            .categories()
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.product_count)
            .unwrap()
    }

    #[test]
    fn test_seed_records() {
        let console = AdminConsole::seed();
        assert_eq!(console.products().len(), 8);
        assert_eq!(console.categories().len(), 7);
        assert_eq!(console.brands().len(), 8);
        assert_eq!(category_count(&console, "T-Shirts"), 2);
        assert_eq!(console.section(), AdminSection::Dashboard);
    }

    #[test]
    fn test_product_crud_keeps_counts() {
        let mut console = AdminConsole::seed();
        let id = console.add_product(draft()).unwrap();
        assert_eq!(console.products().len(), 9);
        assert_eq!(category_count(&console, "Accessories"), 2);

        let edited = console.edit_draft(&id).unwrap().with_category("Sweaters");
        console.update_product(&id, edited).unwrap();
        assert_eq!(category_count(&console, "Accessories"), 1);
        assert_eq!(category_count(&console, "Sweaters"), 2);

        console.delete_product(&id).unwrap();
        assert_eq!(console.products().len(), 8);
        assert_eq!(category_count(&console, "Sweaters"), 1);
    }

    #[test]
    fn test_invalid_draft_rejected() {
        let mut console = AdminConsole::seed();
        let err = console.add_product(draft().with_name("")).unwrap_err();
        assert_eq!(err, CommerceError::MissingField("name"));
        assert_eq!(console.products().len(), 8);
    }

    #[test]
    fn test_unknown_ids() {
        let mut console = AdminConsole::seed();
        assert!(matches!(
            console.delete_product(&ProductId::new("nope")),
            Err(CommerceError::ProductNotFound(_))
        ));
        assert!(matches!(
            console.update_order_status(&OrderId::new("#9999"), OrderStatus::Shipped),
            Err(CommerceError::OrderNotFound(_))
        ));
        assert!(console.delete_brand(&BrandId::new("99")).is_err());
    }

    #[test]
    fn test_taxonomy_crud() {
        let mut console = AdminConsole::seed();
        let id = console
            .add_category(CategoryDraft::new("Shoes", "Footwear"))
            .unwrap();
        assert_eq!(console.search_categories("SHO").len(), 1);
        assert_eq!(category_count(&console, "Shoes"), 0);

        console
            .update_category(&id, CategoryDraft::new("Hoodies", "Dup name"))
            .unwrap();
        assert_eq!(console.search_categories("hood").len(), 2);
        console.delete_category(&id).unwrap();
        assert_eq!(console.categories().len(), 7);

        let brand = console
            .add_brand(BrandDraft::new("Acme", "").with_logo("  "))
            .unwrap();
        assert_eq!(console.brands().last().unwrap().logo, None);
        assert!(console.add_brand(BrandDraft::new(" ", "")).is_err());
        console.delete_brand(&brand).unwrap();
        assert_eq!(console.brands().len(), 8);
    }

    #[test]
    fn test_dashboard() {
        let mut console = AdminConsole::seed();
        let stats = console.dashboard();
        assert_eq!(stats.product_count, 8);
        assert_eq!(stats.order_count, 4);
        assert_eq!(stats.revenue, Money::from_major(158 + 498 + 189 + 259, Currency::USD));
        assert_eq!(stats.recent_orders[0].id.as_str(), "#1234");

        console
            .update_order_status(&OrderId::new("#1235"), OrderStatus::Cancelled)
            .unwrap();
        let stats = console.dashboard();
        assert_eq!(stats.revenue, Money::from_major(158 + 189 + 259, Currency::USD));
        assert!(stats
            .orders_by_status
            .contains(&(OrderStatus::Cancelled, 1)));
    }

    #[test]
    fn test_sections() {
        assert_eq!(AdminSection::from_str("Orders"), Some(AdminSection::Orders));
        assert!(AdminSection::Users.is_placeholder());
        assert!(!AdminSection::Brands.is_placeholder());
    }
}
