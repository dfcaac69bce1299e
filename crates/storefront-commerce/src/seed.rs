//! Built-in demo data: the storefront catalog and a handful of orders for
//! the admin console.

use chrono::NaiveDate;

use crate::admin::{Order, OrderItem, OrderStatus};
use crate::catalog::Product;
use crate::ids::OrderId;
use crate::money::{Currency, Money};

const USD: Currency = Currency::USD;

fn photo(id: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=800"
    )
}

fn usd(amount: i64) -> Money {
    Money::from_major(amount, USD)
}

/// The eight products of the demo storefront, in featured order.
pub fn products() -> Vec<Product> {
    vec![
        Product::new("1", "Premium Cotton T-Shirt", usd(79), "T-Shirts", "Urban Essentials")
            .with_original_price(usd(99))
            .with_images([photo(996329), photo(1183266)])
            .with_description(
                "Crafted from 100% organic cotton, this premium t-shirt offers unmatched comfort and style.",
            )
            .with_sizes(["XS", "S", "M", "L", "XL"])
            .with_colors(["Black", "White", "Gray", "Navy"])
            .with_rating(4.8, 124)
            .on_sale()
            .new_arrival(),
        Product::new("2", "Vintage Denim Jacket", usd(189), "Jackets", "Heritage Denim")
            .with_images([photo(1124465), photo(1040945)])
            .with_description(
                "Classic vintage-inspired denim jacket with modern fit and premium construction.",
            )
            .with_sizes(["S", "M", "L", "XL"])
            .with_colors(["Light Blue", "Dark Blue", "Black"])
            .with_rating(4.9, 89)
            .new_arrival(),
        Product::new("3", "Slim Fit Chinos", usd(129), "Pants", "Modern Fit")
            .with_images([photo(1598507), photo(1598508)])
            .with_description(
                "Versatile slim-fit chinos perfect for both casual and business casual occasions.",
            )
            .with_sizes(["28", "30", "32", "34", "36"])
            .with_colors(["Khaki", "Navy", "Black", "Olive"])
            .with_rating(4.7, 203),
        Product::new("4", "Cashmere Blend Sweater", usd(259), "Sweaters", "Luxury Knits")
            .with_images([photo(1040945), photo(1124465)])
            .with_description("Luxurious cashmere blend sweater with superior softness and warmth.")
            .with_sizes(["S", "M", "L", "XL"])
            .with_colors(["Cream", "Charcoal", "Burgundy"])
            .with_rating(4.9, 76)
            .new_arrival(),
        Product::new("5", "Athletic Performance Hoodie", usd(149), "Hoodies", "Active Wear")
            .with_images([photo(1183266), photo(996329)])
            .with_description(
                "High-performance hoodie with moisture-wicking technology and ergonomic design.",
            )
            .with_sizes(["S", "M", "L", "XL", "XXL"])
            .with_colors(["Black", "Gray", "Navy", "Forest Green"])
            .with_rating(4.6, 158),
        Product::new("6", "Tailored Blazer", usd(349), "Blazers", "Formal Elegance")
            .with_images([photo(1040945), photo(1124465)])
            .with_description(
                "Perfectly tailored blazer crafted from premium wool blend for sophisticated style.",
            )
            .with_sizes(["36", "38", "40", "42", "44"])
            .with_colors(["Navy", "Charcoal", "Black"])
            .with_rating(4.8, 94),
        Product::new("7", "Silk Blouse", usd(199), "T-Shirts", "Elegant Essentials")
            .with_original_price(usd(249))
            .with_images([photo(1040945), photo(1124465)])
            .with_description("Luxurious silk blouse with elegant draping and timeless appeal.")
            .with_sizes(["XS", "S", "M", "L", "XL"])
            .with_colors(["Ivory", "Black", "Blush", "Navy"])
            .with_rating(4.7, 156)
            .on_sale(),
        Product::new("8", "Leather Crossbody Bag", usd(299), "Accessories", "Luxury Leather")
            .with_images([photo(1040945), photo(1124465)])
            .with_description(
                "Handcrafted leather crossbody bag with premium hardware and timeless design.",
            )
            .with_sizes(["One Size"])
            .with_colors(["Black", "Brown", "Tan"])
            .with_rating(4.9, 89)
            .new_arrival(),
    ]
}

fn item(name: &str, quantity: u32, price: i64, size: &str, color: &str) -> OrderItem {
    OrderItem {
        product_name: name.to_string(),
        quantity,
        price: usd(price),
        size: size.to_string(),
        color: color.to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Sample orders shown in the admin console.
pub fn orders() -> Vec<Order> {
    vec![
        Order::new(
            OrderId::new("#1234"),
            "John Doe",
            "john.doe@example.com",
            vec![item("Premium Cotton T-Shirt", 2, 79, "M", "Black")],
            "12 Market St, San Francisco, CA",
            date(2024, 1, 15),
        )
        .with_status(OrderStatus::Delivered),
        Order::new(
            OrderId::new("#1235"),
            "Jane Smith",
            "jane.smith@example.com",
            vec![
                item("Silk Blouse", 1, 199, "S", "Ivory"),
                item("Leather Crossbody Bag", 1, 299, "One Size", "Tan"),
            ],
            "48 Elm Ave, Portland, OR",
            date(2024, 1, 15),
        )
        .with_status(OrderStatus::Processing),
        Order::new(
            OrderId::new("#1236"),
            "Mike Johnson",
            "mike.johnson@example.com",
            vec![item("Vintage Denim Jacket", 1, 189, "L", "Dark Blue")],
            "7 Harbor Rd, Boston, MA",
            date(2024, 1, 14),
        )
        .with_status(OrderStatus::Shipped),
        Order::new(
            OrderId::new("#1237"),
            "Sarah Wilson",
            "sarah.wilson@example.com",
            vec![item("Cashmere Blend Sweater", 1, 259, "M", "Cream")],
            "301 Pine St, Seattle, WA",
            date(2024, 1, 14),
        ),
    ]
}

/// Descriptions for the seeded category records, keyed by name.
pub fn category_description(name: &str) -> &'static str {
    match name {
        "T-Shirts" => "Everyday tees and tops",
        "Jackets" => "Outerwear for every season",
        "Pants" => "Chinos, trousers and denim",
        "Sweaters" => "Knitwear and cardigans",
        "Hoodies" => "Casual and athletic hoodies",
        "Blazers" => "Tailored jackets",
        "Accessories" => "Bags and finishing touches",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_products_are_valid() {
        for product in products() {
            assert!(product.validate().is_ok(), "{}", product.id);
        }
    }

    #[test]
    fn test_seed_orders_totals() {
        let orders = orders();
        assert_eq!(orders.len(), 4);
        assert_eq!(orders[0].total, usd(158));
        assert_eq!(orders[1].total, usd(498));
    }
}
