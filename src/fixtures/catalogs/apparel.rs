// fixtures/catalogs/apparel.rs
//
// Apparel catalogs with a mix of in-stock and sold-out products.

use rust_decimal::Decimal;

use crate::fixtures::TestCatalog;
use crate::web_app::model::Product;

fn product(id: i64, name: &str, description: &str, price: Decimal, available: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        image: format!("https://images.example.com/products/{id}.jpg"),
        price,
        available,
    }
}

/// Two products: an in-stock shirt and a sold-out hat
pub struct ShirtAndHatCatalog;

impl TestCatalog for ShirtAndHatCatalog {
    fn products() -> Vec<Product> {
        vec![
            product(1, "Red Shirt", "Soft cotton tee", Decimal::new(1000, 2), 2),
            product(2, "Blue Hat", "Wide-brim sun hat", Decimal::new(500, 2), 0),
        ]
    }
}

/// A larger catalog for filter and ordering checks
pub struct ApparelCatalog;

impl TestCatalog for ApparelCatalog {
    fn products() -> Vec<Product> {
        vec![
            product(10, "Linen Shirt", "Breathable summer shirt", Decimal::new(3499, 2), 5),
            product(11, "Denim Jacket", "Classic blue denim", Decimal::new(8900, 2), 1),
            product(12, "T-SHIRT Pack", "Three plain tees", Decimal::new(2500, 2), 0),
            product(13, "Wool Beanie", "Warm knit hat", Decimal::new(1550, 2), 12),
            product(14, "Overshirt", "Heavy flannel", Decimal::new(6000, 2), 3),
            product(15, "Straw Hat", "Beach essential", Decimal::new(1999, 2), 0),
        ]
    }
}
