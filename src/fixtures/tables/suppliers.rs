// fixtures/tables/suppliers.rs
//
// Sample suppliers grouped by category. Prices are whole units of the base
// currency; percent changes are stored in tenths (25 => 2.5%).

use std::sync::OnceLock;

use rust_decimal::Decimal;

use crate::fixtures::FixtureTable;
use crate::web_app::model::{Category, Product, Supplier, Trend};

struct RawProduct {
    name: &'static str,
    price: i64,
    trend: Trend,
    change_tenths: i64,
}

struct RawSupplier {
    id: u32,
    name: &'static str,
    location: &'static str,
    lat: f64,
    lng: f64,
    phone: &'static str,
    category: Category,
    products: [RawProduct; 3],
}

const fn p(name: &'static str, price: i64, trend: Trend, change_tenths: i64) -> RawProduct {
    RawProduct { name, price, trend, change_tenths }
}

const RAW_SUPPLIERS: [RawSupplier; 7] = [
    RawSupplier {
        id: 1,
        name: "Fresh Valley Farms",
        location: "Downtown Market",
        lat: 40.7128,
        lng: -74.0060,
        phone: "+1234567890",
        category: Category::Food,
        products: [
            p("Rice (50kg)", 45, Trend::Up, 25),
            p("Beans (25kg)", 32, Trend::Down, -12),
            p("Cooking Oil (5L)", 18, Trend::Up, 8),
        ],
    },
    RawSupplier {
        id: 2,
        name: "Golden Harvest Co.",
        location: "North Plaza",
        lat: 40.7589,
        lng: -73.9851,
        phone: "+1234567891",
        category: Category::Food,
        products: [
            p("Rice (50kg)", 42, Trend::Down, -15),
            p("Beans (25kg)", 35, Trend::Up, 18),
            p("Sugar (50kg)", 28, Trend::Stable, 0),
        ],
    },
    RawSupplier {
        id: 3,
        name: "Metro Foods Ltd",
        location: "Central Station",
        lat: 40.7505,
        lng: -73.9934,
        phone: "+1234567892",
        category: Category::Food,
        products: [
            p("Cooking Oil (5L)", 16, Trend::Down, -21),
            p("Flour (25kg)", 22, Trend::Up, 15),
            p("Salt (10kg)", 8, Trend::Stable, 0),
        ],
    },
    RawSupplier {
        id: 4,
        name: "Fashion Forward",
        location: "Style District",
        lat: 40.7282,
        lng: -73.9942,
        phone: "+1234567893",
        category: Category::Clothing,
        products: [
            p("Cotton T-Shirts (dozen)", 85, Trend::Up, 32),
            p("Jeans (per piece)", 25, Trend::Stable, 0),
            p("Sneakers (pair)", 45, Trend::Down, -28),
        ],
    },
    RawSupplier {
        id: 5,
        name: "Urban Threads",
        location: "Fashion Mall",
        lat: 40.7614,
        lng: -73.9776,
        phone: "+1234567894",
        category: Category::Clothing,
        products: [
            p("Cotton T-Shirts (dozen)", 78, Trend::Down, -15),
            p("Dress Shirts (piece)", 35, Trend::Up, 21),
            p("Casual Shoes (pair)", 38, Trend::Up, 19),
        ],
    },
    RawSupplier {
        id: 6,
        name: "Tech Solutions",
        location: "Electronics Hub",
        lat: 40.7831,
        lng: -73.9712,
        phone: "+1234567895",
        category: Category::Electronics,
        products: [
            p("Phone Cases (10 pack)", 45, Trend::Down, -32),
            p("USB Cables (5 pack)", 22, Trend::Stable, 0),
            p("Power Banks (piece)", 35, Trend::Up, 25),
        ],
    },
    RawSupplier {
        id: 7,
        name: "Digital World",
        location: "Tech Plaza",
        lat: 40.7411,
        lng: -74.0012,
        phone: "+1234567896",
        category: Category::Electronics,
        products: [
            p("Headphones (piece)", 28, Trend::Up, 18),
            p("Screen Protectors (10 pack)", 15, Trend::Down, -11),
            p("Bluetooth Speakers", 55, Trend::Stable, 0),
        ],
    },
];

static SUPPLIERS: OnceLock<Vec<Supplier>> = OnceLock::new();

pub struct SuppliersTable;

impl SuppliersTable {
    /// Suppliers of one category, in declaration order
    pub fn for_category(category: Category) -> impl Iterator<Item = &'static Supplier> {
        Self::rows().iter().filter(move |s| s.category == category)
    }

    pub fn find(id: u32) -> Option<&'static Supplier> {
        Self::rows().iter().find(|s| s.id == id)
    }
}

impl FixtureTable for SuppliersTable {
    type Row = Supplier;

    fn rows() -> &'static [Supplier] {
        SUPPLIERS.get_or_init(|| {
            tracing::debug!("Building supplier fixture table");
            RAW_SUPPLIERS.iter().map(build_supplier).collect()
        })
    }
}

fn build_supplier(raw: &RawSupplier) -> Supplier {
    Supplier {
        id: raw.id,
        name: raw.name.to_string(),
        location: raw.location.to_string(),
        lat: raw.lat,
        lng: raw.lng,
        phone: raw.phone.to_string(),
        category: raw.category,
        products: raw
            .products
            .iter()
            .map(|rp| Product {
                name: rp.name.to_string(),
                price: Decimal::new(rp.price, 0),
                trend: rp.trend,
                change: Decimal::new(rp.change_tenths, 1),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_supplier_ids_are_unique() {
        let ids: HashSet<u32> = SuppliersTable::rows().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SuppliersTable::rows().len());
    }

    #[test]
    fn test_every_category_has_suppliers() {
        for category in Category::ALL {
            assert!(
                SuppliersTable::for_category(category).count() > 0,
                "No suppliers for {}",
                category
            );
        }
        assert_eq!(SuppliersTable::for_category(Category::Food).count(), 3);
        assert_eq!(SuppliersTable::for_category(Category::Clothing).count(), 2);
        assert_eq!(SuppliersTable::for_category(Category::Electronics).count(), 2);
    }

    #[test]
    fn test_find_supplier() {
        let supplier = SuppliersTable::find(1).unwrap();
        assert_eq!(supplier.name, "Fresh Valley Farms");
        assert_eq!(supplier.products[0].name, "Rice (50kg)");
        assert_eq!(supplier.products[0].price, Decimal::new(45, 0));
        assert_eq!(supplier.products[0].change, Decimal::new(25, 1));
        assert!(SuppliersTable::find(99).is_none());
    }

    #[test]
    fn test_stable_products_have_no_change() {
        for supplier in SuppliersTable::rows() {
            for product in &supplier.products {
                if product.trend == Trend::Stable {
                    assert!(product.change.is_zero(), "{} is stable but changed", product.name);
                }
                assert!(product.price > Decimal::ZERO);
            }
        }
    }
}
