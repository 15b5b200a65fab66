// fixtures/tables/mod.rs
//
// Suppliers (with their products) and the currency rate table.

pub mod rates;
pub mod suppliers;

pub use rates::RatesTable;
pub use suppliers::SuppliersTable;
