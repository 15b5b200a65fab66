// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Badge, TextInput, etc.)
// - catalog.rs: Category tabs, currency selector, supplier map and list
// - cart.rs: Comparison cart, share buttons, custom product form

pub mod cart;
pub mod catalog;
pub mod common;

// Re-export commonly used components for convenience
pub use cart::*;
pub use catalog::*;
pub use common::*;
