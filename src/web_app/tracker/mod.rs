// web_app/tracker/mod.rs - Framework-independent tracker logic
//
// - currency.rs: rate table and price conversion
// - cart.rs: comparison cart and custom product validation
// - share.rs: share message and platform URLs
// - state.rs: TrackerState and the Action reducer

pub mod cart;
pub mod currency;
pub mod share;
pub mod state;

pub use cart::Cart;
pub use currency::{convert_price, format_amount, price_label, RateTable};
pub use state::{Action, TrackerState};
