// web_app/model/mod.rs - Shared data models for client and server
//
// These types are used by the tracker logic and by every component.
// They compile without any feature enabled so the core stays testable.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::web_app::error::TrackerError;

/// Supplier phone recorded for products the user typed in by hand
pub const CUSTOM_ENTRY_PHONE: &str = "Custom Entry";

/// Product category enumeration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Food,
    Clothing,
    Electronics,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Food, Category::Clothing, Category::Electronics];

    /// Key used in URLs and fixture tables
    pub fn key(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Clothing => "clothing",
            Category::Electronics => "electronics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food & Groceries",
            Category::Clothing => "Clothing & Fashion",
            Category::Electronics => "Electronics",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "🍎",
            Category::Clothing => "👕",
            Category::Electronics => "📱",
        }
    }

    /// Background class for the active tab
    pub fn color_class(&self) -> &'static str {
        match self {
            Category::Food => "bg-green-500",
            Category::Clothing => "bg-purple-500",
            Category::Electronics => "bg-blue-500",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrackerError::UnknownCategory(s.to_string()))
    }
}

/// Price movement indicator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Product offered by a supplier. Prices are in the base currency (USD).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Decimal,
    pub trend: Trend,
    /// Percent change, e.g. `2.5` for +2.5%
    pub change: Decimal,
}

impl Product {
    /// Signed percent label shown next to a price, `None` when unchanged
    pub fn change_label(&self) -> Option<String> {
        if self.change.is_zero() {
            return None;
        }
        let sign = if self.change.is_sign_positive() { "+" } else { "" };
        Some(format!("({}{}%)", sign, self.change.normalize()))
    }
}

/// Supplier with its location and product list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub phone: String,
    pub category: Category,
    pub products: Vec<Product>,
}

/// Currency code present in the rate table
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wraps a code without checking it against the rate table.
    /// Conversions with such a code fail with `UnknownCurrency`.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        CurrencyCode(code.into())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        CurrencyCode("USD".to_string())
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        crate::fixtures::tables::RatesTable::get()
            .rate(&code)
            .map(|_| CurrencyCode(code))
    }
}

/// One entry of the comparison cart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub name: String,
    pub original_price: Decimal,
    pub supplier: String,
    pub supplier_phone: String,
    pub trend: Trend,
    pub change: Decimal,
    /// Price in `currency`, rounded to 2 decimals when the item was added.
    /// Never recomputed; displays label it with the current selection.
    pub converted_price: Decimal,
    /// Code the price was converted into
    pub currency: CurrencyCode,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn is_custom(&self) -> bool {
        self.supplier_phone == CUSTOM_ENTRY_PHONE
    }
}

/// Form fields for a user-entered product
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomProductDraft {
    pub name: String,
    pub price: String,
    pub supplier: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftField {
    Name,
    Price,
    Supplier,
}

/// Layout of the supplier section
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Static grid of clickable supplier cards
    #[default]
    Map,
    /// Full supplier and product listing
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Map => ViewMode::List,
            ViewMode::List => ViewMode::Map,
        }
    }
}

/// Share targets for the comparison summary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharePlatform {
    WhatsApp,
    Facebook,
    Instagram,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 3] =
        [SharePlatform::WhatsApp, SharePlatform::Facebook, SharePlatform::Instagram];
}

impl std::fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SharePlatform::WhatsApp => write!(f, "WhatsApp"),
            SharePlatform::Facebook => write!(f, "Facebook"),
            SharePlatform::Instagram => write!(f, "Instagram"),
        }
    }
}
