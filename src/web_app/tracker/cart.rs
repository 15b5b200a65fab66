// web_app/tracker/cart.rs - Comparison cart
//
// The cart is an ordered list. Each item snapshots its converted price at
// insertion time; later currency changes never touch existing items.

use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::currency::convert_price;
use crate::web_app::error::{Result, TrackerError};
use crate::web_app::model::{
    CartItem, CurrencyCode, CustomProductDraft, Product, Supplier, Trend, CUSTOM_ENTRY_PHONE,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a catalog product, converting its price into `currency`
    pub fn add_product(
        &mut self,
        product: &Product,
        supplier: &Supplier,
        currency: &CurrencyCode,
    ) -> Result<Uuid> {
        let converted_price = convert_price(product.price, currency)?;
        let item = CartItem {
            id: Uuid::new_v4(),
            name: product.name.clone(),
            original_price: product.price,
            supplier: supplier.name.clone(),
            supplier_phone: supplier.phone.clone(),
            trend: product.trend,
            change: product.change,
            converted_price,
            currency: currency.clone(),
            added_at: Utc::now(),
        };
        self.push(item)
    }

    /// Adds a user-entered product. Name and supplier must be non-blank and
    /// the price must parse as a positive number.
    pub fn add_custom(&mut self, draft: &CustomProductDraft, currency: &CurrencyCode) -> Result<Uuid> {
        let (name, supplier, price) = validate_draft(draft)?;
        let converted_price = convert_price(price, currency)?;
        let item = CartItem {
            id: Uuid::new_v4(),
            name,
            original_price: price,
            supplier,
            supplier_phone: CUSTOM_ENTRY_PHONE.to_string(),
            trend: Trend::Stable,
            change: Decimal::ZERO,
            converted_price,
            currency: currency.clone(),
            added_at: Utc::now(),
        };
        self.push(item)
    }

    /// Appends `item` unless its price would overflow the cart total
    fn push(&mut self, item: CartItem) -> Result<Uuid> {
        if self.total().checked_add(item.converted_price).is_none() {
            return Err(TrackerError::InvalidInput(format!(
                "{} at {} overflows the cart total",
                item.name, item.converted_price
            )));
        }
        let id = item.id;
        tracing::debug!(%id, name = %item.name, price = %item.converted_price, "Cart item added");
        self.items.push(item);
        Ok(id)
    }

    /// Removes the item with `id`. Returns false when no item matched.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    /// Sum of converted prices as stored, whatever currency each was taken in.
    /// Saturates instead of panicking for carts not built through `push`.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.converted_price))
    }

    pub fn get(&self, id: Uuid) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn validate_draft(draft: &CustomProductDraft) -> Result<(String, String, Decimal)> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(TrackerError::InvalidInput("product name is empty".to_string()));
    }
    let supplier = draft.supplier.trim();
    if supplier.is_empty() {
        return Err(TrackerError::InvalidInput("supplier name is empty".to_string()));
    }
    let price = parse_price(&draft.price)?;
    Ok((name.to_string(), supplier.to_string(), price))
}

/// Parses a user-typed price. Accepts plain and scientific notation.
pub fn parse_price(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidInput("price is empty".to_string()));
    }
    let price = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| TrackerError::InvalidInput(format!("price is not a number: {}", trimmed)))?;
    if price <= Decimal::ZERO {
        return Err(TrackerError::InvalidInput(format!("price must be positive: {}", trimmed)));
    }
    Ok(price)
}
