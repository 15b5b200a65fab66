// web_app/tracker/state.rs - Widget state and its update function
//
// Every user interaction becomes an Action applied to TrackerState. The
// page keeps one TrackerState in a signal and re-renders from it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::Cart;
use super::share;
use crate::fixtures::tables::SuppliersTable;
use crate::web_app::error::{Result, TrackerError};
use crate::web_app::model::{
    Category, CurrencyCode, CustomProductDraft, DraftField, Product, SharePlatform, Supplier,
    ViewMode,
};

/// User interactions that change the widget state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    SelectCategory(Category),
    SelectSupplier(u32),
    ToggleView,
    SetCurrency(CurrencyCode),
    AddToCart { supplier_id: u32, product_index: usize },
    RemoveFromCart(Uuid),
    UpdateDraft(DraftField, String),
    AddCustomProduct,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    pub category: Category,
    pub selected_supplier: Option<u32>,
    pub cart: Cart,
    pub draft: CustomProductDraft,
    pub currency: CurrencyCode,
    pub view: ViewMode,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action. Invalid custom products and unknown catalog
    /// references leave the state untouched.
    pub fn apply(&mut self, action: Action) {
        tracing::debug!(?action, "Applying tracker action");
        match action {
            Action::SelectCategory(category) => self.category = category,
            Action::SelectSupplier(id) => self.selected_supplier = Some(id),
            Action::ToggleView => self.view = self.view.toggled(),
            Action::SetCurrency(code) => self.currency = code,
            Action::AddToCart { supplier_id, product_index } => {
                if let Err(e) = self.add_to_cart(supplier_id, product_index) {
                    tracing::warn!("Ignoring add to cart: {}", e);
                }
            }
            Action::RemoveFromCart(id) => {
                if !self.cart.remove(id) {
                    tracing::debug!(%id, "No cart item to remove");
                }
            }
            Action::UpdateDraft(field, value) => match field {
                DraftField::Name => self.draft.name = value,
                DraftField::Price => self.draft.price = value,
                DraftField::Supplier => self.draft.supplier = value,
            },
            Action::AddCustomProduct => {
                if let Err(e) = self.add_custom_product() {
                    tracing::debug!("Custom product not added: {}", e);
                }
            }
        }
    }

    /// Adds a fixture product in the current currency
    pub fn add_to_cart(&mut self, supplier_id: u32, product_index: usize) -> Result<Uuid> {
        let (supplier, product) = lookup_product(supplier_id, product_index)?;
        self.cart.add_product(product, supplier, &self.currency)
    }

    /// Adds the drafted product and clears the draft on success
    pub fn add_custom_product(&mut self) -> Result<Uuid> {
        let id = self.cart.add_custom(&self.draft, &self.currency)?;
        self.draft = CustomProductDraft::default();
        Ok(id)
    }

    /// Suppliers shown for the selected category
    pub fn current_suppliers(&self) -> Vec<&'static Supplier> {
        SuppliersTable::for_category(self.category).collect()
    }

    pub fn is_selected(&self, supplier_id: u32) -> bool {
        self.selected_supplier == Some(supplier_id)
    }

    pub fn share_message(&self) -> String {
        share::compose_message(&self.cart, &self.currency)
    }

    pub fn share_url(&self, platform: SharePlatform) -> String {
        share::share_url(platform, &self.share_message())
    }
}

fn lookup_product(supplier_id: u32, index: usize) -> Result<(&'static Supplier, &'static Product)> {
    let supplier = SuppliersTable::find(supplier_id).ok_or(TrackerError::UnknownSupplier(supplier_id))?;
    let product = supplier
        .products
        .get(index)
        .ok_or(TrackerError::UnknownProduct { supplier_id, index })?;
    Ok((supplier, product))
}
