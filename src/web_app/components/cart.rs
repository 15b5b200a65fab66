// web_app/components/cart.rs - Comparison cart components
//
// - CartPanel: item list, share buttons and totals
// - CartItemRow: one cart entry with remove button
// - ShareButtons: WhatsApp / Facebook / Instagram
// - CustomProductForm: hand-entered product

use leptos::prelude::*;
use uuid::Uuid;

use super::common::{Badge, EmptyState, IconButton, PriceDisplay, TextInput, TrendIndicator};
use crate::web_app::model::{CartItem, CurrencyCode, CustomProductDraft, DraftField, SharePlatform};
use crate::web_app::tracker::{price_label, Cart};

/// Price comparison cart
#[component]
pub fn CartPanel(
    cart: Signal<Cart>,
    /// Selected currency, labels the rows and the total
    currency: Signal<CurrencyCode>,
    on_remove: Callback<Uuid>,
    on_share: Callback<SharePlatform>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-xl p-6 h-fit sticky top-4">
            <h3 class="text-xl font-bold text-gray-800 mb-4 flex items-center">
                {move || format!("🛒 Price Comparison ({})", cart.with(|c| c.len()))}
            </h3>

            <Show
                when=move || cart.with(|c| !c.is_empty())
                fallback=|| view! {
                    <EmptyState icon="🛒" message="Add products to compare prices" />
                }
            >
                <div class="space-y-3 mb-6 max-h-96 overflow-y-auto">
                    <For
                        each=move || cart.with(|c| c.items().to_vec())
                        key=|item| item.id
                        children=move |item| view! {
                            <CartItemRow item=item currency=currency on_remove=on_remove />
                        }
                    />
                </div>

                <ShareButtons on_share=on_share />

                <div class="border-t pt-4 mt-4">
                    <div class="text-sm text-gray-600">
                        {move || format!("Total Items: {}", cart.with(|c| c.len()))}
                    </div>
                    <div class="text-lg font-bold text-purple-600">
                        {move || total_label(&cart.get(), &currency.get())}
                    </div>
                </div>
            </Show>
        </div>
    }
}

pub fn total_label(cart: &Cart, currency: &CurrencyCode) -> String {
    format!("Total Value: {}", price_label(cart.total(), currency))
}

/// One cart entry
///
/// The amount is the one stored at insertion; the code follows the current
/// selection, like the total.
#[component]
pub fn CartItemRow(
    item: CartItem,
    currency: Signal<CurrencyCode>,
    on_remove: Callback<Uuid>,
) -> impl IntoView {
    let id = item.id;
    let is_custom = item.is_custom();
    let amount = item.converted_price;

    view! {
        <div class="bg-gradient-to-r from-purple-50 to-pink-50 rounded-lg p-3 border border-purple-100">
            <div class="flex justify-between items-start mb-1">
                <h4 class="font-semibold text-sm text-gray-800">{item.name.clone()}</h4>
                <IconButton on_click=Callback::new(move |()| on_remove.run(id)) title="Remove">
                    "🗑"
                </IconButton>
            </div>
            <p class="text-xs text-gray-600 mb-2 flex items-center gap-2">
                {item.supplier.clone()}
                {is_custom.then(|| view! { <Badge>"Custom"</Badge> })}
            </p>
            <div class="flex justify-between items-center">
                {move || view! { <PriceDisplay amount=amount currency=currency.get() /> }}
                <TrendIndicator trend=item.trend />
            </div>
        </div>
    }
}

/// Share buttons for each platform
#[component]
pub fn ShareButtons(on_share: Callback<SharePlatform>) -> impl IntoView {
    view! {
        <div class="border-t pt-4">
            <h4 class="font-semibold text-gray-800 mb-3 flex items-center">"🔗 Share Comparison"</h4>
            <div class="flex space-x-2">
                {SharePlatform::ALL.into_iter().map(|platform| view! {
                    <button
                        type="button"
                        class=share_button_class(platform)
                        on:click=move |_| on_share.run(platform)
                    >
                        {platform.to_string()}
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}

pub fn share_button_class(platform: SharePlatform) -> &'static str {
    match platform {
        SharePlatform::WhatsApp => "flex-1 bg-green-500 text-white py-2 px-3 rounded-lg font-semibold hover:bg-green-600 transition-colors",
        SharePlatform::Facebook => "flex-1 bg-blue-600 text-white py-2 px-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors",
        SharePlatform::Instagram => "flex-1 bg-gradient-to-r from-purple-500 to-pink-500 text-white py-2 px-3 rounded-lg font-semibold hover:shadow-lg transition-all",
    }
}

/// Form for a product that is not in the catalog
///
/// Invalid input is ignored on submit; the fields keep their values.
#[component]
pub fn CustomProductForm(
    draft: Signal<CustomProductDraft>,
    on_edit: Callback<(DraftField, String)>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let name = Signal::derive(move || draft.with(|d| d.name.clone()));
    let price = Signal::derive(move || draft.with(|d| d.price.clone()));
    let supplier = Signal::derive(move || draft.with(|d| d.supplier.clone()));

    view! {
        <div class="bg-white rounded-2xl shadow-xl p-6 mt-6">
            <h3 class="text-xl font-bold text-gray-800 mb-4 flex items-center">"➕ Add Custom Product"</h3>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <TextInput
                    value=name
                    on_input=Callback::new(move |v| on_edit.run((DraftField::Name, v)))
                    on_enter=on_submit
                    placeholder="Product name"
                />
                <TextInput
                    value=price
                    on_input=Callback::new(move |v| on_edit.run((DraftField::Price, v)))
                    on_enter=on_submit
                    placeholder="Price"
                    input_type="number"
                />
                <TextInput
                    value=supplier
                    on_input=Callback::new(move |v| on_edit.run((DraftField::Supplier, v)))
                    on_enter=on_submit
                    placeholder="Supplier name"
                />
                <button
                    type="button"
                    class="bg-gradient-to-r from-green-500 to-blue-500 text-white px-6 py-2 rounded-lg \
                           font-semibold hover:shadow-lg transition-all duration-300 transform hover:scale-105"
                    on:click=move |_| on_submit.run(())
                >
                    "Add Product"
                </button>
            </div>
        </div>
    }
}
