// web_app/pages/tracker.rs - Price tracker page
//
// Holds the single TrackerState signal and turns component callbacks into
// Actions. All views derive from that signal.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::tracker::{Action, TrackerState};

/// Main tracker page
///
/// Lays out:
/// - Header, currency selector, category tabs and view toggle
/// - Supplier map or list, plus the custom product form
/// - Comparison cart with sharing
#[component]
pub fn TrackerPage() -> impl IntoView {
    let state = RwSignal::new(TrackerState::new());

    // Every interaction goes through here
    let dispatch = Callback::new(move |action: Action| {
        state.update(|s| s.apply(action));
    });

    // Derived views of the state
    let category = Signal::derive(move || state.with(|s| s.category));
    let currency = Signal::derive(move || state.with(|s| s.currency.clone()));
    let view_mode = Signal::derive(move || state.with(|s| s.view));
    let selected_supplier = Signal::derive(move || state.with(|s| s.selected_supplier));
    let cart = Signal::derive(move || state.with(|s| s.cart.clone()));
    let draft = Signal::derive(move || state.with(|s| s.draft.clone()));

    let on_category = Callback::new(move |c: Category| dispatch.run(Action::SelectCategory(c)));
    let on_currency = Callback::new(move |code: CurrencyCode| dispatch.run(Action::SetCurrency(code)));
    let on_toggle = Callback::new(move |()| dispatch.run(Action::ToggleView));
    let on_select_supplier = Callback::new(move |id: u32| dispatch.run(Action::SelectSupplier(id)));
    let on_add = Callback::new(move |(supplier_id, product_index): (u32, usize)| {
        dispatch.run(Action::AddToCart { supplier_id, product_index })
    });
    let on_remove = Callback::new(move |id| dispatch.run(Action::RemoveFromCart(id)));
    let on_edit = Callback::new(move |(field, value): (DraftField, String)| {
        dispatch.run(Action::UpdateDraft(field, value))
    });
    let on_submit_custom = Callback::new(move |()| dispatch.run(Action::AddCustomProduct));

    let on_share = Callback::new(move |platform: SharePlatform| {
        let url = state.with_untracked(|s| s.share_url(platform));
        open_share_url(platform, &url);
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-pink-100 via-purple-50 to-indigo-100">
            <div class="container mx-auto p-4">
                // Header
                <div class="text-center mb-8">
                    <h1 class="text-4xl font-bold bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-transparent mb-2">
                        "🛒 ShopSmart Price Tracker"
                    </h1>
                    <p class="text-gray-600 text-lg">"Compare prices, track suppliers, maximize profits!"</p>
                </div>

                <CurrencySelector currency=currency on_change=on_currency />
                <CategoryTabs category=category on_select=on_category />
                <ViewToggle view_mode=view_mode on_toggle=on_toggle />

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    // Suppliers
                    <div class="lg:col-span-2">
                        <Show
                            when=move || view_mode.get() == ViewMode::Map
                            fallback=move || view! {
                                <SupplierList category=category currency=currency on_add=on_add />
                            }
                        >
                            <SupplierMap
                                category=category
                                selected=selected_supplier
                                on_select=on_select_supplier
                            />
                        </Show>

                        <CustomProductForm draft=draft on_edit=on_edit on_submit=on_submit_custom />
                    </div>

                    // Cart
                    <CartPanel
                        cart=cart
                        currency=currency
                        on_remove=on_remove
                        on_share=on_share
                    />
                </div>
            </div>
        </div>
    }
}

/// Opens the share destination in a new tab (browser only)
fn open_share_url(platform: SharePlatform, url: &str) {
    tracing::info!("Sharing comparison via {}", platform);

    #[cfg(feature = "hydrate")]
    {
        match window().open_with_url_and_target(url, "_blank") {
            Ok(_) => {}
            Err(e) => tracing::error!("Failed to open share window: {:?}", e),
        }
    }

    #[cfg(not(feature = "hydrate"))]
    tracing::debug!(url, "Share requested outside the browser");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_sequence() {
        // Same sequence of actions the page dispatches for a typical session
        let mut state = TrackerState::new();
        state.apply(Action::SelectCategory(Category::Electronics));
        state.apply(Action::ToggleView);
        state.apply(Action::AddToCart { supplier_id: 6, product_index: 0 });
        state.apply(Action::SetCurrency("EUR".parse().unwrap()));
        state.apply(Action::AddToCart { supplier_id: 7, product_index: 2 });

        assert_eq!(state.view, ViewMode::List);
        assert_eq!(state.cart.len(), 2);
        let labels: Vec<String> = state
            .cart
            .iter()
            .map(|i| format!("{} {}", i.converted_price, i.currency))
            .collect();
        // 45 USD, then 55 * 0.85 = 46.75 EUR
        assert_eq!(labels, ["45 USD", "46.75 EUR"]);
    }
}
