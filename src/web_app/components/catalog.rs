// web_app/components/catalog.rs - Supplier and product browsing
//
// - CategoryTabs: category switcher
// - CurrencySelector: currency dropdown fed from the rate table
// - ViewToggle: map/list switch
// - SupplierMap: static grid of clickable supplier cards
// - SupplierList: full listing with products and add buttons

use leptos::prelude::*;

use super::common::{Button, TrendIndicator};
use crate::fixtures::tables::{RatesTable, SuppliersTable};
use crate::web_app::model::{Category, CurrencyCode, Product, Supplier, Trend, ViewMode};
use crate::web_app::tracker::{convert_price, price_label};

/// Category tabs
#[component]
pub fn CategoryTabs(
    /// Currently selected category
    category: Signal<Category>,
    /// Called with the clicked category
    on_select: Callback<Category>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center mb-8">
            <div class="bg-white rounded-full p-2 shadow-lg">
                {Category::ALL.into_iter().map(|tab| {
                    let class = move || {
                        if category.get() == tab {
                            format!(
                                "px-6 py-3 rounded-full font-semibold transition-all duration-300 mr-2 last:mr-0 {} text-white shadow-md transform scale-105",
                                tab.color_class()
                            )
                        } else {
                            "px-6 py-3 rounded-full font-semibold transition-all duration-300 mr-2 last:mr-0 bg-gray-100 text-gray-600 hover:bg-gray-200".to_string()
                        }
                    };
                    view! {
                        <button type="button" class=class on:click=move |_| on_select.run(tab)>
                            {format!("{} {}", tab.icon(), tab.label())}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Currency dropdown
///
/// Options come from the rate table, so every selectable code converts.
#[component]
pub fn CurrencySelector(
    currency: Signal<CurrencyCode>,
    on_change: Callback<CurrencyCode>,
) -> impl IntoView {
    let codes: Vec<CurrencyCode> = RatesTable::get().codes().cloned().collect();

    view! {
        <div class="flex justify-center mb-6">
            <div class="bg-white rounded-full px-6 py-3 shadow-lg">
                <label class="text-sm font-medium text-gray-700 mr-3">"Currency:"</label>
                <select
                    class="bg-transparent border-none outline-none font-semibold text-purple-600"
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<CurrencyCode>() {
                            Ok(code) => on_change.run(code),
                            Err(e) => tracing::warn!("Ignoring currency selection: {}", e),
                        }
                    }
                >
                    {codes.into_iter().map(|code| {
                        let label = code.to_string();
                        let value = label.clone();
                        view! {
                            <option
                                value=value
                                selected=move || currency.get() == code
                            >
                                {label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}

/// Map/list toggle button
#[component]
pub fn ViewToggle(
    view_mode: Signal<ViewMode>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center mb-6">
            <button
                type="button"
                class="bg-gradient-to-r from-blue-500 to-purple-600 text-white px-6 py-3 rounded-full \
                       font-semibold shadow-lg hover:shadow-xl transition-all duration-300 transform hover:scale-105"
                on:click=move |_| on_toggle.run(())
            >
                "📍 " {move || toggle_label(view_mode.get())}
            </button>
        </div>
    }
}

pub fn toggle_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Map => "Show List View",
        ViewMode::List => "Show Map View",
    }
}

/// Static supplier "map": a grid of location cards
#[component]
pub fn SupplierMap(
    category: Signal<Category>,
    /// Highlighted supplier id
    selected: Signal<Option<u32>>,
    on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-xl p-6 mb-6">
            <h2 class="text-2xl font-bold text-gray-800 mb-4 flex items-center">
                "📍 Supplier Locations"
            </h2>
            <div class="bg-gradient-to-br from-blue-100 to-purple-100 rounded-xl h-96 relative overflow-hidden">
                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="text-center">
                        <div class="text-6xl mb-4">"🗺️"</div>
                        <p class="text-xl font-semibold text-gray-700 mb-4">"Interactive Supplier Map"</p>
                        <div class="grid grid-cols-2 gap-4">
                            {move || {
                                SuppliersTable::for_category(category.get()).map(|supplier| {
                                    let id = supplier.id;
                                    let class = move || map_card_class(selected.get() == Some(id));
                                    view! {
                                        <div class=class on:click=move |_| on_select.run(id)>
                                            <div class="text-lg font-bold text-purple-600">"📍"</div>
                                            <div class="text-sm font-semibold">{supplier.name.clone()}</div>
                                            <div class="text-xs text-gray-500">{supplier.location.clone()}</div>
                                        </div>
                                    }
                                }).collect_view()
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

pub fn map_card_class(selected: bool) -> String {
    let base = "bg-white rounded-lg p-3 shadow-md cursor-pointer transition-all duration-300 \
                hover:shadow-lg hover:scale-105";
    if selected {
        format!("{} ring-4 ring-purple-400", base)
    } else {
        base.to_string()
    }
}

/// Full supplier listing for the selected category
#[component]
pub fn SupplierList(
    category: Signal<Category>,
    currency: Signal<CurrencyCode>,
    /// Called with (supplier id, product index)
    on_add: Callback<(u32, usize)>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {move || {
                SuppliersTable::for_category(category.get()).map(|supplier| view! {
                    <SupplierCard supplier=supplier currency=currency on_add=on_add />
                }).collect_view()
            }}
        </div>
    }
}

/// One supplier with contact details and its products
#[component]
pub fn SupplierCard(
    supplier: &'static Supplier,
    currency: Signal<CurrencyCode>,
    on_add: Callback<(u32, usize)>,
) -> impl IntoView {
    let supplier_id = supplier.id;

    view! {
        <div class="bg-white rounded-2xl shadow-xl p-6">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h3 class="text-xl font-bold text-gray-800">{supplier.name.clone()}</h3>
                    <p class="text-gray-600 flex items-center">"📍 " {supplier.location.clone()}</p>
                    <p class="text-gray-600 flex items-center mt-1">
                        "📞 "
                        <a href=format!("tel:{}", supplier.phone) class="hover:text-purple-600">
                            {supplier.phone.clone()}
                        </a>
                    </p>
                </div>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {supplier.products.iter().enumerate().map(|(index, product)| view! {
                    <ProductTile
                        product=product.clone()
                        currency=currency
                        on_add=Callback::new(move |()| on_add.run((supplier_id, index)))
                    />
                }).collect_view()}
            </div>
        </div>
    }
}

/// Product with its converted price and add button
#[component]
pub fn ProductTile(
    product: Product,
    currency: Signal<CurrencyCode>,
    on_add: Callback<()>,
) -> impl IntoView {
    let price = product.price;
    let change_color = change_class(&product);
    let change_label = product.change_label();

    view! {
        <div class="bg-gradient-to-r from-purple-50 to-pink-50 rounded-xl p-4 border border-purple-100">
            <div class="flex justify-between items-start mb-2">
                <h4 class="font-semibold text-gray-800">{product.name.clone()}</h4>
                <TrendIndicator trend=product.trend />
            </div>
            <div class="flex justify-between items-center">
                <div>
                    <span class="text-2xl font-bold text-purple-600">
                        {move || {
                            let code = currency.get();
                            converted_label(price, &code)
                        }}
                    </span>
                    {change_label.map(|label| view! {
                        <span class=format!("text-sm ml-2 {}", change_color)>{label}</span>
                    })}
                </div>
                <Button on_click=on_add>"+ Add"</Button>
            </div>
        </div>
    }
}

/// "<amount> <code>", or a dash if the code has no rate
pub fn converted_label(price: rust_decimal::Decimal, code: &CurrencyCode) -> String {
    match convert_price(price, code) {
        Ok(amount) => price_label(amount, code),
        Err(e) => {
            tracing::warn!("Cannot convert price: {}", e);
            format!("-- {}", code)
        }
    }
}

fn change_class(product: &Product) -> &'static str {
    match product.trend {
        Trend::Up => "text-red-500",
        _ => "text-green-500",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(ViewMode::Map), "Show List View");
        assert_eq!(toggle_label(ViewMode::List), "Show Map View");
    }

    #[test]
    fn test_map_card_highlight() {
        assert!(map_card_class(true).contains("ring-purple-400"));
        assert!(!map_card_class(false).contains("ring-4"));
    }

    #[test]
    fn test_converted_label() {
        let ngn: CurrencyCode = "NGN".parse().unwrap();
        assert_eq!(converted_label(Decimal::new(45, 0), &ngn), "20700.00 NGN");
        let bogus = CurrencyCode::new_unchecked("XXX");
        assert_eq!(converted_label(Decimal::new(45, 0), &bogus), "-- XXX");
    }
}
