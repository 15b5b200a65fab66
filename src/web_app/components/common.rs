// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;
use rust_decimal::Decimal;

use crate::web_app::model::{CurrencyCode, Trend};
use crate::web_app::tracker::price_label;

/// Primary button with gradient background
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="px-4 py-2 bg-gradient-to-r from-purple-500 to-pink-500 text-white rounded-full \
                   font-semibold hover:shadow-lg transition-all duration-300 transform hover:scale-105"
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

/// Icon-sized button for destructive actions (remove from cart)
#[component]
pub fn IconButton(
    children: Children,
    on_click: Callback<()>,
    /// Tooltip text
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            title=title
            class="text-red-500 hover:text-red-700 transition-colors"
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

/// Small rounded label, e.g. "Custom" on hand-entered cart items
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="px-2.5 py-0.5 text-xs font-medium rounded-full bg-purple-100 text-purple-800 border border-purple-200">
            {children()}
        </span>
    }
}

/// Text input bound to a value signal
///
/// Every keystroke is reported through `on_input`; Enter runs `on_enter`.
#[component]
pub fn TextInput(
    /// The current value
    value: Signal<String>,
    /// Called with the new value on each input event
    on_input: Callback<String>,
    /// Called when Enter is pressed
    #[prop(optional)]
    on_enter: Option<Callback<()>>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, number, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
) -> impl IntoView {
    let class = "border border-gray-300 rounded-lg px-4 py-2 \
                 focus:outline-none focus:ring-2 focus:ring-purple-500";

    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            if let Some(handler) = on_enter {
                handler.run(());
            }
        }
    };

    view! {
        <input
            type=input_type
            placeholder=placeholder
            class=class
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            on:keydown=handle_keydown
        />
    }
}

/// Price with its currency code
#[component]
pub fn PriceDisplay(
    amount: Decimal,
    /// Code shown after the amount
    currency: CurrencyCode,
) -> impl IntoView {
    view! {
        <span class="font-bold text-purple-600">{price_label(amount, &currency)}</span>
    }
}

/// Arrow for rising/falling prices, grey dot when stable
///
/// Rising prices are red and falling ones green, from the buyer's side.
#[component]
pub fn TrendIndicator(trend: Trend) -> impl IntoView {
    let (symbol, class) = trend_style(trend);

    view! {
        <span class=class title=trend.to_string()>
            {symbol}
        </span>
    }
}

pub fn trend_style(trend: Trend) -> (&'static str, &'static str) {
    match trend {
        Trend::Up => ("▲", "w-4 h-4 text-sm text-red-500"),
        Trend::Down => ("▼", "w-4 h-4 text-sm text-green-500"),
        Trend::Stable => ("", "inline-block w-4 h-4 bg-gray-400 rounded-full"),
    }
}

/// Placeholder shown when a list has nothing to display
#[component]
pub fn EmptyState(
    icon: &'static str,
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center py-8">
            <div class="text-4xl mb-2">{icon}</div>
            <p class="text-gray-500">{message}</p>
        </div>
    }
}
