// Instantiation tests for the atomic components in components/common.rs
//
// Components are called directly with their Props struct inside an Owner.
// Components that attach event handlers are covered through their pure
// helpers instead.

use leptos::prelude::*;
use price_tracker::web_app::components::common::*;
use price_tracker::web_app::model::{CurrencyCode, Trend};
use rust_decimal::Decimal;

// Helper to create a reactive owner for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let _owner = Owner::new();
    f();
}

#[test]
fn test_badge_instantiation() {
    with_runtime(|| {
        let _ = Badge(BadgeProps {
            children: Box::new(|| view! { "Custom" }.into_any()),
        });
    });
}

#[test]
fn test_price_display_instantiation() {
    with_runtime(|| {
        let _ = PriceDisplay(PriceDisplayProps {
            amount: Decimal::new(20700, 0),
            currency: "NGN".parse().unwrap(),
        });

        let _ = PriceDisplay(PriceDisplayProps {
            amount: Decimal::new(3825, 2),
            currency: CurrencyCode::default(),
        });
    });
}

#[test]
fn test_trend_indicator_instantiation() {
    with_runtime(|| {
        for trend in [Trend::Up, Trend::Down, Trend::Stable] {
            let _ = TrendIndicator(TrendIndicatorProps { trend });
        }
    });
}

#[test]
fn test_empty_state_instantiation() {
    with_runtime(|| {
        let _ = EmptyState(EmptyStateProps {
            icon: "🛒",
            message: "Add products to compare prices",
        });
    });
}

// Button, IconButton and TextInput bind DOM events and are exercised
// through the page instead.

#[test]
fn test_trend_style_symbols() {
    assert_eq!(trend_style(Trend::Up).0, "▲");
    assert_eq!(trend_style(Trend::Down).0, "▼");
    assert_eq!(trend_style(Trend::Stable).0, "");
}
