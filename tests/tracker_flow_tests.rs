// End-to-end tracker behaviour through the public API
//
// No framework features needed: these drive TrackerState the way the page
// does and check the cart, conversion and share output.

use price_tracker::fixtures::tables::{RatesTable, SuppliersTable};
use price_tracker::fixtures::FixtureTable;
use price_tracker::web_app::error::TrackerError;
use price_tracker::web_app::model::{Category, CurrencyCode, DraftField, SharePlatform};
use price_tracker::web_app::tracker::currency::round_money;
use price_tracker::web_app::tracker::{convert_price, format_amount, Action, TrackerState};
use rust_decimal::Decimal;

fn code(s: &str) -> CurrencyCode {
    s.parse().unwrap()
}

fn draft(state: &mut TrackerState, name: &str, price: &str, supplier: &str) {
    state.apply(Action::UpdateDraft(DraftField::Name, name.to_string()));
    state.apply(Action::UpdateDraft(DraftField::Price, price.to_string()));
    state.apply(Action::UpdateDraft(DraftField::Supplier, supplier.to_string()));
}

#[test]
fn test_every_fixture_price_converts_with_every_rate() {
    let rates = RatesTable::get();
    for supplier in SuppliersTable::rows() {
        for product in &supplier.products {
            for (currency, rate) in rates.entries() {
                let converted = convert_price(product.price, currency).unwrap();
                assert_eq!(converted, round_money(product.price * rate));
            }
        }
    }
}

#[test]
fn test_rice_in_naira() {
    let converted = convert_price(Decimal::new(45, 0), &code("NGN")).unwrap();
    assert_eq!(format_amount(converted), "20700.00");
}

#[test]
fn test_unknown_currency_is_rejected() {
    assert!(matches!(
        "XYZ".parse::<CurrencyCode>(),
        Err(TrackerError::UnknownCurrency(_))
    ));
    assert_eq!(code("ngn").as_str(), "NGN");
}

#[test]
fn test_cart_items_keep_insertion_currency() {
    let mut state = TrackerState::new();
    state.apply(Action::AddToCart { supplier_id: 1, product_index: 0 });
    state.apply(Action::SetCurrency(code("NGN")));
    state.apply(Action::AddToCart { supplier_id: 2, product_index: 0 });

    let items = state.cart.items();
    assert_eq!(items.len(), 2);
    assert_eq!(format_amount(items[0].converted_price), "45.00");
    assert_eq!(items[0].currency.as_str(), "USD");
    assert_eq!(format_amount(items[1].converted_price), "19320.00");
    assert_eq!(items[1].currency.as_str(), "NGN");
}

#[test]
fn test_remove_only_touches_matching_item() {
    let mut state = TrackerState::new();
    let first = state.add_to_cart(4, 0).unwrap();
    let second = state.add_to_cart(4, 1).unwrap();

    state.apply(Action::RemoveFromCart(first));
    assert_eq!(state.cart.len(), 1);
    assert!(state.cart.get(second).is_some());

    // Already gone: nothing changes
    state.apply(Action::RemoveFromCart(first));
    assert_eq!(state.cart.len(), 1);
}

#[test]
fn test_invalid_custom_products_leave_cart_unchanged() {
    let mut state = TrackerState::new();
    let cases = [
        ("", "10", "Shop"),
        ("Yam", "10", "  "),
        ("Yam", "ten", "Shop"),
        ("Yam", "0", "Shop"),
        ("Yam", "-3", "Shop"),
    ];

    for (name, price, supplier) in cases {
        draft(&mut state, name, price, supplier);
        state.apply(Action::AddCustomProduct);
        assert!(state.cart.is_empty(), "accepted {:?}", (name, price, supplier));
        // Draft is kept so the user can fix it
        assert_eq!(state.draft.price, price);
    }
}

#[test]
fn test_valid_custom_product_clears_draft() {
    let mut state = TrackerState::new();
    state.apply(Action::SetCurrency(code("GBP")));
    draft(&mut state, "Yam", "10", "Corner Shop");
    state.apply(Action::AddCustomProduct);

    assert_eq!(state.cart.len(), 1);
    let item = &state.cart.items()[0];
    assert!(item.is_custom());
    assert_eq!(format_amount(item.converted_price), "7.30");
    assert!(state.draft.name.is_empty());
    assert!(state.draft.price.is_empty());
    assert!(state.draft.supplier.is_empty());
}

#[test]
fn test_category_switch_keeps_cart_and_currency() {
    let mut state = TrackerState::new();
    state.apply(Action::SetCurrency(code("ZAR")));
    state.apply(Action::AddToCart { supplier_id: 1, product_index: 1 });
    let before = state.cart.clone();

    for category in Category::ALL {
        state.apply(Action::SelectCategory(category));
        assert!(state.current_suppliers().iter().all(|s| s.category == category));
        assert_eq!(state.cart, before);
        assert_eq!(state.currency.as_str(), "ZAR");
    }
}

#[test]
fn test_total_of_two_custom_items() {
    let mut state = TrackerState::new();
    draft(&mut state, "Soap", "20", "A");
    state.apply(Action::AddCustomProduct);
    draft(&mut state, "Salt", "30", "B");
    state.apply(Action::AddCustomProduct);

    assert_eq!(format_amount(state.cart.total()), "50.00");
}

#[test]
fn test_share_after_currency_switch_labels_with_selection() {
    let mut state = TrackerState::new();
    state.apply(Action::AddToCart { supplier_id: 1, product_index: 0 });
    state.apply(Action::SetCurrency(code("NGN")));

    let message = state.share_message();
    assert!(message.contains("Rice (50kg): 45.00 NGN"));
    assert!(state
        .share_url(SharePlatform::WhatsApp)
        .contains("Rice%20(50kg)%3A%2045.00%20NGN"));
}

#[test]
fn test_oversized_custom_price_is_ignored() {
    let mut state = TrackerState::new();
    state.apply(Action::SetCurrency(code("NGN")));
    draft(&mut state, "Gold", "1e28", "Vault");
    state.apply(Action::AddCustomProduct);

    assert!(state.cart.is_empty());
    assert_eq!(state.draft.price, "1e28");

    // Each fits, the sum would not
    state.apply(Action::SetCurrency(code("USD")));
    draft(&mut state, "Gold", "5e28", "Vault");
    state.apply(Action::AddCustomProduct);
    draft(&mut state, "Gold", "5e28", "Vault");
    state.apply(Action::AddCustomProduct);
    assert_eq!(state.cart.len(), 1);
    assert_eq!(state.cart.total(), Decimal::from_scientific("5e28").unwrap());
}

#[test]
fn test_share_urls_per_platform() {
    let mut state = TrackerState::new();
    state.apply(Action::AddToCart { supplier_id: 1, product_index: 0 });

    let message = state.share_message();
    assert!(message.contains("Rice (50kg): 45.00 USD"));
    assert!(message.contains("Total items: 1"));

    let whatsapp = state.share_url(SharePlatform::WhatsApp);
    assert!(whatsapp.starts_with("https://wa.me/?text="));
    assert!(whatsapp.contains("Rice%20(50kg)%3A%2045.00%20USD"));

    let facebook = state.share_url(SharePlatform::Facebook);
    assert!(facebook.starts_with("https://www.facebook.com/sharer/sharer.php?u="));
    assert!(facebook.contains("Total%20items%3A%201"));

    assert_eq!(state.share_url(SharePlatform::Instagram), "https://www.instagram.com/");
}
