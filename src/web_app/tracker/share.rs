// web_app/tracker/share.rs - Share-link construction
//
// Builds the plain-text comparison summary and the destination URL for each
// platform. Nothing here performs I/O; the page opens the URL.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::cart::Cart;
use super::currency::price_label;
use crate::web_app::model::{CurrencyCode, SharePlatform};

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const MESSAGE_HEADER: &str = "🛒 My Price Comparison:";
pub const MESSAGE_SIGNATURE: &str = "Using ShopSmart Price Tracker! 📊";

const WHATSAPP_BASE: &str = "https://wa.me/?text=";
const FACEBOOK_BASE: &str = "https://www.facebook.com/sharer/sharer.php?u=";
const INSTAGRAM_URL: &str = "https://www.instagram.com/";

/// Summary text: header, one line per item, then item count and signature.
///
/// Every line is labelled with `currency`, the current selection, while the
/// amount stays the one stored when the item was added.
pub fn compose_message(cart: &Cart, currency: &CurrencyCode) -> String {
    let lines: Vec<String> = cart
        .iter()
        .map(|item| format!("{}: {}", item.name, price_label(item.converted_price, currency)))
        .collect();

    format!(
        "{}\n{}\n\nTotal items: {}\n{}",
        MESSAGE_HEADER,
        lines.join("\n"),
        cart.len(),
        MESSAGE_SIGNATURE
    )
}

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Destination URL for `platform`. Instagram has no text-sharing endpoint,
/// so its URL ignores the message.
pub fn share_url(platform: SharePlatform, message: &str) -> String {
    match platform {
        SharePlatform::WhatsApp => format!("{}{}", WHATSAPP_BASE, encode_component(message)),
        SharePlatform::Facebook => format!("{}{}", FACEBOOK_BASE, encode_component(message)),
        SharePlatform::Instagram => INSTAGRAM_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::CustomProductDraft;

    fn cart_with(items: &[(&str, &str)], currency: &str) -> Cart {
        let code: CurrencyCode = currency.parse().unwrap();
        let mut cart = Cart::new();
        for (name, price) in items {
            let draft = CustomProductDraft {
                name: name.to_string(),
                price: price.to_string(),
                supplier: "Shop".to_string(),
            };
            cart.add_custom(&draft, &code).unwrap();
        }
        cart
    }

    #[test]
    fn test_compose_message() {
        let cart = cart_with(&[("Rice (50kg)", "45"), ("Salt", "8")], "NGN");
        let message = compose_message(&cart, &"NGN".parse().unwrap());
        assert_eq!(
            message,
            "🛒 My Price Comparison:\nRice (50kg): 20700.00 NGN\nSalt: 3680.00 NGN\n\nTotal items: 2\nUsing ShopSmart Price Tracker! 📊"
        );
    }

    #[test]
    fn test_compose_message_empty_cart() {
        let message = compose_message(&Cart::new(), &CurrencyCode::default());
        assert!(message.starts_with(MESSAGE_HEADER));
        assert!(message.contains("Total items: 0"));
        assert!(message.ends_with(MESSAGE_SIGNATURE));
    }

    #[test]
    fn test_lines_use_current_currency_code() {
        // Converted in USD, shared after switching to NGN: amount kept, code follows
        let cart = cart_with(&[("Rice (50kg)", "45")], "USD");
        let message = compose_message(&cart, &"NGN".parse().unwrap());
        assert!(message.contains("Rice (50kg): 45.00 NGN"));
        assert!(!message.contains("USD"));
    }

    #[test]
    fn test_encode_matches_uri_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("Rice (50kg): 1.00"), "Rice%20(50kg)%3A%201.00");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("&=?/#+"), "%26%3D%3F%2F%23%2B");
        assert_eq!(encode_component("🛒"), "%F0%9F%9B%92");
    }

    #[test]
    fn test_share_urls() {
        let message = "Hi there";
        assert_eq!(share_url(SharePlatform::WhatsApp, message), "https://wa.me/?text=Hi%20there");
        assert_eq!(
            share_url(SharePlatform::Facebook, message),
            "https://www.facebook.com/sharer/sharer.php?u=Hi%20there"
        );
        assert_eq!(share_url(SharePlatform::Instagram, message), "https://www.instagram.com/");
    }

    #[test]
    fn test_instagram_ignores_message() {
        let a = share_url(SharePlatform::Instagram, "one");
        let b = share_url(SharePlatform::Instagram, "two");
        assert_eq!(a, b);
    }
}
