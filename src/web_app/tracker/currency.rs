// web_app/tracker/currency.rs - Price conversion
//
// Converted prices are `price * rate` rounded half away from zero to two
// decimals, the same rounding the price labels use.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::fixtures::tables::RatesTable;
use crate::web_app::error::{Result, TrackerError};
use crate::web_app::model::CurrencyCode;

/// Currency code to multiplier against the base unit (USD)
#[derive(Clone, Debug, PartialEq)]
pub struct RateTable {
    rates: Vec<(CurrencyCode, Decimal)>,
}

impl RateTable {
    /// Builds a table from caller-supplied rates. Every rate must be positive
    /// and codes must be unique.
    pub fn new(rates: Vec<(CurrencyCode, Decimal)>) -> Result<Self> {
        for (i, (code, rate)) in rates.iter().enumerate() {
            if *rate <= Decimal::ZERO {
                return Err(TrackerError::InvalidInput(format!(
                    "rate for {} must be positive, got {}",
                    code, rate
                )));
            }
            if rates[..i].iter().any(|(other, _)| other == code) {
                return Err(TrackerError::InvalidInput(format!("duplicate currency {}", code)));
            }
        }
        Ok(RateTable { rates })
    }

    pub(crate) fn from_trusted(rates: Vec<(CurrencyCode, Decimal)>) -> Self {
        RateTable { rates }
    }

    pub fn entries(&self) -> &[(CurrencyCode, Decimal)] {
        &self.rates
    }

    /// Codes in table order, as offered by the currency selector
    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.rates.iter().map(|(code, _)| code)
    }

    pub fn rate(&self, code: &str) -> Result<Decimal> {
        self.rates
            .iter()
            .find(|(c, _)| c.as_str() == code)
            .map(|(_, rate)| *rate)
            .ok_or_else(|| TrackerError::UnknownCurrency(code.to_string()))
    }

    /// Fails with `InvalidInput` when the product does not fit in a `Decimal`
    pub fn convert(&self, price: Decimal, code: &CurrencyCode) -> Result<Decimal> {
        let rate = self.rate(code.as_str())?;
        let converted = price.checked_mul(rate).ok_or_else(|| {
            TrackerError::InvalidInput(format!("price {} is too large to convert to {}", price, code))
        })?;
        Ok(round_money(converted))
    }
}

/// Converts a base-currency price with the built-in rate table
pub fn convert_price(price: Decimal, code: &CurrencyCode) -> Result<Decimal> {
    RatesTable::get().convert(price, code)
}

pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount with exactly two decimals, e.g. `20700.00`
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_money(amount))
}

/// `"<amount> <code>"`, the label used for every price on screen and in shares
pub fn price_label(amount: Decimal, currency: &CurrencyCode) -> String {
    format!("{} {}", format_amount(amount), currency)
}
