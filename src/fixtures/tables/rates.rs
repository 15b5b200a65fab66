// fixtures/tables/rates.rs
//
// Static exchange rates against USD. Simplified demo values, never refreshed.

use std::sync::OnceLock;

use rust_decimal::Decimal;

use crate::fixtures::FixtureTable;
use crate::web_app::model::CurrencyCode;
use crate::web_app::tracker::currency::RateTable;

/// (code, mantissa, scale)
const RAW_RATES: [(&str, i64, u32); 7] = [
    ("USD", 1, 0),
    ("EUR", 85, 2),
    ("GBP", 73, 2),
    ("JPY", 110, 0),
    ("NGN", 460, 0),
    ("KES", 103, 0),
    ("ZAR", 152, 1),
];

static RATES: OnceLock<RateTable> = OnceLock::new();

pub struct RatesTable;

impl RatesTable {
    /// The built-in rate table
    pub fn get() -> &'static RateTable {
        RATES.get_or_init(|| {
            RateTable::from_trusted(
                RAW_RATES
                    .iter()
                    .map(|&(code, mantissa, scale)| {
                        (CurrencyCode::new_unchecked(code), Decimal::new(mantissa, scale))
                    })
                    .collect(),
            )
        })
    }
}

impl FixtureTable for RatesTable {
    type Row = (CurrencyCode, Decimal);

    fn rows() -> &'static [(CurrencyCode, Decimal)] {
        Self::get().entries()
    }
}
