use crate::core::from_raw::{nested, FromRaw};
use crate::core::json::{Attr, ToJson};
use crate::core::payload::{get_i64, get_str, RawObject};

/// Currency description as reported alongside prices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Currency {
    pub code: Option<String>,
    pub factor: Option<i64>,
    pub places: Option<i64>,
    pub number: Option<i64>,
    pub pre_symbol: Option<String>,
    pub post_symbol: Option<String>,
}

impl Currency {
    pub fn new(code: &str) -> Self {
        Self {
            code: Some(code.to_string()),
            ..Self::default()
        }
    }
}

impl FromRaw for Currency {
    fn from_object(raw: &RawObject) -> Option<Self> {
        Some(Self {
            code: get_str(raw, "currency_code"),
            factor: get_i64(raw, "currency_factor"),
            places: get_i64(raw, "currency_places"),
            number: get_i64(raw, "currency_number"),
            pre_symbol: get_str(raw, "currency_pre_symbol"),
            post_symbol: get_str(raw, "currency_post_symbol"),
        })
    }
}

impl ToJson for Currency {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("code", (&self.code).into()),
            ("factor", self.factor.into()),
            ("places", self.places.into()),
            ("number", self.number.into()),
            ("pre_symbol", (&self.pre_symbol).into()),
            ("post_symbol", (&self.post_symbol).into()),
        ]
    }
}

/// Currency of a result set and, optionally, the currency the caller asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyMeta {
    pub currency: Currency,
    pub desired_currency: Option<Currency>,
}

impl FromRaw for CurrencyMeta {
    // 沒有 currency 就視為不存在
    fn from_object(raw: &RawObject) -> Option<Self> {
        let currency = nested(raw, "currency")?;
        Some(Self {
            currency,
            desired_currency: nested(raw, "desired_currency"),
        })
    }
}

impl ToJson for CurrencyMeta {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("currency", Attr::entity(Some(&self.currency))),
            ("desired_currency", Attr::entity(self.desired_currency.as_ref())),
        ]
    }
}
