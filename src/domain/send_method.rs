use crate::core::from_raw::{wrapped_sequence, FromRaw};
use crate::core::json::{Attr, ToJson};
use crate::core::payload::{get_f64, get_str, RawObject};
use crate::domain::address::Country;

/// How tickets reach the customer (post, collection, e-ticket, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendMethod {
    pub code: Option<String>,
    pub cost: Option<f64>,
    pub description: Option<String>,
    pub send_type: Option<String>,
    pub permitted_countries: Vec<Country>,
}

impl SendMethod {
    pub fn new(code: &str, cost: Option<f64>) -> Self {
        Self {
            code: Some(code.to_string()),
            cost,
            ..Self::default()
        }
    }
}

impl FromRaw for SendMethod {
    fn from_object(raw: &RawObject) -> Option<Self> {
        Some(Self {
            code: get_str(raw, "send_code"),
            cost: get_f64(raw, "send_cost"),
            description: get_str(raw, "send_desc"),
            send_type: get_str(raw, "send_type"),
            permitted_countries: wrapped_sequence(raw, "permitted_countries", "country"),
        })
    }
}

impl ToJson for SendMethod {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("code", (&self.code).into()),
            ("cost", self.cost.into()),
            ("description", (&self.description).into()),
            ("type", (&self.send_type).into()),
            ("permitted_countries", Attr::entities(&self.permitted_countries)),
        ]
    }
}
