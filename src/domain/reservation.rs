use serde_json::Value;

use crate::core::from_raw::{nested, sequence, FromRaw};
use crate::core::json::{Attr, ToJson};
use crate::core::payload::{get_bool, get_f64, RawObject};
use crate::domain::address::{Address, Country};
use crate::domain::order::Order;
use crate::domain::trolley::Trolley;

/// Result of reserving a trolley, with what the purchase step will need.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reservation {
    pub trolley: Option<Trolley>,
    pub unreserved_orders: Vec<Order>,
    pub prefilled_address: Option<Address>,
    pub needs_payment_card: Option<bool>,
    pub needs_email_address: Option<bool>,
    pub needs_agent_reference: Option<bool>,
    pub can_edit_address: Option<bool>,
    pub allowed_countries: Vec<Country>,
    pub minutes_left: Option<f64>,
}

// {"ad": "Andorra", ...} 轉成依代碼排序的國家清單
fn allowed_countries(raw: &RawObject) -> Vec<Country> {
    let Some(countries) = raw.get("allowed_countries").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut allowed: Vec<Country> = countries
        .iter()
        .map(|(code, description)| Country::new(code, description.as_str()))
        .collect();
    allowed.sort_by(|a, b| a.code.cmp(&b.code));
    allowed
}

impl FromRaw for Reservation {
    fn from_object(raw: &RawObject) -> Option<Self> {
        Some(Self {
            trolley: nested(raw, "reserved_trolley"),
            unreserved_orders: sequence(raw, "unreserve_orders"),
            prefilled_address: nested(raw, "prefilled_address"),
            needs_payment_card: get_bool(raw, "needs_payment_card"),
            needs_email_address: get_bool(raw, "needs_email_address"),
            needs_agent_reference: get_bool(raw, "needs_agent_reference"),
            can_edit_address: get_bool(raw, "can_edit_address"),
            allowed_countries: allowed_countries(raw),
            minutes_left: get_f64(raw, "minutes_left_on_reserve"),
        })
    }
}

impl ToJson for Reservation {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("trolley", Attr::entity(self.trolley.as_ref())),
            ("unreserved_orders", Attr::entities(&self.unreserved_orders)),
            ("prefilled_address", Attr::entity(self.prefilled_address.as_ref())),
            ("needs_payment_card", self.needs_payment_card.into()),
            ("needs_email_address", self.needs_email_address.into()),
            ("needs_agent_reference", self.needs_agent_reference.into()),
            ("can_edit_address", self.can_edit_address.into()),
            ("allowed_countries", Attr::entities(&self.allowed_countries)),
            ("minutes_left", self.minutes_left.into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_allowed_countries_sorted_by_code() {
        let data = json!({
            "allowed_countries": {
                "uk": "United Kingdom",
                "ae": "United Arab Emirates",
                "ad": "Andorra",
            }
        });

        let reservation = Reservation::from_raw(Some(&data)).unwrap();
        let codes: Vec<_> = reservation
            .allowed_countries
            .iter()
            .filter_map(|country| country.code.as_deref())
            .collect();
        assert_eq!(codes, vec!["ad", "ae", "uk"]);
        assert_eq!(
            reservation.allowed_countries[0].description.as_deref(),
            Some("Andorra")
        );
    }

    #[test]
    fn test_missing_sections() {
        let reservation = Reservation::from_raw(Some(&json!({"can_edit_address": false}))).unwrap();
        assert!(reservation.trolley.is_none());
        assert!(reservation.prefilled_address.is_none());
        assert!(reservation.unreserved_orders.is_empty());
        assert!(reservation.allowed_countries.is_empty());
        assert_eq!(reservation.can_edit_address, Some(false));
    }
}
