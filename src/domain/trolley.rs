use crate::core::from_raw::{sequence, FromRaw};
use crate::core::json::{Attr, ToJson};
use crate::core::payload::{get_f64, get_i64, get_str, RawObject};
use crate::domain::order::Order;

/// Orders grouped by the backend system that fulfils them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bundle {
    pub source_code: Option<String>,
    pub description: Option<String>,
    pub orders: Vec<Order>,
    pub total_seatprice: Option<f64>,
    pub total_surcharge: Option<f64>,
    pub total_send_cost: Option<f64>,
    pub total: Option<f64>,
    pub currency_code: Option<String>,
}

impl FromRaw for Bundle {
    fn from_object(raw: &RawObject) -> Option<Self> {
        Some(Self {
            source_code: get_str(raw, "bundle_source_code"),
            description: get_str(raw, "bundle_source_desc"),
            orders: sequence(raw, "order"),
            total_seatprice: get_f64(raw, "bundle_total_seatprice"),
            total_surcharge: get_f64(raw, "bundle_total_surcharge"),
            total_send_cost: get_f64(raw, "bundle_total_send_cost"),
            total: get_f64(raw, "bundle_total_cost"),
            currency_code: get_str(raw, "currency_code"),
        })
    }
}

impl ToJson for Bundle {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("source_code", (&self.source_code).into()),
            ("description", (&self.description).into()),
            ("orders", Attr::entities(&self.orders)),
            ("total_seatprice", self.total_seatprice.into()),
            ("total_surcharge", self.total_surcharge.into()),
            ("total_send_cost", self.total_send_cost.into()),
            ("total", self.total.into()),
            ("currency_code", (&self.currency_code).into()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trolley {
    pub token: Option<String>,
    pub transaction_uuid: Option<String>,
    pub random_index: Option<String>,
    pub bundles: Vec<Bundle>,
    pub discarded_orders: Vec<Order>,
    pub minutes_left: Option<f64>,
    pub order_count: Option<i64>,
    pub bundle_count: Option<i64>,
}

impl Trolley {
    /// Orders of every bundle, bundle by bundle.
    pub fn get_orders(&self) -> Vec<&Order> {
        self.bundles
            .iter()
            .flat_map(|bundle| bundle.orders.iter())
            .collect()
    }

    pub fn get_item(&self, item: i64) -> Option<&Order> {
        self.get_orders()
            .into_iter()
            .find(|order| order.item == Some(item))
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.iter().all(|bundle| bundle.orders.is_empty())
    }
}

impl FromRaw for Trolley {
    fn from_object(raw: &RawObject) -> Option<Self> {
        Some(Self {
            token: get_str(raw, "trolley_token"),
            transaction_uuid: get_str(raw, "transaction_uuid"),
            random_index: get_str(raw, "random_index"),
            bundles: sequence(raw, "bundle"),
            discarded_orders: sequence(raw, "discarded_orders"),
            minutes_left: get_f64(raw, "minutes_left_on_reserve"),
            order_count: get_i64(raw, "trolley_order_count"),
            bundle_count: get_i64(raw, "trolley_bundle_count"),
        })
    }
}

impl ToJson for Trolley {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("token", (&self.token).into()),
            ("transaction_uuid", (&self.transaction_uuid).into()),
            ("random_index", (&self.random_index).into()),
            ("bundles", Attr::entities(&self.bundles)),
            ("discarded_orders", Attr::entities(&self.discarded_orders)),
            ("minutes_left", self.minutes_left.into()),
            ("order_count", self.order_count.into()),
            ("bundle_count", self.bundle_count.into()),
        ]
    }
}
