use std::fmt;

use crate::core::from_raw::{nested, sequence, wrapped_sequence, FromRaw};
use crate::core::json::{Attr, ToJson};
use crate::core::payload::{get_bool, get_f64, get_i64, get_str, RawObject};
use crate::core::pricing::SeatPricing;
use crate::domain::event::Event;
use crate::domain::performance::Performance;
use crate::domain::seat::Seat;
use crate::domain::send_method::SendMethod;
use crate::utils::error::Result;
use crate::utils::validation::require_price;

/// Seats of one discount type within an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketOrder {
    pub code: Option<String>,
    pub description: Option<String>,
    pub number_of_seats: Option<i64>,
    pub pricing: SeatPricing,
    pub total_seatprice: Option<f64>,
    pub total_surcharge: Option<f64>,
    pub seats: Vec<Seat>,
}

impl TicketOrder {
    pub fn new(code: &str) -> Self {
        Self {
            code: Some(code.to_string()),
            ..Self::default()
        }
    }

    pub fn with_seats(code: &str, seats: Vec<Seat>) -> Self {
        Self {
            seats,
            ..Self::new(code)
        }
    }

    pub fn combined_price(&self) -> Result<f64> {
        self.pricing.combined_price()
    }

    pub fn non_offer_combined_price(&self) -> Result<f64> {
        self.pricing.non_offer_combined_price()
    }

    pub fn total_combined_price(&self) -> Result<f64> {
        let seatprice = require_price("total_seatprice", self.total_seatprice)?;
        let surcharge = require_price("total_surcharge", self.total_surcharge)?;
        Ok(seatprice + surcharge)
    }
}

impl fmt::Display for TicketOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<TicketOrder {}>", self.code.as_deref().unwrap_or(""))
    }
}

impl FromRaw for TicketOrder {
    fn from_object(raw: &RawObject) -> Option<Self> {
        Some(Self {
            code: get_str(raw, "discount_code"),
            description: get_str(raw, "discount_desc"),
            number_of_seats: get_i64(raw, "no_of_seats"),
            pricing: SeatPricing::from_raw(raw),
            total_seatprice: get_f64(raw, "total_sale_seatprice"),
            total_surcharge: get_f64(raw, "total_sale_surcharge"),
            seats: sequence(raw, "seats"),
        })
    }
}

impl ToJson for TicketOrder {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        let mut attributes: Vec<(&'static str, Attr<'_>)> = vec![
            ("code", (&self.code).into()),
            ("description", (&self.description).into()),
            ("number_of_seats", self.number_of_seats.into()),
        ];
        attributes.extend(self.pricing.json_attributes());
        attributes.push(("total_seatprice", Attr::from(self.total_seatprice)));
        attributes.push(("total_surcharge", Attr::from(self.total_surcharge)));
        attributes.push(("seats", Attr::entities(&self.seats)));
        attributes
    }
}

/// One item in a trolley: seats for a single performance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    pub item: Option<i64>,
    pub event: Option<Event>,
    pub performance: Option<Performance>,
    pub price_band_code: Option<String>,
    pub ticket_type_code: Option<String>,
    pub ticket_type_description: Option<String>,
    pub ticket_orders: Vec<TicketOrder>,
    pub number_of_seats: Option<i64>,
    pub total_seatprice: Option<f64>,
    pub total_surcharge: Option<f64>,
    pub got_requested_seats: Option<bool>,
    pub requested_seats: Vec<Seat>,
    pub backend_purchase_reference: Option<String>,
    pub send_method: Option<SendMethod>,
}

impl Order {
    pub fn new(item: i64) -> Self {
        Self {
            item: Some(item),
            ..Self::default()
        }
    }

    pub fn with_ticket_orders(item: i64, ticket_orders: Vec<TicketOrder>) -> Self {
        Self {
            ticket_orders,
            ..Self::new(item)
        }
    }

    /// Seats across all ticket orders, in ticket order sequence.
    pub fn get_seats(&self) -> Vec<&Seat> {
        self.ticket_orders
            .iter()
            .flat_map(|ticket_order| ticket_order.seats.iter())
            .collect()
    }

    pub fn get_seat_ids(&self) -> Vec<&str> {
        self.get_seats()
            .into_iter()
            .filter_map(|seat| seat.id.as_deref())
            .collect()
    }

    pub fn get_requested_seat_ids(&self) -> Vec<&str> {
        self.requested_seats
            .iter()
            .filter_map(|seat| seat.id.as_deref())
            .collect()
    }

    /// Distinct seat texts in first-seen order, joined with ", ".
    pub fn unique_seat_text(&self) -> String {
        let mut texts: Vec<&str> = Vec::new();
        for text in self.get_seats().into_iter().filter_map(|seat| seat.seat_text.as_deref()) {
            if !text.is_empty() && !texts.contains(&text) {
                texts.push(text);
            }
        }
        texts.join(", ")
    }

    /// Totals must be present; a missing send method or send cost adds nothing.
    pub fn total_including_send_cost(&self) -> Result<f64> {
        let seatprice = require_price("total_seatprice", self.total_seatprice)?;
        let surcharge = require_price("total_surcharge", self.total_surcharge)?;
        let send_cost = self
            .send_method
            .as_ref()
            .and_then(|send_method| send_method.cost)
            .unwrap_or(0.0);
        Ok(seatprice + surcharge + send_cost)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.item {
            Some(item) => write!(f, "<Order {}>", item),
            None => write!(f, "<Order>"),
        }
    }
}

impl FromRaw for Order {
    fn from_object(raw: &RawObject) -> Option<Self> {
        Some(Self {
            item: get_i64(raw, "item_number"),
            event: nested(raw, "event"),
            performance: nested(raw, "performance"),
            price_band_code: get_str(raw, "price_band_code"),
            ticket_type_code: get_str(raw, "ticket_type_code"),
            ticket_type_description: get_str(raw, "ticket_type_desc"),
            ticket_orders: wrapped_sequence(raw, "ticket_orders", "ticket_order"),
            number_of_seats: get_i64(raw, "total_no_of_seats"),
            total_seatprice: get_f64(raw, "total_sale_seatprice"),
            total_surcharge: get_f64(raw, "total_sale_surcharge"),
            got_requested_seats: get_bool(raw, "got_requested_seats"),
            requested_seats: sequence(raw, "requested_seats"),
            backend_purchase_reference: get_str(raw, "backend_purchase_reference"),
            send_method: nested(raw, "send_method"),
        })
    }
}

impl ToJson for Order {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("item", self.item.into()),
            ("event", Attr::entity(self.event.as_ref())),
            ("performance", Attr::entity(self.performance.as_ref())),
            ("price_band_code", (&self.price_band_code).into()),
            ("ticket_type_code", (&self.ticket_type_code).into()),
            ("ticket_type_description", (&self.ticket_type_description).into()),
            ("ticket_orders", Attr::entities(&self.ticket_orders)),
            ("number_of_seats", self.number_of_seats.into()),
            ("total_seatprice", self.total_seatprice.into()),
            ("total_surcharge", self.total_surcharge.into()),
            ("got_requested_seats", self.got_requested_seats.into()),
            ("requested_seats", Attr::entities(&self.requested_seats)),
            ("backend_purchase_reference", (&self.backend_purchase_reference).into()),
            ("send_method", Attr::entity(self.send_method.as_ref())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MappingError;
    use serde_json::json;

    fn ticket_order_data() -> serde_json::Value {
        json!({
            "discount_code": "ADULT",
            "discount_desc": "Adult standard",
            "no_of_seats": 2,
            "sale_seatprice": 25,
            "sale_surcharge": 2.50,
            "total_sale_seatprice": 50,
            "total_sale_surcharge": 5,
            "seats": [
                {"full_id": "ABC123"},
                {"full_id": "DEF456"},
            ]
        })
    }

    fn two_ticket_orders() -> Order {
        let ticket_order_one = TicketOrder::with_seats(
            "a",
            vec![Seat::with_text("A1", "Hell bad"), Seat::new("A2"), Seat::new("A3")],
        );
        let ticket_order_two = TicketOrder::with_seats(
            "b",
            vec![Seat::with_text("B1", "Hell good"), Seat::new("B2"), Seat::new("B3")],
        );
        Order::with_ticket_orders(1, vec![ticket_order_one, ticket_order_two])
    }

    #[test]
    fn test_ticket_order_from_raw() {
        let ticket_order = TicketOrder::from_raw(Some(&ticket_order_data())).unwrap();

        assert_eq!(ticket_order.code.as_deref(), Some("ADULT"));
        assert_eq!(ticket_order.number_of_seats, Some(2));
        assert_eq!(ticket_order.description.as_deref(), Some("Adult standard"));
        assert_eq!(ticket_order.pricing.seatprice, Some(25.0));
        assert_eq!(ticket_order.pricing.surcharge, Some(2.5));
        assert_eq!(ticket_order.total_seatprice, Some(50.0));
        assert_eq!(ticket_order.total_surcharge, Some(5.0));
        assert_eq!(ticket_order.seats.len(), 2);
        assert_eq!(ticket_order.seats[0].id.as_deref(), Some("ABC123"));
        assert_eq!(ticket_order.seats[1].id.as_deref(), Some("DEF456"));
    }

    #[test]
    fn test_ticket_order_prices() {
        let ticket_order = TicketOrder::from_raw(Some(&ticket_order_data())).unwrap();
        assert_eq!(ticket_order.combined_price().unwrap(), 27.5);
        assert_eq!(ticket_order.total_combined_price().unwrap(), 55.0);
        assert!(matches!(
            ticket_order.non_offer_combined_price(),
            Err(MappingError::MissingPrice { .. })
        ));
        assert!(TicketOrder::new("x").total_combined_price().is_err());
    }

    #[test]
    fn test_ticket_order_display() {
        assert_eq!(TicketOrder::new("abc123").to_string(), "<TicketOrder abc123>");
        assert_eq!(Order::new(1).to_string(), "<Order 1>");
    }

    #[test]
    fn test_ticket_order_json_flattens_pricing() {
        let ticket_order = TicketOrder::from_raw(Some(&ticket_order_data())).unwrap();
        let keys: Vec<String> = ticket_order.as_dict_for_json().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "code",
                "description",
                "number_of_seats",
                "seatprice",
                "surcharge",
                "total_seatprice",
                "total_surcharge",
                "seats",
            ]
        );
    }

    #[test]
    fn test_order_from_raw_with_send_method() {
        let data = json!({"item_number": 1, "send_method": {"send_code": "COBO"}});
        let order = Order::from_raw(Some(&data)).unwrap();
        assert_eq!(
            order.send_method.and_then(|send_method| send_method.code).as_deref(),
            Some("COBO")
        );
        assert!(order.ticket_orders.is_empty());
        assert!(order.event.is_none());
    }

    #[test]
    fn test_get_seats() {
        let order = two_ticket_orders();
        let ids: Vec<_> = order.get_seats().iter().filter_map(|seat| seat.id.clone()).collect();
        assert_eq!(ids, vec!["A1", "A2", "A3", "B1", "B2", "B3"]);
        assert_eq!(order.get_seat_ids(), vec!["A1", "A2", "A3", "B1", "B2", "B3"]);
    }

    #[test]
    fn test_unique_seat_text() {
        assert_eq!(two_ticket_orders().unique_seat_text(), "Hell bad, Hell good");
    }

    #[test]
    fn test_get_seats_with_no_ticket_orders() {
        let order = Order::with_ticket_orders(1, vec![]);
        assert!(order.get_seats().is_empty());
        assert_eq!(order.unique_seat_text(), "");
    }

    #[test]
    fn test_get_requested_seat_ids() {
        let order = Order {
            requested_seats: vec![Seat::new("A1"), Seat::new("A2"), Seat::new("A3")],
            ..Order::new(1)
        };
        assert_eq!(order.get_requested_seat_ids(), vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn test_total_including_send_cost() {
        let order = Order {
            total_seatprice: Some(51.0),
            total_surcharge: Some(5.4),
            ..Order::new(1)
        };
        assert_eq!(order.total_including_send_cost().unwrap(), 51.0 + 5.4);

        let order = Order {
            send_method: Some(SendMethod::new("POST", Some(3.5))),
            ..order
        };
        assert_eq!(order.total_including_send_cost().unwrap(), 51.0 + 5.4 + 3.5);

        assert!(Order::new(2).total_including_send_cost().is_err());
    }
}
