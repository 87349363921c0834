use anyhow::Result;
use serde_json::json;
use ticketswitch_json::domain::{Event, Order, Performance};
use ticketswitch_json::{FromRaw, JsonOptions, ToJson};

fn order_payload() -> serde_json::Value {
    json!({
        "backend_purchase_reference": "GHI098",
        "event": {
            "event_id": "6IF",
        },
        "item_number": 1,
        "performance": {
            "perf_id": "6IF-A7N",
        },
        "price_band_code": "C/pool",
        "got_requested_seats": true,
        "ticket_orders": {
            "ticket_order": [
                {"discount_code": "ADULT"},
                {"discount_code": "CHILD"},
            ]
        },
        "ticket_type_code": "CIRCLE",
        "ticket_type_desc": "Upper circle",
        "total_no_of_seats": 3,
        "total_sale_seatprice": 51,
        "total_sale_surcharge": 5.40,
        "requested_seats": [
            {"full_id": "ABC123"},
            {"full_id": "DEF456"},
        ],
        "send_method": {
            "send_code": "POST",
            "send_cost": 3.5,
            "send_desc": "Post (UK & Ireland only)",
            "send_type": "post",
            "permitted_countries": {
                "country": [
                    {"country_code": "ie", "country_desc": "Ireland"},
                    {"country_code": "uk", "country_desc": "United Kingdom"}
                ]
            }
        }
    })
}

/// 完整訂單 payload 轉換
#[test]
fn test_order_from_raw() -> Result<()> {
    let order = Order::from_raw(Some(&order_payload())).expect("order should map");

    assert_eq!(order.item, Some(1));
    assert_eq!(order.price_band_code.as_deref(), Some("C/pool"));
    assert_eq!(order.ticket_type_code.as_deref(), Some("CIRCLE"));
    assert_eq!(order.ticket_type_description.as_deref(), Some("Upper circle"));
    assert_eq!(order.number_of_seats, Some(3));
    assert_eq!(order.total_seatprice, Some(51.0));
    assert_eq!(order.total_surcharge, Some(5.40));
    assert_eq!(order.got_requested_seats, Some(true));
    assert_eq!(order.backend_purchase_reference.as_deref(), Some("GHI098"));

    assert_eq!(order.event, Some(Event::new("6IF")));
    assert_eq!(order.performance, Some(Performance::new("6IF-A7N")));

    assert_eq!(order.requested_seats.len(), 2);
    assert_eq!(order.get_requested_seat_ids(), vec!["ABC123", "DEF456"]);

    let send_method = order.send_method.as_ref().expect("send method should map");
    assert_eq!(send_method.permitted_countries.len(), 2);

    assert_eq!(order.total_including_send_cost()?, 51.0 + 5.40 + 3.5);
    Ok(())
}

/// ticket_orders.ticket_order 需解開一層並保持順序
#[test]
fn test_nested_ticket_orders_unwrap_in_order() {
    let payload = json!({
        "ticket_orders": {
            "ticket_order": [
                {"discount_code": "ADULT"},
                {"discount_code": "CHILD"},
            ]
        }
    });

    let order = Order::from_raw(Some(&payload)).expect("order should map");
    let codes: Vec<_> = order
        .ticket_orders
        .iter()
        .map(|ticket_order| ticket_order.code.as_deref())
        .collect();

    assert_eq!(codes, vec![Some("ADULT"), Some("CHILD")]);
    assert!(order.item.is_none());
}

#[test]
fn test_absent_sub_payloads() {
    let order = Order::from_raw(Some(&json!({"item_number": 7}))).expect("order should map");

    assert!(order.event.is_none());
    assert!(order.performance.is_none());
    assert!(order.send_method.is_none());
    assert!(order.ticket_orders.is_empty());
    assert!(order.requested_seats.is_empty());
    assert!(order.total_including_send_cost().is_err());
}

#[test]
fn test_order_projection() -> Result<()> {
    let order = Order::from_raw(Some(&order_payload())).expect("order should map");
    let projected = order.as_dict_for_json();

    println!("🔍 Projected keys: {:?}", projected.keys().collect::<Vec<_>>());

    assert_eq!(projected["item"], 1);
    assert_eq!(projected["event"], json!({"id": "6IF"}));
    assert_eq!(
        projected["ticket_orders"],
        json!([{"code": "ADULT"}, {"code": "CHILD"}])
    );
    assert_eq!(projected["total_seatprice"], json!(51.0));
    assert_eq!(
        projected["send_method"]["permitted_countries"][1],
        json!({"code": "uk", "description": "United Kingdom"})
    );

    // 保留宣告順序
    let text = order.as_json()?;
    let item_at = text.find("\"item\"").expect("item key");
    let event_at = text.find("\"event\"").expect("event key");
    let send_at = text.find("\"send_method\"").expect("send_method key");
    assert!(item_at < event_at && event_at < send_at);

    // 顯示 None 時，巢狀實體也一併顯示
    let verbose = order.to_json_dict(JsonOptions::new(false, true));
    assert_eq!(verbose["event"]["venue"], serde_json::Value::Null);
    assert_eq!(verbose["ticket_orders"][0]["seatprice"], serde_json::Value::Null);
    Ok(())
}
