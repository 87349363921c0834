use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::from_raw::FromRaw;
use crate::core::json::ToJson;
use crate::domain::{
    Address, Currency, CurrencyMeta, Event, EventMeta, Order, Performance, PerformanceMeta,
    Reservation, Seat, SendMethod, TicketOrder, Trolley,
};
use crate::utils::error::MappingError;

/// Entity kinds a raw payload can be mapped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Address,
    Currency,
    CurrencyMeta,
    Event,
    EventMeta,
    Order,
    Performance,
    PerformanceMeta,
    Reservation,
    Seat,
    SendMethod,
    TicketOrder,
    Trolley,
}

impl EntityKind {
    pub const ALL: [EntityKind; 13] = [
        EntityKind::Address,
        EntityKind::Currency,
        EntityKind::CurrencyMeta,
        EntityKind::Event,
        EntityKind::EventMeta,
        EntityKind::Order,
        EntityKind::Performance,
        EntityKind::PerformanceMeta,
        EntityKind::Reservation,
        EntityKind::Seat,
        EntityKind::SendMethod,
        EntityKind::TicketOrder,
        EntityKind::Trolley,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Address => "address",
            EntityKind::Currency => "currency",
            EntityKind::CurrencyMeta => "currency_meta",
            EntityKind::Event => "event",
            EntityKind::EventMeta => "event_meta",
            EntityKind::Order => "order",
            EntityKind::Performance => "performance",
            EntityKind::PerformanceMeta => "performance_meta",
            EntityKind::Reservation => "reservation",
            EntityKind::Seat => "seat",
            EntityKind::SendMethod => "send_method",
            EntityKind::TicketOrder => "ticket_order",
            EntityKind::Trolley => "trolley",
        }
    }

    /// Maps a raw payload into this kind; `None` when the payload is absent or empty.
    pub fn map_payload(&self, payload: &Value) -> Option<Box<dyn ToJson>> {
        fn boxed<T: FromRaw + ToJson + 'static>(payload: &Value) -> Option<Box<dyn ToJson>> {
            T::from_raw(Some(payload)).map(|entity| Box::new(entity) as Box<dyn ToJson>)
        }

        match self {
            EntityKind::Address => boxed::<Address>(payload),
            EntityKind::Currency => boxed::<Currency>(payload),
            EntityKind::CurrencyMeta => boxed::<CurrencyMeta>(payload),
            EntityKind::Event => boxed::<Event>(payload),
            EntityKind::EventMeta => boxed::<EventMeta>(payload),
            EntityKind::Order => boxed::<Order>(payload),
            EntityKind::Performance => boxed::<Performance>(payload),
            EntityKind::PerformanceMeta => boxed::<PerformanceMeta>(payload),
            EntityKind::Reservation => boxed::<Reservation>(payload),
            EntityKind::Seat => boxed::<Seat>(payload),
            EntityKind::SendMethod => boxed::<SendMethod>(payload),
            EntityKind::TicketOrder => boxed::<TicketOrder>(payload),
            EntityKind::Trolley => boxed::<Trolley>(payload),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| MappingError::InvalidConfigValueError {
                field: "entity".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unknown entity kind. Valid kinds: {}",
                    EntityKind::ALL.map(|kind| kind.name()).join(", ")
                ),
            })
    }
}
