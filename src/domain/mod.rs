// Domain layer: typed entities built from raw payloads, plus the ports the CLI reads them through.

pub mod address;
pub mod currency;
pub mod event;
pub mod meta;
pub mod model;
pub mod order;
pub mod performance;
pub mod ports;
pub mod reservation;
pub mod seat;
pub mod send_method;
pub mod trolley;

pub use address::{Address, Country};
pub use currency::{Currency, CurrencyMeta};
pub use event::Event;
pub use meta::{EventMeta, PerformanceMeta};
pub use model::EntityKind;
pub use order::{Order, TicketOrder};
pub use performance::Performance;
pub use reservation::Reservation;
pub use seat::Seat;
pub use send_method::SendMethod;
pub use trolley::{Bundle, Trolley};
