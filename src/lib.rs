pub mod core;

// Re-export commonly used types
pub use crate::core::config::FactoryConfig;
pub use crate::core::errors::FactoryError;
pub use crate::core::events::{OrderOutcome, Stage, StatusEvent};
pub use crate::core::melon_box::{MelonBox, Shipment};
pub use crate::core::observer::{FactoryObserver, LogObserver, StatusBoard};
pub use crate::core::orders::{parse_order_line, Order, OrderLog};
pub use crate::core::shipping::{FactoryReport, OrderStatus, OrderSummary, ShippingProcedure};
pub use crate::core::types::{Color, Melon, ProduceKind};
