use super::melon_box::Shipment;
use super::orders::Order;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing stage a status message comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Pick,
    Clean,
    Label,
    Inspect,
    Paint,
    Trash,
    Pack,
    Ship,
}

/// One human-readable status message from a robot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEvent {
    pub robot: String,
    pub stage: Stage,
    pub message: String,
}

impl StatusEvent {
    pub fn new(robot: impl Into<String>, stage: Stage, message: impl Into<String>) -> Self {
        Self {
            robot: robot.into(),
            stage,
            message: message.into(),
        }
    }
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Status: {}", self.robot, self.message)
    }
}

/// Terminal result of processing one order
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// Requested quantity accepted, packed and shipped
    Fulfilled {
        order: Order,
        attempts: u32,
        shipment: Shipment,
    },
    /// Pick ceiling exceeded; nothing was shipped
    Failed { order: Order, attempts: u32 },
}

impl OrderOutcome {
    pub fn order(&self) -> &Order {
        match self {
            OrderOutcome::Fulfilled { order, .. } | OrderOutcome::Failed { order, .. } => order,
        }
    }

    /// Pick attempts spent on the order
    pub fn attempts(&self) -> u32 {
        match self {
            OrderOutcome::Fulfilled { attempts, .. } | OrderOutcome::Failed { attempts, .. } => {
                *attempts
            }
        }
    }

    pub fn shipment(&self) -> Option<&Shipment> {
        match self {
            OrderOutcome::Fulfilled { shipment, .. } => Some(shipment),
            OrderOutcome::Failed { .. } => None,
        }
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, OrderOutcome::Fulfilled { .. })
    }
}
