use super::Robot;
use crate::core::events::{Stage, StatusEvent};
use crate::core::melon_box::Shipment;
use crate::core::observer::StatusBoard;

/// Ships packed boxes, reporting the weight of each one
#[derive(Debug, Default, Clone, Copy)]
pub struct ShipperBot;

impl Robot for ShipperBot {
    fn robot_name(&self) -> &str {
        "ShipperBot"
    }
}

impl ShipperBot {
    pub fn ship(&self, shipment: &Shipment, board: &mut StatusBoard) {
        board.report(StatusEvent::new(
            self.robot_name(),
            Stage::Ship,
            format!("Shipping {} boxes of melons.", shipment.box_count()),
        ));

        for (i, melon_box) in shipment.boxes().iter().enumerate() {
            board.report(StatusEvent::new(
                self.robot_name(),
                Stage::Ship,
                format!("Box {} Weight: {:.2} lbs", i + 1, melon_box.weight()),
            ));
        }
    }
}
