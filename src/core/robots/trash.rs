use super::Robot;
use crate::core::events::{Stage, StatusEvent};
use crate::core::observer::StatusBoard;
use crate::core::types::Melon;

/// Takes rejected melons away. The melon is consumed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrashBot;

impl Robot for TrashBot {
    fn robot_name(&self) -> &str {
        "TrashBot"
    }
}

impl TrashBot {
    pub fn trash(&self, melon: Melon, board: &mut StatusBoard) {
        board.report(StatusEvent::new(
            self.robot_name(),
            Stage::Trash,
            format!("Sending {} to the compost", melon),
        ));
    }
}
