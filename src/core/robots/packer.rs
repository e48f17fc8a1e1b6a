use super::Robot;
use crate::core::events::{Stage, StatusEvent};
use crate::core::melon_box::MelonBox;
use crate::core::observer::StatusBoard;
use crate::core::types::Melon;

/// Packs accepted melons into fixed-capacity boxes
#[derive(Debug, Clone, Copy)]
pub struct PackerBot {
    capacity: usize,
}

impl PackerBot {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pack melons in arrival order, starting a new box whenever the
    /// current one is full. Always returns at least one box.
    pub fn pack(&self, melons: Vec<Melon>, board: &mut StatusBoard) -> Vec<MelonBox> {
        let mut boxes = Vec::new();
        let mut current = MelonBox::new(self.capacity);

        for melon in melons {
            board.report(StatusEvent::new(
                self.robot_name(),
                Stage::Pack,
                format!("Packing {}", melon),
            ));

            if current.at_limit() {
                boxes.push(std::mem::replace(&mut current, MelonBox::new(self.capacity)));
            }
            current.add(melon);
        }

        boxes.push(current);
        boxes
    }
}

impl Robot for PackerBot {
    fn robot_name(&self) -> &str {
        "PackerBot"
    }
}
