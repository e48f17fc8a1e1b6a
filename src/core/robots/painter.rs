use super::Robot;
use crate::core::events::{Stage, StatusEvent};
use crate::core::observer::StatusBoard;
use crate::core::types::{Color, Melon};

/// Paints melons green, whatever color they came off the vine
#[derive(Debug, Default, Clone, Copy)]
pub struct PainterBot;

impl Robot for PainterBot {
    fn robot_name(&self) -> &str {
        "PainterBot"
    }
}

impl PainterBot {
    pub fn paint(&self, melon: &mut Melon, board: &mut StatusBoard) {
        board.report(StatusEvent::new(
            self.robot_name(),
            Stage::Paint,
            format!("Painting {} Green", melon),
        ));
        melon.paint(Color::Green);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ProduceKind;

    #[test]
    fn test_paint_forces_green() {
        let mut squash = Melon::new(ProduceKind::from_name("winter-squash"));
        squash.record_pick(6.0, Color::Yellow);

        PainterBot.paint(&mut squash, &mut StatusBoard::new());

        assert_eq!(squash.color(), Some(Color::Green));
        assert_eq!(squash.to_string(), "Green 6.00 lbs winter-squash");
    }

    #[test]
    fn test_paint_unpicked_melon() {
        let mut melon = Melon::new(ProduceKind::from_name("Ogen"));
        PainterBot.paint(&mut melon, &mut StatusBoard::new());
        assert_eq!(melon.color(), Some(Color::Green));
    }
}
