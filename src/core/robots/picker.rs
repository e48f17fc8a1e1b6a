use super::{Picker, Robot};
use crate::core::errors::FactoryError;
use crate::core::events::{Stage, StatusEvent};
use crate::core::observer::StatusBoard;
use crate::core::types::Melon;
use rand::RngCore;
use rand_distr::{Distribution, Uniform};

/// Picks melons: draws a weight and sets the variant's natural color
#[derive(Debug, Clone)]
pub struct PickerBot {
    weights: Uniform<f64>,
}

impl PickerBot {
    /// Weights fall in `[0, max_weight)`. `max_weight` must be positive and finite.
    pub fn new(max_weight: f64) -> Result<Self, FactoryError> {
        if !max_weight.is_finite() || max_weight <= 0.0 {
            return Err(FactoryError::InvalidConfig(format!(
                "max weight must be a positive number, got {}",
                max_weight
            )));
        }
        Ok(Self {
            weights: Uniform::new(0.0, max_weight),
        })
    }
}

impl Robot for PickerBot {
    fn robot_name(&self) -> &str {
        "PickerBot"
    }
}

impl Picker for PickerBot {
    fn pick(&mut self, melon: &mut Melon, rng: &mut dyn RngCore, board: &mut StatusBoard) {
        let weight = self.weights.sample(rng);
        let color = melon.kind().natural_color();
        melon.record_pick(weight, color);

        board.report(StatusEvent::new(
            self.robot_name(),
            Stage::Pick,
            format!("Picked a {}", melon),
        ));
    }
}
