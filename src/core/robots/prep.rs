use super::{Prepper, Robot};
use crate::core::errors::FactoryError;
use crate::core::events::{Stage, StatusEvent};
use crate::core::observer::StatusBoard;
use crate::core::types::{Melon, GUARANTEE_LABEL, LOGO_LABEL};
use rand::RngCore;
use rand_distr::{Bernoulli, Distribution};

/// Cleans melons. Nothing about the melon changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanerBot;

impl Robot for CleanerBot {
    fn robot_name(&self) -> &str {
        "CleanerBot"
    }
}

impl CleanerBot {
    pub fn clean(&self, melon: &Melon, board: &mut StatusBoard) {
        board.report(StatusEvent::new(
            self.robot_name(),
            Stage::Clean,
            format!("Cleaned a {}", melon),
        ));
    }
}

/// Applies the logo and guarantee labels, each with an independent chance of sticking
#[derive(Debug, Clone)]
pub struct StickerBot {
    sticks: Bernoulli,
}

impl StickerBot {
    pub fn new(probability: f64) -> Result<Self, FactoryError> {
        let sticks = Bernoulli::new(probability).map_err(|e| {
            FactoryError::InvalidConfig(format!("label probability {}: {}", probability, e))
        })?;
        Ok(Self { sticks })
    }

    /// Logo draw comes first, then the guarantee draw
    pub fn apply_logo(&self, melon: &mut Melon, rng: &mut dyn RngCore, board: &mut StatusBoard) {
        if self.sticks.sample(rng) {
            melon.apply_label(LOGO_LABEL);
        }
        if self.sticks.sample(rng) {
            melon.apply_label(GUARANTEE_LABEL);
        }

        board.report(StatusEvent::new(
            self.robot_name(),
            Stage::Label,
            format!("Applied logos to a {}", melon),
        ));
    }
}

impl Robot for StickerBot {
    fn robot_name(&self) -> &str {
        "StickerBot"
    }
}

/// Default prep: clean, then label
#[derive(Debug, Clone)]
pub struct PrepLine {
    cleaner: CleanerBot,
    sticker: StickerBot,
}

impl PrepLine {
    pub fn new(cleaner: CleanerBot, sticker: StickerBot) -> Self {
        Self { cleaner, sticker }
    }
}

impl Robot for PrepLine {
    fn robot_name(&self) -> &str {
        "PrepLine"
    }
}

impl Prepper for PrepLine {
    fn prep(&mut self, melon: &mut Melon, rng: &mut dyn RngCore, board: &mut StatusBoard) {
        self.cleaner.clean(melon, board);
        self.sticker.apply_logo(melon, rng, board);
    }
}
