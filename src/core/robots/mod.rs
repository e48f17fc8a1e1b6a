//! Factory robots: one stage operation each.
//!
//! Robots are passed in explicitly rather than living as process-wide
//! singletons. Picking and prep draw randomness, so they sit behind the
//! [`Picker`] and [`Prepper`] traits and can be swapped out.

pub mod inspector;
pub mod packer;
pub mod painter;
pub mod picker;
pub mod prep;
pub mod shipper;
pub mod trash;

use super::observer::StatusBoard;
use super::types::Melon;
use rand::RngCore;

pub use inspector::{inspect, InspectorBot, RejectReason, Verdict};
pub use packer::PackerBot;
pub use painter::PainterBot;
pub use picker::PickerBot;
pub use prep::{CleanerBot, PrepLine, StickerBot};
pub use shipper::ShipperBot;
pub use trash::TrashBot;

/// Named identity used when a robot reports status
pub trait Robot {
    fn robot_name(&self) -> &str;
}

/// Stage that assigns weight and color to a freshly created melon
pub trait Picker: Robot {
    fn pick(&mut self, melon: &mut Melon, rng: &mut dyn RngCore, board: &mut StatusBoard);
}

/// Stage that cleans and labels a picked melon
pub trait Prepper: Robot {
    fn prep(&mut self, melon: &mut Melon, rng: &mut dyn RngCore, board: &mut StatusBoard);
}
