use super::Robot;
use crate::core::events::{Stage, StatusEvent};
use crate::core::observer::StatusBoard;
use crate::core::types::{Color, Melon};
use std::fmt;

/// Lightest acceptable melon, in pounds (inclusive)
pub const MIN_WEIGHT_LBS: f64 = 3.0;
/// Heaviest melon worth shipping, in pounds (inclusive)
pub const MAX_WEIGHT_LBS: f64 = 8.0;
/// Labels every melon must carry
pub const REQUIRED_LABELS: usize = 2;

/// Why a melon failed inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    Underweight,
    Overweight,
    Mislabeled,
    NotGreen,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Underweight => write!(f, "weight less than 3lbs!  REJECTED!!"),
            RejectReason::Overweight => write!(f, "weight over 8lbs!  REJECTED!!"),
            RejectReason::Mislabeled => write!(f, "is not labeled correctly!  REJECTED!!"),
            RejectReason::NotGreen => {
                write!(f, "is not Green!  All melons must be Green!  REJECTED!!")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_passed(&self) -> bool {
        matches!(self, Verdict::Passed)
    }
}

/// Quality rule chain. Checks run in order and the first failure wins.
pub fn inspect(weight: f64, label_count: usize, color: Option<Color>) -> Verdict {
    if weight < MIN_WEIGHT_LBS {
        return Verdict::Rejected(RejectReason::Underweight);
    }
    if weight > MAX_WEIGHT_LBS {
        return Verdict::Rejected(RejectReason::Overweight);
    }
    if label_count < REQUIRED_LABELS {
        return Verdict::Rejected(RejectReason::Mislabeled);
    }
    if color != Some(Color::Green) {
        return Verdict::Rejected(RejectReason::NotGreen);
    }
    Verdict::Passed
}

/// Decides which melons are fit to ship
#[derive(Debug, Default, Clone, Copy)]
pub struct InspectorBot;

impl Robot for InspectorBot {
    fn robot_name(&self) -> &str {
        "InspectorBot 2000"
    }
}

impl InspectorBot {
    /// Evaluate a melon, reporting the evaluation and its single outcome
    pub fn evaluate(&self, melon: &Melon, board: &mut StatusBoard) -> Verdict {
        board.report(StatusEvent::new(
            self.robot_name(),
            Stage::Inspect,
            format!("Evaluating a {}", melon),
        ));

        let verdict = inspect(melon.weight(), melon.labels().len(), melon.color());
        let message = match verdict {
            Verdict::Passed => format!("{} Passes", melon),
            Verdict::Rejected(reason) => format!("{} {}", melon, reason),
        };
        board.report(StatusEvent::new(self.robot_name(), Stage::Inspect, message));

        verdict
    }
}
