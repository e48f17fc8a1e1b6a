use serde::{Deserialize, Serialize};
use std::fmt;

/// Label applied by the StickerBot carrying the company logo
pub const LOGO_LABEL: &str = "UberMelon Logo";
/// Label applied by the StickerBot carrying the quality promise
pub const GUARANTEE_LABEL: &str = "Satisfaction Guaranteed";

const WINTER_SQUASH: &str = "winter-squash";

/// Color a produce unit ends up with after picking or painting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Green,
    Yellow,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Green => write!(f, "Green"),
            Color::Yellow => write!(f, "Yellow"),
        }
    }
}

/// Product variant requested by an order
///
/// The name is kept exactly as it appeared in the order so rendering
/// matches the log the order came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProduceKind {
    Melon(String),
    WinterSquash(String),
}

impl ProduceKind {
    /// Classify a type name. `winter-squash` matches regardless of case
    /// and of whether words are separated by spaces, hyphens or underscores.
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        if normalized == WINTER_SQUASH {
            ProduceKind::WinterSquash(name.to_string())
        } else {
            ProduceKind::Melon(name.to_string())
        }
    }

    /// Name as written in the order
    pub fn name(&self) -> &str {
        match self {
            ProduceKind::Melon(name) | ProduceKind::WinterSquash(name) => name,
        }
    }

    pub fn is_winter_squash(&self) -> bool {
        matches!(self, ProduceKind::WinterSquash(_))
    }

    /// Color assigned when the unit comes off the vine
    pub fn natural_color(&self) -> Color {
        match self {
            ProduceKind::Melon(_) => Color::Green,
            ProduceKind::WinterSquash(_) => Color::Yellow,
        }
    }
}

impl fmt::Display for ProduceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single produce unit moving through the factory
///
/// Passive data: stage robots mutate it in place. Weight is recorded once
/// at pick time; color may be repainted later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Melon {
    kind: ProduceKind,
    weight: f64,
    color: Option<Color>,
    labels: Vec<String>,
}

impl Melon {
    /// Create an unpicked unit of the given kind
    pub fn new(kind: ProduceKind) -> Self {
        Self {
            kind,
            weight: 0.0,
            color: None,
            labels: Vec::new(),
        }
    }

    pub fn kind(&self) -> &ProduceKind {
        &self.kind
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// True once a weight has been recorded
    pub fn is_picked(&self) -> bool {
        self.weight > 0.0
    }

    /// Record the physical attributes assigned at pick time
    ///
    /// # Panics
    /// If the unit was already picked.
    pub fn record_pick(&mut self, weight: f64, color: Color) {
        assert!(!self.is_picked(), "melon {} picked twice", self.kind);
        self.weight = weight.max(0.0);
        self.color = Some(color);
    }

    pub fn paint(&mut self, color: Color) {
        self.color = Some(color);
    }

    pub fn apply_label(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }
}

impl fmt::Display for Melon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weight <= 0.0 {
            return write!(f, "{}", self.kind);
        }

        match self.color {
            Some(color) => write!(f, "{} {:.2} lbs {}", color, self.weight, self.kind),
            None => write!(f, "{:.2} lbs {}", self.weight, self.kind),
        }
    }
}
