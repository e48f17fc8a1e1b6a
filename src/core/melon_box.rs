use super::types::Melon;
use std::fmt;

/// Fixed-capacity box the PackerBot fills in arrival order
#[derive(Debug, Clone, PartialEq)]
pub struct MelonBox {
    capacity: usize,
    contents: Vec<Melon>,
}

impl MelonBox {
    /// Create an empty box holding at most `capacity` melons
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            contents: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if the box is full
    pub fn at_limit(&self) -> bool {
        self.contents.len() >= self.capacity
    }

    /// Put a melon in the box
    ///
    /// # Panics
    /// If the box is already full. Packing starts a new box before that
    /// can happen, so overflowing is a bug in the caller.
    pub fn add(&mut self, melon: Melon) {
        assert!(
            !self.at_limit(),
            "box overflow: capacity {} already reached",
            self.capacity
        );
        self.contents.push(melon);
    }

    /// Total weight of the box contents in pounds
    pub fn weight(&self) -> f64 {
        self.contents.iter().map(Melon::weight).sum()
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn contents(&self) -> &[Melon] {
        &self.contents
    }
}

impl fmt::Display for MelonBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Box contains: |")?;
        for melon in &self.contents {
            write!(f, " {} |", melon)?;
        }
        Ok(())
    }
}

/// Boxes produced for a single order, in packing order
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    boxes: Vec<MelonBox>,
}

impl Shipment {
    pub fn new(boxes: Vec<MelonBox>) -> Self {
        Self { boxes }
    }

    pub fn boxes(&self) -> &[MelonBox] {
        &self.boxes
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn melon_count(&self) -> usize {
        self.boxes.iter().map(MelonBox::len).sum()
    }

    pub fn total_weight(&self) -> f64 {
        self.boxes.iter().map(MelonBox::weight).sum()
    }

    /// Every melon in the shipment, box by box
    pub fn melons(&self) -> impl Iterator<Item = &Melon> {
        self.boxes.iter().flat_map(|b| b.contents().iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Color, ProduceKind};

    fn picked(weight: f64) -> Melon {
        let mut melon = Melon::new(ProduceKind::from_name("Casaba"));
        melon.record_pick(weight, Color::Green);
        melon
    }

    #[test]
    fn test_box_fills_to_capacity() {
        let mut melon_box = MelonBox::new(2);
        assert!(melon_box.is_empty());
        assert!(!melon_box.at_limit());

        melon_box.add(picked(3.5));
        melon_box.add(picked(4.0));

        assert_eq!(melon_box.len(), 2);
        assert!(melon_box.at_limit());
        assert!((melon_box.weight() - 7.5).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "box overflow")]
    fn test_overflow_is_fatal() {
        let mut melon_box = MelonBox::new(1);
        melon_box.add(picked(3.5));
        melon_box.add(picked(4.0));
    }

    #[test]
    fn test_box_display() {
        let mut melon_box = MelonBox::new(5);
        assert_eq!(melon_box.to_string(), "Box contains: |");
        melon_box.add(picked(3.5));
        melon_box.add(picked(4.0));
        assert_eq!(
            melon_box.to_string(),
            "Box contains: | Green 3.50 lbs Casaba | Green 4.00 lbs Casaba |"
        );
    }

    #[test]
    fn test_shipment_totals() {
        let mut first = MelonBox::new(2);
        first.add(picked(3.0));
        first.add(picked(4.0));
        let mut second = MelonBox::new(2);
        second.add(picked(5.0));

        let shipment = Shipment::new(vec![first, second]);
        assert_eq!(shipment.box_count(), 2);
        assert_eq!(shipment.melon_count(), 3);
        assert!((shipment.total_weight() - 12.0).abs() < 1e-9);

        let weights: Vec<f64> = shipment.melons().map(Melon::weight).collect();
        assert_eq!(weights, vec![3.0, 4.0, 5.0]);
    }
}
