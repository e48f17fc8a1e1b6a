use melon_factory::core::robots::{inspect, PackerBot, RejectReason, Verdict};
use melon_factory::{Color, Melon, ProduceKind, StatusBoard};
use proptest::prelude::*;

fn melons(weights: &[f64]) -> Vec<Melon> {
    weights
        .iter()
        .map(|&w| {
            let mut melon = Melon::new(ProduceKind::from_name("Casaba"));
            melon.record_pick(w, Color::Green);
            melon
        })
        .collect()
}

fn color_strategy() -> impl Strategy<Value = Option<Color>> {
    prop_oneof![Just(None), Just(Some(Color::Green)), Just(Some(Color::Yellow))]
}

proptest! {
    #[test]
    fn packing_fills_boxes_in_order(
        weights in proptest::collection::vec(0.01f64..10.0, 0..40),
        capacity in 1usize..8,
    ) {
        let input = melons(&weights);
        let boxes = PackerBot::new(capacity).pack(input.clone(), &mut StatusBoard::new());

        let expected_boxes = if input.is_empty() {
            1
        } else {
            (input.len() + capacity - 1) / capacity
        };
        prop_assert_eq!(boxes.len(), expected_boxes);

        for melon_box in &boxes[..boxes.len() - 1] {
            prop_assert_eq!(melon_box.len(), capacity);
        }
        prop_assert!(boxes.iter().all(|b| b.len() <= capacity));

        let repacked: Vec<Melon> = boxes
            .iter()
            .flat_map(|b| b.contents().iter().cloned())
            .collect();
        prop_assert_eq!(repacked, input);
    }

    #[test]
    fn inspection_is_pure(
        weight in 0.0f64..10.0,
        labels in 0usize..4,
        color in color_strategy(),
    ) {
        let first = inspect(weight, labels, color);
        prop_assert_eq!(first, inspect(weight, labels, color));

        let expected = if weight < 3.0 {
            Verdict::Rejected(RejectReason::Underweight)
        } else if weight > 8.0 {
            Verdict::Rejected(RejectReason::Overweight)
        } else if labels < 2 {
            Verdict::Rejected(RejectReason::Mislabeled)
        } else if color != Some(Color::Green) {
            Verdict::Rejected(RejectReason::NotGreen)
        } else {
            Verdict::Passed
        };
        prop_assert_eq!(first, expected);
    }

    #[test]
    fn rendering_is_stable(weight in 0.01f64..10.0) {
        let mut melon = Melon::new(ProduceKind::from_name("Ogen"));
        melon.record_pick(weight, Color::Green);
        let rendered = melon.to_string();
        prop_assert_eq!(&rendered, &melon.to_string());
        prop_assert!(rendered.starts_with("Green "));
        prop_assert!(rendered.ends_with(" lbs Ogen"));
    }
}
