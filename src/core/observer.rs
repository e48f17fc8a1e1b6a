use super::events::{OrderOutcome, StatusEvent};
use super::orders::Order;
use log::{info, warn};

/// Observer trait for factory activity
///
/// Robots never print; they report to a [`StatusBoard`], which forwards
/// every message to the registered observers.
pub trait FactoryObserver {
    /// Called for every robot status message
    fn on_status(&mut self, event: &StatusEvent);

    /// Called before the first pick of an order
    fn on_order_started(&mut self, _order: &Order) {}

    /// Called once an order reaches a terminal state
    fn on_order_complete(&mut self, _outcome: &OrderOutcome) {}
}

/// Fan-out point for status messages
#[derive(Default)]
pub struct StatusBoard {
    observers: Vec<Box<dyn FactoryObserver>>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Add an observer; observers are notified in registration order
    pub fn add_observer(&mut self, observer: Box<dyn FactoryObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Publish a robot status message
    pub fn report(&mut self, event: StatusEvent) {
        for observer in &mut self.observers {
            observer.on_status(&event);
        }
    }

    pub(crate) fn order_started(&mut self, order: &Order) {
        for observer in &mut self.observers {
            observer.on_order_started(order);
        }
    }

    pub(crate) fn order_complete(&mut self, outcome: &OrderOutcome) {
        for observer in &mut self.observers {
            observer.on_order_complete(outcome);
        }
    }
}

/// Observer writing everything to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl FactoryObserver for LogObserver {
    fn on_status(&mut self, event: &StatusEvent) {
        info!("{}", event);
    }

    fn on_order_started(&mut self, order: &Order) {
        info!("-----");
        info!("Fulfilling order of {} {}", order.quantity, order.melon_type);
        info!("-----");
    }

    fn on_order_complete(&mut self, outcome: &OrderOutcome) {
        let order = outcome.order();
        match outcome {
            OrderOutcome::Fulfilled { attempts, .. } => {
                info!(
                    "Robots Picked {} {} for order of {}",
                    attempts, order.melon_type, order.quantity
                );
            }
            OrderOutcome::Failed { attempts, .. } => {
                warn!("ALL MELONS HAVE BEEN PICKED");
                warn!(
                    "ORDERS FAILED TO BE FULFILLED! {} ({} {}) gave up after {} picks",
                    order.id, order.quantity, order.melon_type, attempts
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::Stage;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Tally {
        name: &'static str,
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl FactoryObserver for Tally {
        fn on_status(&mut self, event: &StatusEvent) {
            self.seen
                .borrow_mut()
                .push(format!("{}:{}", self.name, event));
        }
    }

    #[test]
    fn test_board_notifies_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut board = StatusBoard::new();
        board.add_observer(Box::new(Tally { name: "a", seen: seen.clone() }));
        board.add_observer(Box::new(Tally { name: "b", seen: seen.clone() }));
        assert_eq!(board.observer_count(), 2);

        board.report(StatusEvent::new("CleanerBot", Stage::Clean, "Cleaned a Casaba"));

        assert_eq!(
            *seen.borrow(),
            vec![
                "a:CleanerBot Status: Cleaned a Casaba".to_string(),
                "b:CleanerBot Status: Cleaned a Casaba".to_string(),
            ]
        );
    }

    #[test]
    fn test_board_without_observers_is_silent() {
        let mut board = StatusBoard::default();
        board.report(StatusEvent::new("TrashBot", Stage::Trash, "nothing"));
        assert_eq!(board.observer_count(), 0);
    }
}
