use super::config::FactoryConfig;
use super::errors::FactoryError;
use super::events::OrderOutcome;
use super::melon_box::Shipment;
use super::observer::{FactoryObserver, StatusBoard};
use super::orders::Order;
use super::robots::{
    CleanerBot, InspectorBot, PackerBot, PainterBot, Picker, PickerBot, PrepLine, Prepper,
    ShipperBot, StickerBot, TrashBot, Verdict,
};
use super::types::Melon;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Drives orders through pick, prep, inspection, packing and shipping
///
/// Orders are processed one at a time. Each order gets its own attempt
/// counter; once it exceeds `melon_limit` the order fails and nothing is
/// shipped for it.
pub struct ShippingProcedure {
    config: FactoryConfig,
    rng: StdRng,
    board: StatusBoard,
    picker: Box<dyn Picker>,
    prepper: Box<dyn Prepper>,
    inspector: InspectorBot,
    painter: PainterBot,
    trash: TrashBot,
    packer: PackerBot,
    shipper: ShipperBot,
}

impl ShippingProcedure {
    /// Build the factory floor described by `config`
    pub fn new(config: FactoryConfig) -> Result<Self, FactoryError> {
        config.validate()?;

        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let picker = PickerBot::new(config.max_weight)?;
        let prepper = PrepLine::new(CleanerBot, StickerBot::new(config.label_probability)?);

        Ok(Self {
            rng,
            board: StatusBoard::new(),
            picker: Box::new(picker),
            prepper: Box::new(prepper),
            inspector: InspectorBot,
            painter: PainterBot,
            trash: TrashBot,
            packer: PackerBot::new(config.box_capacity),
            shipper: ShipperBot,
            config,
        })
    }

    /// Replace the picking stage
    pub fn with_picker(mut self, picker: Box<dyn Picker>) -> Self {
        self.picker = picker;
        self
    }

    /// Replace the prep stage
    pub fn with_prepper(mut self, prepper: Box<dyn Prepper>) -> Self {
        self.prepper = prepper;
        self
    }

    /// Add an observer for robot status messages and order outcomes
    pub fn add_observer(&mut self, observer: Box<dyn FactoryObserver>) {
        self.board.add_observer(observer);
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Fulfill a single order
    pub fn fulfill(&mut self, order: &Order) -> OrderOutcome {
        self.board.order_started(order);

        let kind = order.kind();
        let quantity = order.quantity as usize;
        let mut attempts: u32 = 0;
        let mut collected: Vec<Melon> = Vec::new();

        while collected.len() < quantity {
            if attempts > self.config.melon_limit {
                debug!(
                    "{}: pick ceiling {} exceeded with {}/{} accepted",
                    order.id,
                    self.config.melon_limit,
                    collected.len(),
                    quantity
                );
                let outcome = OrderOutcome::Failed {
                    order: order.clone(),
                    attempts,
                };
                self.board.order_complete(&outcome);
                return outcome;
            }

            let mut melon = Melon::new(kind.clone());
            self.picker.pick(&mut melon, &mut self.rng, &mut self.board);
            attempts += 1;

            self.prepper.prep(&mut melon, &mut self.rng, &mut self.board);

            if self.config.repaint_squash && melon.kind().is_winter_squash() {
                self.painter.paint(&mut melon, &mut self.board);
            }

            match self.inspector.evaluate(&melon, &mut self.board) {
                Verdict::Passed => collected.push(melon),
                Verdict::Rejected(_) => self.trash.trash(melon, &mut self.board),
            }
        }

        debug!("{}: {} accepted after {} picks", order.id, quantity, attempts);

        let shipment = Shipment::new(self.packer.pack(collected, &mut self.board));
        self.shipper.ship(&shipment, &mut self.board);

        let outcome = OrderOutcome::Fulfilled {
            order: order.clone(),
            attempts,
            shipment,
        };
        self.board.order_complete(&outcome);
        outcome
    }

    /// Fulfill orders in sequence. A failed order does not stop the ones after it.
    pub fn run<I>(&mut self, orders: I) -> FactoryReport
    where
        I: IntoIterator<Item = Order>,
    {
        let mut report = FactoryReport::default();
        for order in orders {
            let outcome = self.fulfill(&order);
            report.record(&outcome);
        }
        report
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Fulfilled,
    Failed,
}

/// Per-order line of a [`FactoryReport`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: String,
    pub melon_type: String,
    pub quantity: u32,
    pub attempts: u32,
    pub status: OrderStatus,
    pub boxes: usize,
    pub shipped_weight: f64,
}

impl From<&OrderOutcome> for OrderSummary {
    fn from(outcome: &OrderOutcome) -> Self {
        let order = outcome.order();
        let (status, boxes, shipped_weight) = match outcome.shipment() {
            Some(shipment) => (
                OrderStatus::Fulfilled,
                shipment.box_count(),
                shipment.total_weight(),
            ),
            None => (OrderStatus::Failed, 0, 0.0),
        };

        Self {
            order_id: order.id.clone(),
            melon_type: order.melon_type.clone(),
            quantity: order.quantity,
            attempts: outcome.attempts(),
            status,
            boxes,
            shipped_weight,
        }
    }
}

/// Summary of a factory run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactoryReport {
    pub orders: Vec<OrderSummary>,
    pub fulfilled: usize,
    pub failed: usize,
    pub total_attempts: u64,
}

impl FactoryReport {
    pub fn record(&mut self, outcome: &OrderOutcome) {
        let summary = OrderSummary::from(outcome);
        match summary.status {
            OrderStatus::Fulfilled => self.fulfilled += 1,
            OrderStatus::Failed => self.failed += 1,
        }
        self.total_attempts += u64::from(summary.attempts);
        self.orders.push(summary);
    }
}
