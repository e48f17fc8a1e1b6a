//! Order input: the `<type>:<quantity>` lines of an order log.

use super::errors::FactoryError;
use super::types::ProduceKind;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// A request for `quantity` units of one produce type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub melon_type: String,
    pub quantity: u32,
}

impl Order {
    pub fn new(melon_type: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: format!("order_{}", uuid::Uuid::new_v4()),
            melon_type: melon_type.into(),
            quantity,
        }
    }

    /// Variant the robots should pick for this order
    pub fn kind(&self) -> ProduceKind {
        ProduceKind::from_name(&self.melon_type)
    }
}

/// Parse one order log line of the form `<type>:<quantity>`
///
/// Both parts are trimmed. The quantity must be a positive base-10 integer.
pub fn parse_order_line(line: &str, line_number: usize) -> Result<Order, FactoryError> {
    let malformed = |reason: String| FactoryError::MalformedLine {
        line_number,
        line: line.to_string(),
        reason,
    };

    let (melon_type, quantity) = line
        .split_once(':')
        .ok_or_else(|| malformed("expected <type>:<quantity>".to_string()))?;

    let melon_type = melon_type.trim();
    if melon_type.is_empty() {
        return Err(malformed("missing melon type".to_string()));
    }

    let quantity = quantity.trim();
    let quantity: u32 = quantity
        .parse()
        .map_err(|e| malformed(format!("invalid quantity {:?}: {}", quantity, e)))?;
    if quantity == 0 {
        return Err(malformed("quantity must be positive".to_string()));
    }

    Ok(Order::new(melon_type, quantity))
}

/// Lazy reader over an order log
///
/// Yields one result per non-blank line; line numbers are 1-based.
pub struct OrderLog<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl OrderLog<BufReader<File>> {
    /// Open an order log file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FactoryError> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> OrderLog<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for OrderLog<R> {
    type Item = Result<Order, FactoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }
            return Some(parse_order_line(&line, self.line_number));
        }
    }
}
