use super::quantity::Quantity;
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use std::fmt;

/// Snapshot file used when no path is configured.
pub const DEFAULT_SNAPSHOT_PATH: &str = "inventory.json";

/// Items strictly below this quantity count as low stock unless the caller
/// asks for a different threshold.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Item name -> quantity on hand, in insertion order.
pub type StockMap = IndexMap<String, Quantity>;

/// A record of one successful `add`, handed back to the caller to keep.
#[derive(Debug, Clone)]
pub struct StockLogEntry {
    pub at: DateTime<Local>,
    pub item: String,
    pub quantity: Quantity,
}

impl StockLogEntry {
    pub fn added(item: &str, quantity: Quantity) -> Self {
        Self {
            at: Local::now(),
            item: item.to_string(),
            quantity,
        }
    }
}

impl fmt::Display for StockLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.quantity,
            self.item
        )
    }
}

#[allow(dead_code)]
/// What a `remove` left behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Removal {
    /// The item is still stocked with this quantity.
    Remaining(Quantity),
    /// The quantity hit zero or below and the entry was dropped.
    Depleted,
}

#[allow(dead_code)]
/// How a `load` went. Missing and corrupt snapshots are recovered from by
/// starting over with an empty store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Missing,
    Corrupt(String),
}
