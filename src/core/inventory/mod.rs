// Inventory module - stock table, its rules, and the snapshot port
#![allow(unused_imports)]

pub mod inventory_models;
pub mod inventory_service;
pub mod inventory_store;
pub mod quantity;

pub use inventory_models::{
    LoadOutcome, Removal, StockLogEntry, StockMap, DEFAULT_LOW_STOCK_THRESHOLD,
    DEFAULT_SNAPSHOT_PATH,
};
pub use inventory_service::InventoryStore;
pub use inventory_store::{InventoryError, SnapshotError, SnapshotStore};
pub use quantity::Quantity;
