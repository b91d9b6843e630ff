// This is the entry point of the stock keeper demo.
//
// **Architecture Overview:**
// - `core/` = Stock rules and the snapshot port (no filesystem access)
// - `infra/` = JSON snapshot file implementation of that port
//
// This file's job is to:
// 1. Load configuration
// 2. Wire the store to its snapshot backend
// 3. Run a short scripted session against it

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with several mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::inventory::{
    InventoryStore, LoadOutcome, Quantity, DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_SNAPSHOT_PATH,
};
use crate::infra::inventory::JsonSnapshotStore;

/// Read `LOW_STOCK_THRESHOLD`, falling back to the default when unset or unparsable.
fn low_stock_threshold() -> Quantity {
    match std::env::var("LOW_STOCK_THRESHOLD") {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(
                "Ignoring LOW_STOCK_THRESHOLD: {}. Using {}.",
                e,
                DEFAULT_LOW_STOCK_THRESHOLD
            );
            Quantity::from(DEFAULT_LOW_STOCK_THRESHOLD)
        }),
        Err(_) => Quantity::from(DEFAULT_LOW_STOCK_THRESHOLD),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let snapshot_path =
        std::env::var("INVENTORY_FILE").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let threshold = low_stock_threshold();

    let mut inventory = InventoryStore::new(JsonSnapshotStore);
    let mut log = Vec::new();

    // Failed adds/removes are already reported by the store; the session
    // carries on regardless.
    for (item, qty) in [("apple", 10), ("banana", 2), ("orange", 1)] {
        let _ = inventory.add_logged(item, qty, &mut log);
    }

    let _ = inventory.remove("apple", 3);
    let _ = inventory.remove("grape", 1);

    println!("Apple stock: {}", inventory.quantity_of("apple"));
    println!("Low items: {:?}", inventory.low_stock_items(threshold));

    // A failed save is fatal
    inventory.save(&snapshot_path)?;

    match inventory.load(&snapshot_path)? {
        LoadOutcome::Loaded(count) => tracing::debug!("Reloaded {} items", count),
        LoadOutcome::Missing | LoadOutcome::Corrupt(_) => {
            tracing::warn!("Snapshot at {} did not reload cleanly", snapshot_path)
        }
    }
    inventory.report();

    tracing::info!(
        "Session finished: {} additions logged, {} items in stock",
        log.len(),
        inventory.len()
    );
    Ok(())
}
