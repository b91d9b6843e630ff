// The inventory store holds every stock rule. It knows nothing about JSON or
// the filesystem: snapshots go through whatever `SnapshotStore` it was built
// with, so the same rules run against a real file or an in-memory fake.

use super::inventory_models::{
    LoadOutcome, Removal, StockLogEntry, StockMap, DEFAULT_LOW_STOCK_THRESHOLD,
};
use super::inventory_store::{InventoryError, SnapshotError, SnapshotStore};
use super::quantity::Quantity;
use std::io::{self, Write};
use std::path::Path;

// ============================================================================
// CORE SERVICE
// ============================================================================

/// In-memory stock table with snapshot persistence.
///
/// Only strictly positive quantities are ever stored: any update that takes an
/// item to zero or below drops the entry.
pub struct InventoryStore<S: SnapshotStore> {
    stock: StockMap,
    snapshots: S,
}

impl<S: SnapshotStore> InventoryStore<S> {
    /// Create an empty store that persists through `snapshots`.
    pub fn new(snapshots: S) -> Self {
        Self {
            stock: StockMap::new(),
            snapshots,
        }
    }

    /// Add `quantity` of `item`, creating the entry if needed.
    ///
    /// Returns the log entry for the caller to keep. Adding a negative amount
    /// that exhausts the stock drops the entry like `remove` would.
    pub fn add(
        &mut self,
        item: &str,
        quantity: impl Into<Quantity>,
    ) -> Result<StockLogEntry, InventoryError> {
        let quantity = quantity.into();
        self.try_add(item, quantity)
            .inspect_err(|err| tracing::warn!("Failed to add {} of '{}': {}", quantity, item, err))
    }

    /// Same as [`add`](Self::add), appending the log entry to `log` on success.
    pub fn add_logged(
        &mut self,
        item: &str,
        quantity: impl Into<Quantity>,
        log: &mut Vec<StockLogEntry>,
    ) -> Result<(), InventoryError> {
        let entry = self.add(item, quantity)?;
        log.push(entry);
        Ok(())
    }

    fn try_add(&mut self, item: &str, quantity: Quantity) -> Result<StockLogEntry, InventoryError> {
        if item.trim().is_empty() {
            return Err(InventoryError::InvalidInput(
                "item name must not be empty".to_string(),
            ));
        }
        check_finite(item, quantity)?;

        let updated = self
            .quantity_of(item)
            .checked_add(quantity)
            .ok_or_else(|| InventoryError::Arithmetic {
                item: item.to_string(),
            })?;
        self.put(item, updated);

        let entry = StockLogEntry::added(item, quantity);
        tracing::info!("{}", entry);
        Ok(entry)
    }

    /// Take `quantity` of `item` out of stock.
    ///
    /// Removing more than is on hand is allowed and simply depletes the item.
    pub fn remove(
        &mut self,
        item: &str,
        quantity: impl Into<Quantity>,
    ) -> Result<Removal, InventoryError> {
        let quantity = quantity.into();
        self.try_remove(item, quantity).inspect_err(|err| {
            tracing::warn!("Failed to remove {} of '{}': {}", quantity, item, err)
        })
    }

    fn try_remove(&mut self, item: &str, quantity: Quantity) -> Result<Removal, InventoryError> {
        check_finite(item, quantity)?;
        let current = *self
            .stock
            .get(item)
            .ok_or_else(|| InventoryError::NotFound(item.to_string()))?;

        let updated = current
            .checked_sub(quantity)
            .ok_or_else(|| InventoryError::Arithmetic {
                item: item.to_string(),
            })?;

        if self.put(item, updated) {
            Ok(Removal::Remaining(updated))
        } else {
            Ok(Removal::Depleted)
        }
    }

    /// Store `quantity` for `item`, or drop the entry if it is not positive.
    /// Returns whether the item is still stocked.
    fn put(&mut self, item: &str, quantity: Quantity) -> bool {
        if quantity.is_positive() {
            // insert() keeps an existing key in its original position
            self.stock.insert(item.to_string(), quantity);
            true
        } else {
            self.stock.shift_remove(item);
            false
        }
    }

    /// Quantity on hand, zero for unknown items.
    pub fn quantity_of(&self, item: &str) -> Quantity {
        self.stock.get(item).copied().unwrap_or_default()
    }

    /// Items whose quantity is strictly below `threshold`, in store order.
    pub fn low_stock_items(&self, threshold: impl Into<Quantity>) -> Vec<&str> {
        let threshold = threshold.into();
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.as_str())
            .collect()
    }

    /// [`low_stock_items`](Self::low_stock_items) with the default threshold.
    #[allow(dead_code)]
    pub fn low_stock(&self) -> Vec<&str> {
        self.low_stock_items(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    #[allow(dead_code)]
    pub fn items(&self) -> impl Iterator<Item = (&str, Quantity)> {
        self.stock.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    // ========================================================================
    // PERSISTENCE
    // ========================================================================

    /// Replace the whole stock table with the snapshot at `path`.
    ///
    /// A missing or undecodable snapshot leaves the store empty and is
    /// reported through the returned `LoadOutcome`. Other I/O failures are
    /// returned as errors and leave the store untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, InventoryError> {
        let path = path.as_ref();
        let outcome = match self.snapshots.read(path).and_then(check_snapshot) {
            Ok(stock) => {
                self.stock = stock;
                tracing::info!("Loaded {} items from {}", self.stock.len(), path.display());
                LoadOutcome::Loaded(self.stock.len())
            }
            Err(SnapshotError::Missing) => {
                tracing::warn!(
                    "No inventory file found at {}. Starting fresh.",
                    path.display()
                );
                self.stock.clear();
                LoadOutcome::Missing
            }
            Err(SnapshotError::Corrupt(reason)) => {
                tracing::warn!(
                    "Could not decode {} ({}). Starting with an empty inventory.",
                    path.display(),
                    reason
                );
                self.stock.clear();
                LoadOutcome::Corrupt(reason)
            }
            Err(err) => {
                tracing::error!("Failed to read {}: {}", path.display(), err);
                return Err(err.into());
            }
        };
        Ok(outcome)
    }

    /// Write the whole stock table to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), InventoryError> {
        let path = path.as_ref();
        self.snapshots.write(path, &self.stock)?;
        tracing::info!("Saved {} items to {}", self.stock.len(), path.display());
        Ok(())
    }

    // ========================================================================
    // REPORTING
    // ========================================================================

    /// Print every item and its quantity to stdout.
    pub fn report(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.write_report(&mut out) {
            tracing::warn!("Failed to print inventory report: {}", e);
        }
    }

    pub fn write_report(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Items Report:")?;
        for (item, qty) in &self.stock {
            writeln!(out, "{} -> {}", item, qty)?;
        }
        Ok(())
    }
}

impl<S: SnapshotStore + Default> Default for InventoryStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

fn check_finite(item: &str, quantity: Quantity) -> Result<(), InventoryError> {
    if quantity.is_finite() {
        Ok(())
    } else {
        Err(InventoryError::InvalidInput(format!(
            "quantity for '{}' must be a finite number",
            item
        )))
    }
}

/// A snapshot that would put a non-positive quantity or an unnamed item in
/// the store is treated as corrupt.
fn check_snapshot(stock: StockMap) -> Result<StockMap, SnapshotError> {
    for (item, qty) in &stock {
        if item.is_empty() {
            return Err(SnapshotError::Corrupt("empty item name".to_string()));
        }
        if !qty.is_finite() || !qty.is_positive() {
            return Err(SnapshotError::Corrupt(format!(
                "'{}' has non-positive quantity {}",
                item, qty
            )));
        }
    }
    Ok(stock)
}

// ============================================================================
// TESTS
// ============================================================================
