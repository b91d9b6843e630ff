use super::inventory_models::StockMap;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Item '{0}' not found")]
    NotFound(String),
    #[error("Arithmetic error while updating '{item}'")]
    Arithmetic { item: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot not found")]
    Missing,
    #[error("Snapshot is corrupt: {0}")]
    Corrupt(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding error: {0}")]
    Encode(serde_json::Error),
}

impl From<SnapshotError> for InventoryError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::Missing => {
                InventoryError::Io(std::io::Error::from(std::io::ErrorKind::NotFound))
            }
            SnapshotError::Corrupt(reason) => InventoryError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                reason,
            )),
            SnapshotError::Io(e) => InventoryError::Io(e),
            SnapshotError::Encode(e) => InventoryError::Serialization(e),
        }
    }
}

/// Reads and writes whole stock snapshots.
///
/// The handle for `path` must be released before either method returns,
/// whatever the outcome.
pub trait SnapshotStore {
    /// `SnapshotError::Missing` when nothing exists at `path`,
    /// `SnapshotError::Corrupt` when it exists but does not decode.
    fn read(&self, path: &Path) -> Result<StockMap, SnapshotError>;

    /// Replaces whatever is at `path`.
    fn write(&self, path: &Path, stock: &StockMap) -> Result<(), SnapshotError>;
}
