use crate::core::inventory::{SnapshotError, SnapshotStore, StockMap};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// JSON snapshot file. The whole stock table is one object:
/// { "apple": 7, "flour": 2.5 }
/// written with 4-space indentation, in store order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSnapshotStore;

impl SnapshotStore for JsonSnapshotStore {
    fn read(&self, path: &Path) -> Result<StockMap, SnapshotError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(SnapshotError::Missing),
            Err(e) => return Err(e.into()),
        };
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                SnapshotError::Io(e.into())
            } else {
                SnapshotError::Corrupt(e.to_string())
            }
        })
    }

    fn write(&self, path: &Path, stock: &StockMap) -> Result<(), SnapshotError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        stock.serialize(&mut ser).map_err(|e| {
            if e.is_io() {
                SnapshotError::Io(e.into())
            } else {
                SnapshotError::Encode(e)
            }
        })?;
        // BufWriter swallows errors on drop
        writer.flush()?;
        Ok(())
    }
}
