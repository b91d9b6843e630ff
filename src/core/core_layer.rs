// The core module contains the stock rules.
// Nothing in here touches the filesystem directly.

#[path = "inventory/mod.rs"]
pub mod inventory;
