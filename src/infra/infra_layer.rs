// The infra module contains implementations of core traits.

#[path = "inventory/mod.rs"]
pub mod inventory;
