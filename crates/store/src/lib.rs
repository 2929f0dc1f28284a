//! Snapshot store backends for the shelfy catalog.
//!
//! `JsonSnapshotStore` is the production store: one JSON file, rewritten in
//! full on every save. `InMemorySnapshotStore` keeps snapshots in memory for
//! ephemeral sessions and tests.

pub mod json;
pub mod memory;

pub use json::JsonSnapshotStore;
pub use memory::InMemorySnapshotStore;
