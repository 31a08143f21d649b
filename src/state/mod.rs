//! State Management
//!
//! The sensor store (ingestion and buffering) and its reactive wrapper.

pub mod global;
pub mod store;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use store::{HistoryEntry, SensorKind, SensorSnapshot, SensorStore};
