//! Pages
//!
//! Top-level page components.

pub mod sensors;

pub use sensors::SensorsPage;
