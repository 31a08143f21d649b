//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod gauge;
pub mod history;
pub mod info;
pub mod selector;
pub mod toast;

pub use chart::SensorChart;
pub use gauge::SensorGauge;
pub use history::HistoryList;
pub use info::{PlcPanel, SystemInfo};
pub use selector::SensorSelector;
pub use toast::Toast;
