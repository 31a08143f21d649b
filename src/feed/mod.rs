//! Remote Feed
//!
//! Wire types and connection management for the Firebase Realtime Database
//! sensor feed.

pub mod client;

pub use client::{init_feed, FeedClient};

/// Default Realtime Database base URL
pub const DEFAULT_FEED_BASE: &str = "https://convertidor-universal-default-rtdb.firebaseio.com";

/// Record path watched for sensor snapshots
pub const SENSOR_RECORD: &str = "sensores";

/// One whole-document sensor snapshot as written by the ESP32 firmware.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedPayload {
    pub potentiometer: Option<f64>,
    pub temperature: Option<f64>,
}

impl FeedPayload {
    /// Pick the sensor fields out of the raw record value.
    ///
    /// Field names are the firmware's wire format (Spanish). Any other
    /// fields are ignored, and a field of the wrong type reads as missing
    /// (it defaults to 0 at ingestion rather than raising).
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self {
            potentiometer: value.get("potenciometro").and_then(|v| v.as_f64()),
            temperature: value.get("temperatura").and_then(|v| v.as_f64()),
        }
    }
}

/// A `put` event from the database streaming endpoint.
///
/// `path` is relative to the watched record; a path of `"/"` carries the
/// whole document in `data` (or `null` when the record is empty). Child
/// paths carry whatever JSON value changed, scalars included.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FeedEvent {
    pub path: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl FeedEvent {
    /// Whether this event is a whole-document snapshot.
    pub fn is_snapshot(&self) -> bool {
        self.path == "/"
    }

    /// The snapshot carried by a root-path put; `None` when the record is
    /// empty ("no data yet").
    pub fn snapshot_payload(&self) -> Option<FeedPayload> {
        if self.data.is_null() {
            None
        } else {
            Some(FeedPayload::from_value(&self.data))
        }
    }
}

/// Parse the JSON body of a `put` event.
pub fn parse_feed_event(raw: &str) -> Result<FeedEvent, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Get the feed base URL from local storage or use the default
pub fn get_feed_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("sensores_feed_url") {
                url
            } else {
                DEFAULT_FEED_BASE.to_string()
            }
        } else {
            DEFAULT_FEED_BASE.to_string()
        }
    } else {
        DEFAULT_FEED_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Streaming URL for the watched sensor record
pub fn feed_stream_url(base: &str) -> String {
    format!("{}/{}.json", base.trim_end_matches('/'), SENSOR_RECORD)
}
