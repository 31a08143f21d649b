//! Sensor Store
//!
//! Ingestion and buffering core: turns feed snapshots into the bounded
//! history and chart series the dashboard renders. Pure Rust, no browser
//! dependencies, so the buffering contract is testable on the host.

use crate::feed::FeedPayload;

/// Rolling history capacity (newest-first)
pub const HISTORY_CAPACITY: usize = 20;

/// Per-sensor chart series capacity (oldest-first sliding window)
pub const SERIES_CAPACITY: usize = 30;

/// The two sensors wired to the ESP32
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorKind {
    Potentiometer,
    Temperature,
}

impl SensorKind {
    pub const ALL: [SensorKind; 2] = [SensorKind::Potentiometer, SensorKind::Temperature];

    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Potentiometer => "Potenciómetro",
            SensorKind::Temperature => "Temperatura DS18B20",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SensorKind::Potentiometer => "🎛️",
            SensorKind::Temperature => "🌡️",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SensorKind::Potentiometer => "",
            SensorKind::Temperature => "°C",
        }
    }

    /// Nominal measurement range, display-only
    pub fn range(&self) -> &'static str {
        match self {
            SensorKind::Potentiometer => "0 - 4095",
            SensorKind::Temperature => "-55°C a +125°C",
        }
    }
}

/// One normalized feed notification. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorSnapshot {
    /// Raw ADC reading, nominally 0..=4095
    pub potentiometer: i32,
    /// Degrees Celsius. Exactly 0.0 is the firmware's "sensor absent"
    /// sentinel, not a true reading.
    pub temperature: f64,
    /// Wall-clock arrival time, unix millis
    pub received_at: i64,
}

impl SensorSnapshot {
    /// Raw numeric value for a sensor, as charted
    pub fn value(&self, kind: SensorKind) -> f64 {
        match kind {
            SensorKind::Potentiometer => self.potentiometer as f64,
            SensorKind::Temperature => self.temperature,
        }
    }
}

/// A history row: snapshot plus a unique, monotonically increasing id
/// (stable key for rendering)
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: u64,
    pub snapshot: SensorSnapshot,
}

/// Dashboard data state, exclusively mutated by feed notifications
#[derive(Clone, Debug, Default)]
pub struct SensorStore {
    /// Most recent snapshot, if any has arrived
    pub latest: Option<SensorSnapshot>,
    /// True while the feed delivers non-null snapshots
    pub connected: bool,
    /// Newest-first, at most `HISTORY_CAPACITY` entries
    pub history: Vec<HistoryEntry>,
    potentiometer_series: Vec<f64>,
    temperature_series: Vec<f64>,
    next_id: u64,
}

impl SensorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one feed notification.
    ///
    /// `None` means the watched record is empty ("no data yet"): the status
    /// drops to disconnected and the buffers are left untouched. Otherwise
    /// missing fields default to 0, the snapshot is stamped with `now_ms`,
    /// prepended to the history and appended to both chart series, each
    /// buffer truncated to its capacity.
    pub fn apply_snapshot(&mut self, payload: Option<&FeedPayload>, now_ms: i64) {
        let Some(payload) = payload else {
            self.connected = false;
            return;
        };

        self.connected = true;

        let snapshot = SensorSnapshot {
            potentiometer: payload.potentiometer.unwrap_or(0.0) as i32,
            temperature: payload.temperature.unwrap_or(0.0),
            received_at: now_ms,
        };
        self.latest = Some(snapshot);

        self.next_id += 1;
        self.history.insert(
            0,
            HistoryEntry {
                id: self.next_id,
                snapshot,
            },
        );
        self.history.truncate(HISTORY_CAPACITY);

        for kind in SensorKind::ALL {
            let series = self.series_mut(kind);
            series.push(snapshot.value(kind));
            if series.len() > SERIES_CAPACITY {
                series.remove(0);
            }
        }
    }

    /// A feed delivery error: degrade connectivity, keep the buffers.
    pub fn feed_error(&mut self) {
        self.connected = false;
    }

    /// Chart samples for a sensor, oldest-first
    pub fn series(&self, kind: SensorKind) -> &[f64] {
        match kind {
            SensorKind::Potentiometer => &self.potentiometer_series,
            SensorKind::Temperature => &self.temperature_series,
        }
    }

    fn series_mut(&mut self, kind: SensorKind) -> &mut Vec<f64> {
        match kind {
            SensorKind::Potentiometer => &mut self.potentiometer_series,
            SensorKind::Temperature => &mut self.temperature_series,
        }
    }

    /// Latest raw value for a sensor (0 before any data)
    pub fn value(&self, kind: SensorKind) -> f64 {
        self.latest.map(|s| s.value(kind)).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(potentiometer: f64, temperature: f64) -> FeedPayload {
        FeedPayload {
            potentiometer: Some(potentiometer),
            temperature: Some(temperature),
        }
    }

    #[test]
    fn snapshot_connects_and_buffers() {
        let mut store = SensorStore::new();
        assert!(!store.connected);

        store.apply_snapshot(Some(&payload(2048.0, 22.5)), 1_000);

        assert!(store.connected);
        assert_eq!(store.history.len(), 1);
        assert_eq!(store.history[0].snapshot.potentiometer, 2048);
        assert_eq!(store.history[0].snapshot.temperature, 22.5);
        assert_eq!(store.history[0].snapshot.received_at, 1_000);
        assert_eq!(store.series(SensorKind::Potentiometer), &[2048.0]);
        assert_eq!(store.series(SensorKind::Temperature), &[22.5]);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let mut store = SensorStore::new();
        store.apply_snapshot(
            Some(&FeedPayload {
                potentiometer: None,
                temperature: Some(18.0),
            }),
            0,
        );

        assert_eq!(store.latest.unwrap().potentiometer, 0);
        assert_eq!(store.latest.unwrap().temperature, 18.0);
    }

    #[test]
    fn null_payload_disconnects_without_mutation() {
        let mut store = SensorStore::new();
        store.apply_snapshot(Some(&payload(100.0, 10.0)), 1);
        store.apply_snapshot(Some(&payload(200.0, 11.0)), 2);
        let history = store.history.clone();
        let series: Vec<f64> = store.series(SensorKind::Potentiometer).to_vec();

        store.apply_snapshot(None, 3);

        assert!(!store.connected);
        assert_eq!(store.history, history);
        assert_eq!(store.series(SensorKind::Potentiometer), series.as_slice());
    }

    #[test]
    fn reconnects_after_null_payload() {
        let mut store = SensorStore::new();
        store.apply_snapshot(None, 1);
        assert!(!store.connected);

        store.apply_snapshot(Some(&payload(1.0, 1.0)), 2);
        assert!(store.connected);
    }

    #[test]
    fn feed_error_keeps_buffers() {
        let mut store = SensorStore::new();
        store.apply_snapshot(Some(&payload(100.0, 10.0)), 1);

        store.feed_error();

        assert!(!store.connected);
        assert_eq!(store.history.len(), 1);
        assert_eq!(store.series(SensorKind::Temperature).len(), 1);
    }

    #[test]
    fn history_is_capped_and_newest_first() {
        let mut store = SensorStore::new();
        for i in 0..25 {
            store.apply_snapshot(Some(&payload(i as f64, i as f64)), i);
            assert!(store.history.len() <= HISTORY_CAPACITY);
        }

        assert_eq!(store.history.len(), HISTORY_CAPACITY);
        // The 20 most recent deliveries, newest first
        assert_eq!(store.history[0].snapshot.potentiometer, 24);
        assert_eq!(store.history[19].snapshot.potentiometer, 5);
        for pair in store.history.windows(2) {
            assert!(pair[0].snapshot.received_at >= pair[1].snapshot.received_at);
            assert!(pair[0].id > pair[1].id);
        }
    }

    #[test]
    fn series_is_a_sliding_window() {
        let mut store = SensorStore::new();
        for i in 0..40 {
            store.apply_snapshot(Some(&payload(i as f64, 0.0)), i);
            let series = store.series(SensorKind::Potentiometer);
            assert!(series.len() <= SERIES_CAPACITY);
            // Newly appended sample is always last
            assert_eq!(*series.last().unwrap(), i as f64);
        }

        let series = store.series(SensorKind::Potentiometer);
        assert_eq!(series.len(), SERIES_CAPACITY);
        // Oldest-first: head has slid forward past the evicted samples
        assert_eq!(series[0], 10.0);
        assert_eq!(series[SERIES_CAPACITY - 1], 39.0);
    }

    #[test]
    fn series_shorter_than_capacity_matches_delivery_count() {
        let mut store = SensorStore::new();
        for i in 0..7 {
            store.apply_snapshot(Some(&payload(0.0, i as f64)), i);
        }
        assert_eq!(store.series(SensorKind::Temperature).len(), 7);
    }

    #[test]
    fn sensor_metadata_is_stable() {
        assert_eq!(SensorKind::Potentiometer.unit(), "");
        assert_eq!(SensorKind::Temperature.unit(), "°C");
        assert_eq!(SensorKind::Potentiometer.label(), "Potenciómetro");
        assert_eq!(SensorKind::Temperature.range(), "-55°C a +125°C");
    }

    #[test]
    fn value_reads_latest_per_kind() {
        let mut store = SensorStore::new();
        assert_eq!(store.value(SensorKind::Potentiometer), 0.0);

        store.apply_snapshot(Some(&payload(3000.0, -4.5)), 1);
        assert_eq!(store.value(SensorKind::Potentiometer), 3000.0);
        assert_eq!(store.value(SensorKind::Temperature), -4.5);
    }
}
