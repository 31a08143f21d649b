//! Global Application State
//!
//! Reactive state management using Leptos signals. The sensor store owns
//! all live data; components read it and never write to it.

use leptos::*;

use super::store::{SensorKind, SensorStore};
use crate::feed::FeedPayload;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Live sensor data: latest snapshot, history, chart series, connectivity
    pub store: RwSignal<SensorStore>,
    /// Which sensor the gauge/chart/detail card shows (display-only)
    pub selected_sensor: RwSignal<SensorKind>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            store: create_rw_signal(SensorStore::new()),
            selected_sensor: create_rw_signal(SensorKind::Potentiometer),
            error: create_rw_signal(None),
        }
    }

    /// Ingest one feed notification, stamped with the current wall clock.
    ///
    /// Uses the non-panicking signal access: the feed may deliver one last
    /// queued notification after the owning view is torn down, which must
    /// be a no-op.
    pub fn apply_snapshot(&self, payload: Option<FeedPayload>) {
        let now_ms = chrono::Utc::now().timestamp_millis();
        self.store
            .try_update(|store| store.apply_snapshot(payload.as_ref(), now_ms));
    }

    /// A feed delivery error: degrade connectivity and surface the message.
    pub fn feed_error(&self, message: &str) {
        self.store.try_update(|store| store.feed_error());
        self.show_error(message);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        if self.error.try_set(Some(message.to_string())).is_some() {
            return;
        }

        // The auto-clear timer needs the browser event loop
        #[cfg(target_arch = "wasm32")]
        {
            let error_signal = self.error;
            gloo_timers::callback::Timeout::new(5000, move || {
                let _ = error_signal.try_set(None);
            })
            .forget();
        }
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
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
    fn apply_snapshot_updates_signals() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state.apply_snapshot(Some(payload(2048.0, 22.5)));

        let store = state.store.get_untracked();
        assert!(store.connected);
        assert_eq!(store.history.len(), 1);
        assert_eq!(store.value(SensorKind::Potentiometer), 2048.0);

        runtime.dispose();
    }

    #[test]
    fn feed_error_disconnects_and_surfaces_message() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state.apply_snapshot(Some(payload(1.0, 1.0)));
        state.feed_error("fallo de prueba");

        assert!(!state.store.get_untracked().connected);
        assert_eq!(
            state.error.get_untracked().as_deref(),
            Some("fallo de prueba")
        );
        // Buffers survive the error
        assert_eq!(state.store.get_untracked().history.len(), 1);

        runtime.dispose();
    }

    #[test]
    fn late_notification_after_teardown_is_noop() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.apply_snapshot(Some(payload(2048.0, 22.5)));
        runtime.dispose();

        // The feed may deliver one more queued notification after the view
        // is torn down; it must land without panicking.
        state.apply_snapshot(Some(payload(1.0, 1.0)));
        state.apply_snapshot(None);
        state.feed_error("conexión perdida");
    }

    #[test]
    fn default_selection_is_potentiometer() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        assert_eq!(
            state.selected_sensor.get_untracked(),
            SensorKind::Potentiometer
        );

        runtime.dispose();
    }
}
