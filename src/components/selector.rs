//! Sensor Selector Component
//!
//! Two-button switch for which sensor the gauge, chart and detail card show.
//! Selection never affects data collection.

use leptos::*;

use crate::state::{use_global_state, SensorKind};

/// Sensor selector button row
#[component]
pub fn SensorSelector() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">"Seleccionar Sensor:"</h3>
            <div class="flex space-x-2">
                {SensorKind::ALL
                    .into_iter()
                    .map(|kind| view! { <SensorButton kind=kind /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Individual sensor selection button
#[component]
fn SensorButton(kind: SensorKind) -> impl IntoView {
    let state = use_global_state();

    let selected = state.selected_sensor;
    let is_active = create_memo(move |_| selected.get() == kind);

    view! {
        <button
            on:click=move |_| selected.set(kind)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {kind.icon()}
            " "
            {kind.label()}
        </button>
    }
}
