//! Sensors Page
//!
//! The dashboard body: sensor selector, gauge and trend chart, detail card,
//! PLC and system panels, and the reading history.

use leptos::*;

use crate::components::{HistoryList, PlcPanel, SensorChart, SensorGauge, SensorSelector, SystemInfo};
use crate::format;
use crate::state::use_global_state;

/// Sensors dashboard page
#[component]
pub fn SensorsPage() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <SensorSelector />

            // Gauge and trend chart side by side
            <div class="grid lg:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h3 class="text-xl font-semibold mb-4">"📊 Medidor en Tiempo Real"</h3>
                    <SensorGauge />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h3 class="text-xl font-semibold mb-4">"📈 Tendencia Temporal"</h3>
                    <SensorChart />
                </section>
            </div>

            <SensorDetail />

            <PlcPanel />

            <SystemInfo />

            <HistoryList />
        </div>
    }
}

/// Detail card for the selected sensor: large value, percentage, progress
/// bar and metadata rows
#[component]
fn SensorDetail() -> impl IntoView {
    let state = use_global_state();

    let kind = state.selected_sensor;
    let store = state.store;

    let percentage = create_memo(move |_| {
        store
            .get()
            .latest
            .map(|snapshot| format::percentage_for(kind.get(), &snapshot))
            .unwrap_or(0.0)
    });
    let color = create_memo(move |_| {
        store
            .get()
            .latest
            .map(|snapshot| format::color_for(kind.get(), &snapshot))
            .unwrap_or_else(|| "#9E9E9E".to_string())
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            // Header with sensor name and activity badge
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-xl font-semibold">
                    {move || format!("{} {}", kind.get().icon(), kind.get().label())}
                </h2>
                {move || {
                    if store.get().connected {
                        view! {
                            <span class="flex items-center space-x-2 text-green-400 text-sm">
                                <span class="w-2 h-2 bg-green-400 rounded-full" />
                                <span>"Activo"</span>
                            </span>
                        }.into_view()
                    } else {
                        view! {
                            <span class="flex items-center space-x-2 text-red-400 text-sm">
                                <span class="w-2 h-2 bg-red-400 rounded-full" />
                                <span>"Inactivo"</span>
                            </span>
                        }.into_view()
                    }
                }}
            </div>

            // Large value and percentage
            <div class="text-center mb-6">
                <div
                    class="text-5xl font-bold"
                    style=move || format!("color: {}", color.get())
                >
                    {move || {
                        store
                            .get()
                            .latest
                            .map(|snapshot| format::display_for(kind.get(), &snapshot))
                            .unwrap_or_else(|| "—".to_string())
                    }}
                </div>
                <div class="text-gray-400 mt-2">
                    {move || format!("{:.1}%", percentage.get())}
                </div>
            </div>

            // Progress bar
            <div class="bg-gray-700 rounded-full h-3 mb-6 overflow-hidden">
                <div
                    class="h-full rounded-full transition-all duration-300"
                    style=move || format!(
                        "width: {}%; background-color: {}",
                        percentage.get(),
                        color.get(),
                    )
                />
            </div>

            // Metadata rows
            <div class="space-y-2 text-sm">
                <div class="flex items-center justify-between">
                    <span class="text-gray-400">"Rango:"</span>
                    <span>{move || kind.get().range()}</span>
                </div>
                <div class="flex items-center justify-between">
                    <span class="text-gray-400">"Valor actual:"</span>
                    <span>
                        {move || {
                            let kind = kind.get();
                            format!("{}{}", store.get().value(kind), kind.unit())
                        }}
                    </span>
                </div>
                <div class="flex items-center justify-between">
                    <span class="text-gray-400">"Última actualización:"</span>
                    <span>
                        {move || {
                            store
                                .get()
                                .latest
                                .map(|snapshot| format::clock_time(snapshot.received_at))
                                .unwrap_or_else(|| "N/A".to_string())
                        }}
                    </span>
                </div>
            </div>
        </section>
    }
}
