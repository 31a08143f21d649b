//! History Component
//!
//! Newest-first list of the last readings received from the feed.

use leptos::*;

use crate::format;
use crate::state::use_global_state;

/// Rolling history of recent readings
#[component]
pub fn HistoryList() -> impl IntoView {
    let state = use_global_state();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-xl font-semibold mb-4">"📊 Historial de Datos"</h3>

            <div class="space-y-2">
                {move || {
                    let history = state.store.get().history;

                    if history.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"Esperando datos del ESP32..."</p>
                        }.into_view()
                    } else {
                        history.into_iter().map(|entry| {
                            let snapshot = entry.snapshot;
                            view! {
                                <div class="flex items-center justify-between py-2 border-b \
                                            border-gray-700 last:border-0">
                                    <span class="text-gray-400 text-sm">
                                        {format::clock_time(snapshot.received_at)}
                                    </span>
                                    <div class="flex items-center space-x-6">
                                        <span class="text-sm">
                                            "🎛️ "
                                            {snapshot.potentiometer}
                                            {format!(
                                                " ({:.1}%)",
                                                format::potentiometer_percentage(snapshot.potentiometer),
                                            )}
                                        </span>
                                        <span class="text-sm">
                                            "🌡️ "
                                            {format::temperature_display(snapshot.temperature)}
                                        </span>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}
