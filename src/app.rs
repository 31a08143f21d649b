//! App Root Component
//!
//! Main application component: global state provider, feed subscription
//! lifecycle, header and page body.

use leptos::*;

use crate::components::Toast;
use crate::feed;
use crate::pages::SensorsPage;
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Open the feed subscription; release it exactly once on teardown.
    let state = use_global_state();
    let client = feed::init_feed(state, &feed::get_feed_base());
    on_cleanup(move || client.close());

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header />

            <main class="flex-1 container mx-auto px-4 py-8">
                <SensorsPage />
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Page header with brand and live connection status
#[component]
fn Header() -> impl IntoView {
    let state = use_global_state();

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"ET28 PP AG-COMPANY"</h1>
                    <p class="text-gray-400 text-sm">"Sistema de Monitoreo Industrial ESP32"</p>
                </div>

                // Connection status
                <div class="flex items-center space-x-2 text-sm">
                    <span class="text-gray-400">"Estado:"</span>
                    {move || {
                        if state.store.get().connected {
                            view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>"🟢 Conectado"</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"🔴 Desconectado"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>
            </div>
        </header>
    }
}
