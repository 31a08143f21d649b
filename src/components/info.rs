//! Informational Panels
//!
//! Static PLC I/O and system configuration cards. Display-only metadata:
//! the pins carry no live I/O semantics here.

use leptos::*;

/// Digital input pins shown in the PLC panel
const INPUT_PINS: [u8; 4] = [34, 35, 36, 39];

/// Digital output pins shown in the PLC panel
const OUTPUT_PINS: [u8; 4] = [25, 26, 27, 33];

/// PLC digital I/O overview
#[component]
pub fn PlcPanel() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-xl font-semibold mb-4">"🔌 Entradas y Salidas PLC"</h3>
            <div class="grid md:grid-cols-2 gap-6">
                <IoGroup title="📥 Entradas Digitales" prefix="IN" pins=&INPUT_PINS />
                <IoGroup title="📤 Salidas Digitales" prefix="OUT" pins=&OUTPUT_PINS />
            </div>
        </section>
    }
}

/// One group of I/O pins
#[component]
fn IoGroup(
    title: &'static str,
    prefix: &'static str,
    pins: &'static [u8],
) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-lg font-medium mb-3">{title}</h4>
            <div class="grid grid-cols-2 gap-2">
                {pins.iter().enumerate().map(|(index, pin)| view! {
                    <div class="flex items-center justify-between bg-gray-700 rounded-lg px-3 py-2">
                        <span class="text-sm">
                            {format!("{}{} (GPIO{})", prefix, index + 1, pin)}
                        </span>
                        <span class="flex items-center space-x-1 text-gray-400 text-xs">
                            <span class="w-2 h-2 bg-gray-500 rounded-full" />
                            <span>"Simulado"</span>
                        </span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// System configuration cards
#[component]
pub fn SystemInfo() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-xl font-semibold mb-4">"⚙️ Información del Sistema"</h3>
            <div class="grid md:grid-cols-3 gap-4">
                <InfoCard
                    title="🌐 Configuración WiFi"
                    rows=vec![
                        ("AP de Configuración:", "Config_ESP32"),
                        ("Contraseña AP:", "12345678"),
                        ("Reset WiFi:", "Mantener GPIO0 por 10s"),
                    ]
                />
                <InfoCard
                    title="📡 Comunicación"
                    rows=vec![
                        ("Frecuencia de envío:", "Cada 5 segundos"),
                        ("Base de datos:", "Firebase Realtime"),
                        ("Protocolo:", "HTTP PUT"),
                    ]
                />
                <InfoCard
                    title="🔧 Hardware"
                    rows=vec![
                        ("Microcontrolador:", "ESP32"),
                        ("Potenciómetro:", "GPIO32 (ADC)"),
                        ("Temperatura:", "DS18B20 (GPIO4)"),
                    ]
                />
            </div>
        </section>
    }
}

/// One titled card of label/value rows
#[component]
fn InfoCard(
    title: &'static str,
    rows: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4">
            <h4 class="font-medium mb-3">{title}</h4>
            <div class="space-y-2">
                {rows.into_iter().map(|(label, value)| view! {
                    <div class="flex items-center justify-between text-sm">
                        <span class="text-gray-400">{label}</span>
                        <span>{value}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
