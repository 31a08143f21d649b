//! ESP32 Sensor Dashboard
//!
//! Browser dashboard for an ESP32 industrial monitoring setup, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Live potentiometer and temperature readings from a Firebase Realtime
//!   Database feed
//! - Radial gauge and trend chart per sensor
//! - Rolling history of the last 20 readings
//! - Static PLC I/O and system information panels
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All live data arrives over a single server-sent-events
//! subscription to the hosted database; the ESP32 firmware writes the
//! watched record every few seconds.

use leptos::*;

mod app;
mod components;
mod feed;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
