//! Gauge Component
//!
//! Radial gauge for the selected sensor, drawn on HTML5 Canvas.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format;
use crate::state::use_global_state;

// Gauge arc spans 3/4 of a turn, opening at the bottom
const ARC_START: f64 = 0.75 * PI;
const ARC_SWEEP: f64 = 1.5 * PI;

/// Radial gauge for the selected sensor
#[component]
pub fn SensorGauge() -> impl IntoView {
    let state = use_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when data or selection changes
    create_effect(move |_| {
        let kind = state.selected_sensor.get();
        let store = state.store.get();

        let (percentage, color, value_text) = match store.latest {
            Some(snapshot) => (
                format::percentage_for(kind, &snapshot),
                format::color_for(kind, &snapshot),
                format::display_for(kind, &snapshot),
            ),
            None => (0.0, "#9E9E9E".to_string(), "—".to_string()),
        };

        if let Some(canvas) = canvas_ref.get() {
            draw_gauge(&canvas, percentage, &color, &value_text);
        }
    });

    view! {
        <div class="flex justify-center">
            <canvas
                node_ref=canvas_ref
                width="260"
                height="260"
                class="max-w-full"
            />
        </div>
    }
}

/// Draw the gauge on canvas
fn draw_gauge(canvas: &HtmlCanvasElement, percentage: f64, color: &str, value_text: &str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Background track
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(16.0);
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius, ARC_START, ARC_START + ARC_SWEEP);
    ctx.stroke();

    // Value arc
    let fraction = (percentage / 100.0).clamp(0.0, 1.0);
    if fraction > 0.0 {
        ctx.set_stroke_style(&color.into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius, ARC_START, ARC_START + ARC_SWEEP * fraction);
        ctx.stroke();
    }

    // Center readout
    ctx.set_fill_style(&color.into());
    ctx.set_text_align("center");
    ctx.set_font("bold 26px sans-serif");
    let _ = ctx.fill_text(value_text, cx, cy);

    ctx.set_fill_style(&"#9ca3af".into()); // gray-400
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text(&format!("{:.1}%", percentage), cx, cy + 26.0);
}
