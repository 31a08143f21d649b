//! Chart Component
//!
//! Trend line chart over a sensor's sample window, using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format;
use crate::state::store::SERIES_CAPACITY;
use crate::state::use_global_state;

/// Line chart for the selected sensor's recent samples
#[component]
pub fn SensorChart() -> impl IntoView {
    let state = use_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when data or selection changes
    create_effect(move |_| {
        let kind = state.selected_sensor.get();
        let store = state.store.get();

        let samples = store.series(kind).to_vec();
        let color = store
            .latest
            .map(|snapshot| format::color_for(kind, &snapshot))
            .unwrap_or_else(|| "#9E9E9E".to_string());

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &samples, &color);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, samples: &[f64], color: &str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 20.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if samples.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("Esperando datos...", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    // y-axis bounds with padding
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in samples {
        min = min.min(v);
        max = max.max(v);
    }

    let y_range = max - min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    min -= y_padding;
    max += y_padding;

    // Horizontal grid lines and y labels
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.set_stroke_style(&"#374151".into()); // gray-700
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * (max - min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // Samples are an oldest-first window; x positions are fixed slots so
    // the line slides left as new samples arrive.
    let slot = chart_width / (SERIES_CAPACITY - 1) as f64;
    let x_at = |i: usize| margin_left + i as f64 * slot;
    let y_at = |v: f64| margin_top + ((max - v) / (max - min)) * chart_height;

    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, &v) in samples.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(v));
        } else {
            ctx.line_to(x_at(i), y_at(v));
        }
    }
    ctx.stroke();

    // Sample dots
    ctx.set_fill_style(&color.into());
    for (i, &v) in samples.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(v), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}
