//! Derived-Value Formatting
//!
//! Pure mappings from raw sensor values to display strings, percentages and
//! colors. Deterministic for identical input; no state.

use crate::state::store::{SensorKind, SensorSnapshot};

/// Shown when the temperature probe reports its absence sentinel
pub const SENSOR_NOT_DETECTED: &str = "Sensor no detectado";

/// ADC full-scale value of the potentiometer input
pub const POTENTIOMETER_MAX: f64 = 4095.0;

/// Display scale for the temperature percentage, °C
const TEMPERATURE_SCALE_MIN: f64 = -10.0;
const TEMPERATURE_SCALE_MAX: f64 = 50.0;

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// The firmware reports exactly 0.0 when no DS18B20 probe answers. A true
/// zero-degree reading is indistinguishable from a missing sensor; kept
/// as-is for wire compatibility.
pub fn temperature_is_absent(t: f64) -> bool {
    t == 0.0
}

/// Potentiometer reading as a percentage of full scale, one decimal
pub fn potentiometer_percentage(v: i32) -> f64 {
    let clamped = (v as f64).clamp(0.0, POTENTIOMETER_MAX);
    round1(clamped / POTENTIOMETER_MAX * 100.0)
}

/// Potentiometer accent color: hue sweeps the color wheel with the value
pub fn potentiometer_color(v: i32) -> String {
    let hue = potentiometer_percentage(v) * 1.2;
    format!("hsl({:.0}, 70%, 50%)", hue)
}

/// Temperature as a percentage of the -10..50 °C display scale, one decimal
pub fn temperature_percentage(t: f64) -> f64 {
    if temperature_is_absent(t) {
        return 0.0;
    }
    let clamped = t.clamp(TEMPERATURE_SCALE_MIN, TEMPERATURE_SCALE_MAX);
    round1(
        (clamped - TEMPERATURE_SCALE_MIN) / (TEMPERATURE_SCALE_MAX - TEMPERATURE_SCALE_MIN)
            * 100.0,
    )
}

/// Five-bucket temperature color ladder; lower bound inclusive, upper
/// exclusive
pub fn temperature_color(t: f64) -> &'static str {
    if temperature_is_absent(t) {
        "#9E9E9E" // Gris: sensor no detectado
    } else if t < 0.0 {
        "#2196F3" // Azul: frío extremo
    } else if t < 10.0 {
        "#03A9F4" // Azul claro
    } else if t < 25.0 {
        "#4CAF50" // Verde normal
    } else if t < 35.0 {
        "#FF9800" // Naranja cálido
    } else {
        "#F44336" // Rojo caliente
    }
}

/// Human-readable temperature, or the absence marker
pub fn temperature_display(t: f64) -> String {
    if temperature_is_absent(t) {
        SENSOR_NOT_DETECTED.to_string()
    } else {
        format!("{:.1}°C", t)
    }
}

/// Large display value for a sensor
pub fn display_for(kind: SensorKind, snapshot: &SensorSnapshot) -> String {
    match kind {
        SensorKind::Potentiometer => snapshot.potentiometer.to_string(),
        SensorKind::Temperature => temperature_display(snapshot.temperature),
    }
}

/// Gauge/progress percentage for a sensor
pub fn percentage_for(kind: SensorKind, snapshot: &SensorSnapshot) -> f64 {
    match kind {
        SensorKind::Potentiometer => potentiometer_percentage(snapshot.potentiometer),
        SensorKind::Temperature => temperature_percentage(snapshot.temperature),
    }
}

/// Accent color for a sensor
pub fn color_for(kind: SensorKind, snapshot: &SensorSnapshot) -> String {
    match kind {
        SensorKind::Potentiometer => potentiometer_color(snapshot.potentiometer),
        SensorKind::Temperature => temperature_color(snapshot.temperature).to_string(),
    }
}

/// Wall-clock rendering of a snapshot timestamp, in the viewer's local zone
pub fn clock_time(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn potentiometer_percentage_endpoints() {
        assert_eq!(potentiometer_percentage(0), 0.0);
        assert_eq!(potentiometer_percentage(4095), 100.0);
    }

    #[test]
    fn potentiometer_percentage_clamps_out_of_range() {
        assert_eq!(potentiometer_percentage(-50), 0.0);
        assert_eq!(potentiometer_percentage(5000), 100.0);
    }

    #[test]
    fn potentiometer_percentage_rounds_to_one_decimal() {
        // 2048 / 4095 * 100 = 50.0122...
        assert_eq!(potentiometer_percentage(2048), 50.0);
        assert_eq!(potentiometer_percentage(1000), 24.4);
    }

    #[test]
    fn potentiometer_color_sweeps_hue() {
        assert_eq!(potentiometer_color(0), "hsl(0, 70%, 50%)");
        assert_eq!(potentiometer_color(4095), "hsl(120, 70%, 50%)");
    }

    #[test]
    fn temperature_percentage_clamps_to_display_scale() {
        assert_eq!(temperature_percentage(-20.0), 0.0);
        assert_eq!(temperature_percentage(60.0), 100.0);
        assert_eq!(temperature_percentage(20.0), 50.0);
    }

    #[test]
    fn temperature_sentinel_maps_to_zero_percent() {
        assert_eq!(temperature_percentage(0.0), 0.0);
    }

    #[test]
    fn temperature_color_buckets() {
        assert_eq!(temperature_color(0.0), "#9E9E9E");
        assert_eq!(temperature_color(-5.0), "#2196F3");
        assert_eq!(temperature_color(5.0), "#03A9F4");
        assert_eq!(temperature_color(20.0), "#4CAF50");
        assert_eq!(temperature_color(30.0), "#FF9800");
        assert_eq!(temperature_color(40.0), "#F44336");
    }

    #[test]
    fn temperature_color_bounds_are_lower_inclusive() {
        assert_eq!(temperature_color(10.0), "#4CAF50");
        assert_eq!(temperature_color(25.0), "#FF9800");
        assert_eq!(temperature_color(35.0), "#F44336");
    }

    #[test]
    fn temperature_display_formats_one_decimal() {
        assert_eq!(temperature_display(23.4), "23.4°C");
        assert_eq!(temperature_display(-3.25), "-3.2°C");
    }

    #[test]
    fn temperature_display_sentinel() {
        assert_eq!(temperature_display(0.0), SENSOR_NOT_DETECTED);
    }

    #[test]
    fn per_kind_dispatch() {
        let snapshot = SensorSnapshot {
            potentiometer: 4095,
            temperature: 0.0,
            received_at: 0,
        };
        assert_eq!(display_for(SensorKind::Potentiometer, &snapshot), "4095");
        assert_eq!(
            display_for(SensorKind::Temperature, &snapshot),
            SENSOR_NOT_DETECTED
        );
        assert_eq!(percentage_for(SensorKind::Potentiometer, &snapshot), 100.0);
        assert_eq!(percentage_for(SensorKind::Temperature, &snapshot), 0.0);
        assert_eq!(color_for(SensorKind::Temperature, &snapshot), "#9E9E9E");
    }

    #[test]
    fn clock_time_renders_hms() {
        let rendered = clock_time(1_000_000_000_000);
        assert_eq!(rendered.len(), 8);
        let bytes = rendered.as_bytes();
        assert_eq!(bytes[2], b':');
        assert_eq!(bytes[5], b':');
        assert_eq!(rendered.chars().filter(char::is_ascii_digit).count(), 6);
    }

    #[test]
    fn clock_time_preserves_seconds_across_zones() {
        // Zone offsets are whole minutes, so the seconds field is fixed
        assert!(clock_time(10_000).ends_with(":10"));
    }
}
