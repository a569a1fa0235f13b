//! Wall-clock helpers for timestamps and message time labels.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in epoch milliseconds (`0.0` outside the browser).
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// `HH:MM` label for a message timestamp, in local time in the browser and
/// UTC elsewhere.
#[must_use]
pub fn time_label(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        format_clock(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        utc_label(timestamp_ms)
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn utc_label(timestamp_ms: f64) -> String {
    let total_minutes = (timestamp_ms.max(0.0) / 60_000.0) as u64;
    let minutes = (total_minutes % 60) as u32;
    let hours = ((total_minutes / 60) % 24) as u32;
    format_clock(hours, minutes)
}

fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}
