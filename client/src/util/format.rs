//! Display formatting for file sizes and playback times.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Render a byte count in the largest unit whose mantissa is at least one,
/// rounded to two decimals. `GB` is the top unit.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let mut rounded = round2(value);
    // 1023.999 KB rounds up to 1024 KB; carry into the next unit.
    if rounded >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        unit += 1;
        rounded = round2(value / 1024.0);
    }
    format!("{rounded} {}", SIZE_UNITS[unit])
}

/// Render seconds as `m:ss`. Non-finite or negative input renders `0:00`.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_owned();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
