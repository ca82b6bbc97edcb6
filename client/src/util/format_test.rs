use super::*;

// =============================================================
// format_file_size
// =============================================================

#[test]
fn zero_bytes_is_special_cased() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn small_counts_stay_in_bytes() {
    assert_eq!(format_file_size(1), "1 Bytes");
    assert_eq!(format_file_size(1023), "1023 Bytes");
}

#[test]
fn kilobytes_round_to_two_decimals() {
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1100), "1.07 KB");
}

#[test]
fn larger_units() {
    assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    assert_eq!(format_file_size(3_500_000), "3.34 MB");
    assert_eq!(format_file_size(2 * 1024 * 1024 * 1024), "2 GB");
}

#[test]
fn gigabytes_is_the_top_unit() {
    assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
}

#[test]
fn rounding_carries_into_next_unit() {
    assert_eq!(format_file_size(1024 * 1024 - 1), "1 MB");
}

#[test]
fn mantissa_stays_below_1024_except_top_unit() {
    let samples = [1_u64, 999, 1023, 1024, 1025, 65_535, 1_048_575, 1_048_576, 987_654_321, 1_099_511_627_775];
    for bytes in samples {
        let formatted = format_file_size(bytes);
        let (mantissa, unit) = formatted.split_once(' ').unwrap();
        let mantissa: f64 = mantissa.parse().unwrap();
        assert!(mantissa >= 1.0, "{formatted}");
        if unit != "GB" {
            assert!(mantissa < 1024.0, "{formatted}");
        }
    }
}

// =============================================================
// format_time
// =============================================================

#[test]
fn format_time_pads_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(5.0), "0:05");
    assert_eq!(format_time(65.9), "1:05");
    assert_eq!(format_time(600.0), "10:00");
}

#[test]
fn format_time_handles_hours_as_minutes() {
    assert_eq!(format_time(3725.0), "62:05");
}

#[test]
fn format_time_nan_is_zero() {
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(f64::INFINITY), "0:00");
    assert_eq!(format_time(-3.0), "0:00");
}
