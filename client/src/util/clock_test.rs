use super::*;

#[test]
fn format_clock_pads() {
    assert_eq!(format_clock(9, 5), "09:05");
    assert_eq!(format_clock(23, 59), "23:59");
}

#[test]
fn utc_label_from_epoch_ms() {
    assert_eq!(utc_label(0.0), "00:00");
    // 13:37 UTC on some day.
    let ts = (3.0 * 86_400.0 + 13.0 * 3_600.0 + 37.0 * 60.0 + 12.0) * 1_000.0;
    assert_eq!(utc_label(ts), "13:37");
}

#[test]
fn utc_label_clamps_negative() {
    assert_eq!(utc_label(-5_000.0), "00:00");
}
