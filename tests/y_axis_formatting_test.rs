// tests/y_axis_formatting_test.rs

use udp_jitter_render::plot_framework::format_y_axis_label;

#[test]
fn test_millisecond_axis_keeps_one_decimal() {
    let jitter_label = "Jitter [ms]";

    assert_eq!(format_y_axis_label(0.0, jitter_label), "0.0");
    assert_eq!(format_y_axis_label(1.0, jitter_label), "1.0");
    assert_eq!(format_y_axis_label(4.0, jitter_label), "4.0");
    assert_eq!(format_y_axis_label(8.0, jitter_label), "8.0");

    let delay_label = "Delay [ms]";
    assert_eq!(format_y_axis_label(0.1, delay_label), "0.1");
    assert_eq!(format_y_axis_label(0.6, delay_label), "0.6");
}

#[test]
fn test_large_values_use_suffixes() {
    let label = "Count";

    // 0.0.fract() == 0.0 and the label has no unit hint, so integer format
    assert_eq!(format_y_axis_label(0.0, label), "0");
    assert_eq!(format_y_axis_label(10.0, label), "10");
    assert_eq!(format_y_axis_label(5.7, label), "5.7");
    assert_eq!(format_y_axis_label(1000.0, label), "1k");
    assert_eq!(format_y_axis_label(12500.0, label), "12k");
    assert_eq!(format_y_axis_label(1_000_000.0, label), "1.0M");
    assert_eq!(format_y_axis_label(2_500_000.0, label), "2.5M");
}
