//! Shared formatting utilities for UI components.

/// Format axis label with smart precision.
pub(super) fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.3}", val)
    }
}

/// Three evenly spaced labels: low, middle, high.
pub(super) fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    vec![
        format_axis_label(bounds[0]),
        format_axis_label((bounds[0] + bounds[1]) / 2.0),
        format_axis_label(bounds[1]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_label_precision() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(142.7), "143");
        assert_eq!(format_axis_label(12.34), "12.3");
        assert_eq!(format_axis_label(0.0271), "0.027");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn labels_cover_bounds() {
        assert_eq!(axis_labels([0.0, 200.0]), vec!["0", "100", "200"]);
    }
}
