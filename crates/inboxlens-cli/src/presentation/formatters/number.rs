/// `score * 100` with two decimals, e.g. `0.92` → `92.00%`.
pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// Fraction of the bar to fill, bounded to [0, 1]. NaN fills nothing.
pub fn bar_ratio(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}
