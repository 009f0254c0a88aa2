//! Summary statistics over response times.
//!
//! Note: Functions taking `&mut` may reorder the input slice.

/// Quantile with linear interpolation between closest ranks, the same
/// convention spreadsheet and dataframe tools default to.
///
/// Returns `None` for an empty slice or when `q` is outside `[0, 1]`.
pub fn quantile(values: &mut [f64], q: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let pos = (values.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    // Clamped so rounding never lifts the cut above the upper rank.
    Some((values[lo] + (values[hi] - values[lo]) * frac).min(values[hi]))
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
