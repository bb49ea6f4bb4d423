/// Arithmetic mean, or `0.0` for an empty sample.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`), or `0.0` for an empty sample.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Largest value of the sample, or `None` when it is empty.
#[must_use]
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Splits `values` into those strictly below `threshold` and the rest,
/// preserving relative order in both halves.
#[must_use]
pub fn partition_below(values: &[f64], threshold: f64) -> (Vec<f64>, Vec<f64>) {
    values.iter().partition(|&&v| v < threshold)
}
