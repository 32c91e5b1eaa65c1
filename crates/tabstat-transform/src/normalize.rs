//! Min-max normalization.

use tabstat_model::ColumnSeries;

/// Smallest and largest value, or `None` for an empty slice.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    }))
}

/// Rescales `values` into `[0, 1]` in place.
///
/// When every value is equal the whole slice becomes `0.0`.
pub fn normalize_values(values: &mut [f64]) {
    let Some((min, max)) = min_max(values) else {
        return;
    };
    if max == min {
        values.fill(0.0);
        return;
    }
    let range = max - min;
    for value in values.iter_mut() {
        *value = (*value - min) / range;
    }
}

/// Normalizes every series in place. Empty series are left untouched.
pub fn normalize_all(series: &mut [ColumnSeries]) {
    for column in series.iter_mut().filter(|s| !s.is_empty()) {
        normalize_values(&mut column.values);
    }
}
