//! Property-based tests for statistics and normalization.

use proptest::prelude::*;

use tabstat_model::Table;
use tabstat_transform::{mean_and_stddev, min_max, normalize_values};

fn spread_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0f64..1000.0, 2..50)
}

// --- Normalization properties ---

proptest! {
    #[test]
    fn normalizing_twice_equals_normalizing_once(values in spread_values()) {
        let (min, max) = min_max(&values).unwrap();
        prop_assume!(max > min);

        let mut once = values.clone();
        normalize_values(&mut once);
        let mut twice = once.clone();
        normalize_values(&mut twice);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_values_stay_in_unit_interval(values in spread_values()) {
        let mut normalized = values;
        normalize_values(&mut normalized);
        for value in normalized {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn normalization_is_affine_in_mean_and_stddev(values in spread_values()) {
        let (min, max) = min_max(&values).unwrap();
        prop_assume!(max - min > 1.0);
        let (mean, stddev) = mean_and_stddev(&values);

        let mut normalized = values.clone();
        normalize_values(&mut normalized);
        let (norm_mean, norm_stddev) = mean_and_stddev(&normalized);

        let range = max - min;
        prop_assert!((norm_mean - (mean - min) / range).abs() < 1e-6);
        prop_assert!((norm_stddev - stddev / range).abs() < 1e-6);
    }

    #[test]
    fn constant_column_normalizes_to_zeros(value in -1000.0f64..1000.0, len in 1usize..30) {
        let mut values = vec![value; len];
        let (_, stddev) = mean_and_stddev(&values);
        normalize_values(&mut values);

        prop_assert!(!stddev.is_nan());
        prop_assert!(stddev <= 1e-6 * value.abs().max(1.0));
        prop_assert!(values.iter().all(|v| *v == 0.0));
    }
}

// --- Row truncation ---

proptest! {
    #[test]
    fn truncation_never_keeps_more_than_the_limit(rows in 0usize..40, limit in 1usize..40) {
        let mut table = Table::new(
            vec!["a".to_string()],
            (0..rows).map(|i| vec![i.to_string()]).collect(),
        );
        table.truncate_rows(Some(limit));
        prop_assert!(table.row_count() <= limit);
        prop_assert_eq!(table.row_count(), rows.min(limit));
    }
}
