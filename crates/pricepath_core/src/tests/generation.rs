//! Tests for path generation mechanics and parameter validation

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::SimulationError;
use crate::returns::ReturnStatistics;
use crate::series::{PricePoint, PriceSeries};
use crate::simulation::generate;

use super::{drift_series, flat_series};

#[test]
fn test_ensemble_shape() {
    let series = drift_series(0.001, 0.02, 60, 50.0);
    let mut rng = SmallRng::seed_from_u64(1);

    let ensemble = generate(&series, 7, 30, &mut rng).unwrap();

    assert_eq!(ensemble.days(), 30);
    assert_eq!(ensemble.num_paths(), 7);
}

#[test]
fn test_row_zero_equals_last_close() {
    let series = drift_series(0.0005, 0.015, 120, 87.5);
    let mut rng = SmallRng::seed_from_u64(2);

    let ensemble = generate(&series, 25, 40, &mut rng).unwrap();

    for &value in ensemble.row(0) {
        assert_eq!(value, 87.5, "row 0 must equal the last close exactly");
    }
}

#[test]
fn test_all_values_positive() {
    let series = drift_series(-0.002, 0.05, 90, 12.0);
    let mut rng = SmallRng::seed_from_u64(3);

    let ensemble = generate(&series, 50, 100, &mut rng).unwrap();

    for day in 0..ensemble.days() {
        for &value in ensemble.row(day) {
            assert!(value > 0.0, "day {day} produced non-positive value {value}");
        }
    }
}

#[test]
fn test_flat_series_is_deterministic() {
    // Constant prices give mean = 0 and std_dev = 0, so every shock is 0
    // and all paths stay pinned at the last price.
    let series = flat_series(42.0, 30);
    let mut rng = SmallRng::seed_from_u64(4);

    let ensemble = generate(&series, 10, 50, &mut rng).unwrap();

    for day in 0..ensemble.days() {
        for &value in ensemble.row(day) {
            assert_eq!(value, 42.0);
        }
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let series = drift_series(0.001, 0.02, 80, 200.0);

    let mut rng_a = SmallRng::seed_from_u64(99);
    let mut rng_b = SmallRng::seed_from_u64(99);
    let a = generate(&series, 20, 30, &mut rng_a).unwrap();
    let b = generate(&series, 20, 30, &mut rng_b).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_zero_paths_rejected() {
    let series = drift_series(0.001, 0.02, 60, 50.0);
    let mut rng = SmallRng::seed_from_u64(5);

    let err = generate(&series, 0, 30, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidParameter {
            name: "num_paths",
            ..
        }
    ));
}

#[test]
fn test_zero_days_rejected() {
    let series = drift_series(0.001, 0.02, 60, 50.0);
    let mut rng = SmallRng::seed_from_u64(6);

    let err = generate(&series, 10, 0, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidParameter { name: "days", .. }
    ));
}

#[test]
fn test_too_few_prices_rejected() {
    // Two closes yield a single return observation
    let series = PriceSeries::from_closes(jiff::civil::date(2025, 1, 2), &[100.0, 101.0]);
    let mut rng = SmallRng::seed_from_u64(7);

    let err = generate(&series, 10, 30, &mut rng).unwrap_err();
    assert_eq!(err, SimulationError::InsufficientData { observations: 1 });
}

#[test]
fn test_non_positive_prices_dropped_from_returns() {
    // ln(0/100) and ln(100/0) are non-finite and must be dropped, leaving
    // only the final 100 -> 100 observation.
    let series = PriceSeries::from_closes(
        jiff::civil::date(2025, 1, 2),
        &[100.0, 0.0, 100.0, 100.0],
    );
    let mut rng = SmallRng::seed_from_u64(8);

    let err = generate(&series, 10, 30, &mut rng).unwrap_err();
    assert_eq!(err, SimulationError::InsufficientData { observations: 1 });
}

#[test]
fn test_return_statistics_sample_std_dev() {
    // Returns +0.02, -0.02 repeated: mean 0, sample std dev uses n - 1.
    let returns = [0.02, -0.02, 0.02, -0.02];
    let stats = ReturnStatistics::from_returns(&returns).unwrap();

    assert!(stats.mean.abs() < 1e-12);
    let expected = (4.0 * 0.02_f64.powi(2) / 3.0).sqrt();
    assert!((stats.std_dev - expected).abs() < 1e-12);
}

#[test]
fn test_series_normalizes_order_and_duplicates() {
    let points = vec![
        PricePoint {
            date: jiff::civil::date(2025, 1, 3),
            close: 102.0,
        },
        PricePoint {
            date: jiff::civil::date(2025, 1, 2),
            close: 100.0,
        },
        PricePoint {
            date: jiff::civil::date(2025, 1, 3),
            close: 103.0,
        },
    ];

    let series = PriceSeries::new(points);

    assert_eq!(series.len(), 2);
    let closes: Vec<f64> = series.closes().collect();
    // Later record wins for the duplicated date
    assert_eq!(closes, vec![100.0, 103.0]);
    assert_eq!(series.last_close(), Some(103.0));
}
