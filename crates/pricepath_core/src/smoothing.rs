//! Windowed smoothing transforms over a simulation ensemble
//!
//! Both transforms operate on each path (column) independently and preserve
//! the ensemble's shape. Rows before the window has filled are computed as
//! NaN markers, then resolved by the fill pass so no undefined value reaches
//! a consumer.

use serde::{Deserialize, Serialize};

use crate::ensemble::Ensemble;
use crate::error::{Result, SimulationError};

/// Which windowed transform to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmoothingMethod {
    /// Arithmetic mean of the trailing window.
    Simple,
    /// Linearly weighted mean of the trailing window, heaviest weight on
    /// the most recent row.
    Weighted,
}

/// Adaptive window size for a `days`-step ensemble: `min(20, days / 10)`,
/// clamped to at least 1. Computed once per ensemble and shared by both
/// methods so their outputs are directly comparable.
#[must_use]
pub fn adaptive_window(days: usize) -> usize {
    (days / 10).min(20).max(1)
}

/// Apply a windowed transform to every path of `ensemble`.
///
/// The value at row `d` covers rows `d - window + 1 ..= d` of the same
/// column; the first defined row is `window - 1`. After the transform,
/// undefined leading cells are forward-filled where a prior defined value
/// exists and back-filled from the column's first defined value otherwise,
/// so the output contains no NaN.
///
/// Fails with [`SimulationError::InvalidParameter`] unless
/// `1 <= window <= ensemble.days()`.
pub fn smooth(ensemble: &Ensemble, method: SmoothingMethod, window: usize) -> Result<Ensemble> {
    if window < 1 {
        return Err(SimulationError::InvalidParameter {
            name: "window",
            value: window,
            reason: "smoothing window must be at least 1",
        });
    }
    if window > ensemble.days() {
        return Err(SimulationError::InvalidParameter {
            name: "window",
            value: window,
            reason: "smoothing window cannot exceed the number of days",
        });
    }

    let days = ensemble.days();
    let num_paths = ensemble.num_paths();
    let weights = match method {
        SmoothingMethod::Simple => uniform_weights(window),
        SmoothingMethod::Weighted => linear_weights(window),
    };

    let mut smoothed = Ensemble::filled(days, num_paths, f64::NAN);
    for path in 0..num_paths {
        for day in (window - 1)..days {
            let start = day + 1 - window;
            let mut acc = 0.0;
            for (k, weight) in weights.iter().enumerate() {
                acc += weight * ensemble.get(start + k, path);
            }
            smoothed.set(day, path, acc);
        }
    }

    fill_undefined(&mut smoothed);
    Ok(smoothed)
}

/// Equal weights summing to 1 (the arithmetic mean as a weighted sum).
fn uniform_weights(window: usize) -> Vec<f64> {
    vec![1.0 / window as f64; window]
}

/// The linear ramp `1, 2, ..., window` normalized to sum to 1, oldest row
/// first.
fn linear_weights(window: usize) -> Vec<f64> {
    let total: f64 = (window * (window + 1)) as f64 / 2.0;
    (1..=window).map(|w| w as f64 / total).collect()
}

/// Resolve NaN markers per column: forward-fill from the nearest prior
/// defined value, and back-fill rows before the first defined value with
/// that value.
fn fill_undefined(ensemble: &mut Ensemble) {
    let days = ensemble.days();
    let num_paths = ensemble.num_paths();

    for path in 0..num_paths {
        let mut last_defined: Option<f64> = None;
        let mut leading = 0;

        for day in 0..days {
            let value = ensemble.get(day, path);
            if value.is_nan() {
                match last_defined {
                    Some(fill) => ensemble.set(day, path, fill),
                    None => leading += 1,
                }
            } else if last_defined.is_none() {
                last_defined = Some(value);
                for earlier in 0..leading {
                    ensemble.set(earlier, path, value);
                }
            } else {
                last_defined = Some(value);
            }
        }
    }
}
