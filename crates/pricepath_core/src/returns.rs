//! Log-return estimation from a historical price series

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::series::PriceSeries;

/// Sample mean and sample standard deviation of per-step log-returns.
///
/// Invariant: `std_dev >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatistics {
    pub mean: f64,
    pub std_dev: f64,
}

impl ReturnStatistics {
    /// Estimate return statistics from a price series.
    ///
    /// Computes `ln(P_t / P_{t-1})` for each consecutive pair of closes and
    /// drops non-finite values (a non-positive price produces one). Fails
    /// with [`SimulationError::InsufficientData`] when fewer than 2 usable
    /// returns remain.
    pub fn from_series(series: &PriceSeries) -> Result<Self> {
        let returns = log_returns(series);
        Self::from_returns(&returns)
    }

    /// Estimate return statistics from pre-computed return observations.
    pub fn from_returns(returns: &[f64]) -> Result<Self> {
        if returns.len() < 2 {
            return Err(SimulationError::InsufficientData {
                observations: returns.len(),
            });
        }

        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns
            .iter()
            .map(|r| (r - mean).powi(2))
            .sum::<f64>()
            / (n - 1.0);

        Ok(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Per-step log-returns of a series, with non-finite observations dropped.
#[must_use]
pub fn log_returns(series: &PriceSeries) -> Vec<f64> {
    let points = series.points();
    points
        .iter()
        .zip(points.iter().skip(1))
        .map(|(prev, next)| (next.close / prev.close).ln())
        .filter(|r| r.is_finite())
        .collect()
}
