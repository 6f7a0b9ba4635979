//! Terminal-value risk statistics
//!
//! The aggregator looks only at the terminal row of an ensemble: the
//! simulated price at the final time step across all paths. Percentiles use
//! linear interpolation between order statistics, so the report is
//! deterministic given the ensemble.

use serde::{Deserialize, Serialize};

use crate::ensemble::Ensemble;
use crate::error::{Result, SimulationError};
use crate::returns::ReturnStatistics;
use crate::series::PriceSeries;

/// Trading days per year, used to annualize daily return statistics.
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Risk statistics over one ensemble's terminal values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// 5th percentile of terminal values: the price level below which only
    /// the worst 5% of simulated outcomes fall.
    pub var_5pct: f64,
    /// 1st percentile of terminal values.
    pub var_1pct: f64,
    /// Arithmetic mean of terminal values.
    pub expected_value: f64,
    /// Coefficient of variation as a percentage (sample std dev divided by
    /// the expected value, times 100). `None` when the expected value is 0.
    pub volatility_pct: Option<f64>,
}

/// Compute a [`RiskReport`] from an ensemble's terminal row.
///
/// Fails with [`SimulationError::EmptyEnsemble`] when the ensemble has zero
/// rows or zero columns.
pub fn summarize(ensemble: &Ensemble) -> Result<RiskReport> {
    if ensemble.is_empty() {
        return Err(SimulationError::EmptyEnsemble);
    }

    let mut terminal = ensemble.terminal().to_vec();
    terminal.sort_by(f64::total_cmp);

    let n = terminal.len() as f64;
    let expected_value = terminal.iter().sum::<f64>() / n;
    let std_dev = if terminal.len() > 1 {
        let variance = terminal
            .iter()
            .map(|v| (v - expected_value).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        variance.sqrt()
    } else {
        0.0
    };

    let volatility_pct = if expected_value == 0.0 {
        None
    } else {
        Some(std_dev / expected_value * 100.0)
    };

    Ok(RiskReport {
        var_5pct: percentile(&terminal, 5.0),
        var_1pct: percentile(&terminal, 1.0),
        expected_value,
        volatility_pct,
    })
}

/// Percentile of a sorted, non-empty sample with linear interpolation
/// between order statistics (rank = pct / 100 * (n - 1)).
#[must_use]
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let fraction = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * fraction
}

/// Risk metrics of the historical input series itself, as opposed to the
/// simulated ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRiskReport {
    /// Sample std dev of daily log-returns scaled by sqrt(252).
    pub annualized_volatility: f64,
    /// Annualized mean-over-std-dev ratio. `None` for a zero-volatility
    /// series.
    pub sharpe_ratio: Option<f64>,
    /// Largest peak-to-trough decline of the close series, as a positive
    /// fraction (0.25 = a 25% drawdown).
    pub max_drawdown: f64,
}

impl HistoricalRiskReport {
    /// Compute historical risk metrics from a price series.
    ///
    /// Fails with [`SimulationError::InsufficientData`] under the same
    /// conditions as [`ReturnStatistics::from_series`].
    pub fn from_series(series: &PriceSeries) -> Result<Self> {
        let stats = ReturnStatistics::from_series(series)?;

        let sharpe_ratio = if stats.std_dev == 0.0 {
            None
        } else {
            Some(stats.mean / stats.std_dev * TRADING_DAYS_PER_YEAR.sqrt())
        };

        Ok(Self {
            annualized_volatility: stats.std_dev * TRADING_DAYS_PER_YEAR.sqrt(),
            sharpe_ratio,
            max_drawdown: max_drawdown(series),
        })
    }
}

/// Maximum drawdown of the close series as a positive fraction.
fn max_drawdown(series: &PriceSeries) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut max_drawdown = 0.0;

    for close in series.closes() {
        if close > peak {
            peak = close;
        }
        if peak > 0.0 {
            let drawdown = (peak - close) / peak;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }
    }

    max_drawdown
}
