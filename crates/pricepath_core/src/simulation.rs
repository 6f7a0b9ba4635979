//! Geometric-random-walk ensemble generation
//!
//! Each path starts at the series' last closing price and advances one time
//! step at a time by multiplying the previous value by `exp(shock)`, with
//! shocks drawn i.i.d. from a normal distribution parameterized by the
//! sample statistics of the historical log-returns. The process is Markov:
//! row `d` depends only on row `d - 1` and fresh randomness.

use rand::distr::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::ensemble::Ensemble;
use crate::error::{Result, SimulationError};
use crate::returns::ReturnStatistics;
use crate::risk::{RiskReport, summarize};
use crate::series::PriceSeries;
use crate::smoothing::{SmoothingMethod, adaptive_window, smooth};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Paths per generator batch; each batch gets its own seeded RNG so path
/// generation is deterministic regardless of worker-thread scheduling.
const MAX_BATCH_SIZE: usize = 100;

/// One of the three ensemble variants retained by [`SimulationSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnsembleVariant {
    Raw,
    SimpleMa,
    WeightedMa,
}

impl EnsembleVariant {
    pub const ALL: [EnsembleVariant; 3] = [
        EnsembleVariant::Raw,
        EnsembleVariant::SimpleMa,
        EnsembleVariant::WeightedMa,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            EnsembleVariant::Raw => "RAW",
            EnsembleVariant::SimpleMa => "MA",
            EnsembleVariant::WeightedMa => "WMA",
        }
    }
}

/// The three parallel ensemble variants from one simulation request.
///
/// All three are computed every invocation; the caller picks which to
/// consume. `window` is the smoothing window shared by both smoothed
/// variants, so their outputs are directly comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSet {
    pub raw: Ensemble,
    pub simple_ma: Ensemble,
    pub weighted_ma: Ensemble,
    pub window: usize,
}

impl SimulationSet {
    #[must_use]
    pub fn variant(&self, variant: EnsembleVariant) -> &Ensemble {
        match variant {
            EnsembleVariant::Raw => &self.raw,
            EnsembleVariant::SimpleMa => &self.simple_ma,
            EnsembleVariant::WeightedMa => &self.weighted_ma,
        }
    }

    /// Terminal-value risk report for every variant, in [`EnsembleVariant::ALL`] order.
    pub fn reports(&self) -> Result<Vec<(EnsembleVariant, RiskReport)>> {
        EnsembleVariant::ALL
            .iter()
            .map(|v| summarize(self.variant(*v)).map(|report| (*v, report)))
            .collect()
    }
}

/// Generate a raw ensemble of `num_paths` price paths over `days` steps.
///
/// Row 0 equals the series' last closing price for every path; each later
/// row is the previous row times `exp(shock)` element-wise. Every output
/// value is strictly positive when the last close is positive. Randomness
/// comes solely from the injected `rng`, so a seeded generator makes the
/// result reproducible.
pub fn generate<R: Rng + ?Sized>(
    series: &PriceSeries,
    num_paths: usize,
    days: usize,
    rng: &mut R,
) -> Result<Ensemble> {
    validate_dimensions(num_paths, days)?;
    let stats = ReturnStatistics::from_series(series)?;
    let Some(last_close) = series.last_close() else {
        return Err(SimulationError::InsufficientData { observations: 0 });
    };
    let normal = shock_distribution(&stats);

    let mut ensemble = Ensemble::filled(days, num_paths, last_close);
    for day in 1..days {
        for path in 0..num_paths {
            let shock: f64 = normal.sample(rng);
            let value = ensemble.get(day - 1, path) * shock.exp();
            ensemble.set(day, path, value);
        }
    }

    Ok(ensemble)
}

/// Run a full simulation: raw ensemble plus both smoothed variants.
///
/// Path generation is batched, with each batch's `SmallRng` seeded from
/// `seed` and the batch index; with the `parallel` feature (default on)
/// batches run across rayon worker threads. The result is identical for a
/// fixed seed regardless of thread count.
pub fn simulate(series: &PriceSeries, config: &SimulationConfig, seed: u64) -> Result<SimulationSet> {
    validate_dimensions(config.num_paths, config.days)?;
    let stats = ReturnStatistics::from_series(series)?;
    let Some(last_close) = series.last_close() else {
        return Err(SimulationError::InsufficientData { observations: 0 });
    };

    let raw = generate_batched(&stats, last_close, config.num_paths, config.days, seed);
    let window = config.window.unwrap_or_else(|| adaptive_window(config.days));
    let simple_ma = smooth(&raw, SmoothingMethod::Simple, window)?;
    let weighted_ma = smooth(&raw, SmoothingMethod::Weighted, window)?;

    Ok(SimulationSet {
        raw,
        simple_ma,
        weighted_ma,
        window,
    })
}

/// Generate paths in column batches and assemble the row-major matrix.
fn generate_batched(
    stats: &ReturnStatistics,
    last_close: f64,
    num_paths: usize,
    days: usize,
    seed: u64,
) -> Ensemble {
    let normal = shock_distribution(stats);
    let num_batches = num_paths.div_ceil(MAX_BATCH_SIZE);

    let run_batch = |i: usize| -> Vec<Vec<f64>> {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));

        let batch_size = if i == num_batches - 1 {
            num_paths - i * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };

        (0..batch_size)
            .map(|_| sample_path(last_close, &normal, days, &mut rng))
            .collect()
    };

    #[cfg(feature = "parallel")]
    let paths: Vec<Vec<f64>> = (0..num_batches)
        .into_par_iter()
        .flat_map_iter(run_batch)
        .collect();

    #[cfg(not(feature = "parallel"))]
    let paths: Vec<Vec<f64>> = (0..num_batches).flat_map(run_batch).collect();

    let mut values = Vec::with_capacity(days * num_paths);
    for day in 0..days {
        for path in &paths {
            values.push(path[day]);
        }
    }
    Ensemble::from_values(days, num_paths, values)
}

/// One independent path. Paths are mutually independent, so sampling a
/// whole column from one generator draws from the same distribution as the
/// row-at-a-time formulation in [`generate`].
fn sample_path<R: Rng + ?Sized>(
    last_close: f64,
    normal: &Normal<f64>,
    days: usize,
    rng: &mut R,
) -> Vec<f64> {
    let mut path = Vec::with_capacity(days);
    path.push(last_close);
    for day in 1..days {
        let shock: f64 = normal.sample(rng);
        path.push(path[day - 1] * shock.exp());
    }
    path
}

fn shock_distribution(stats: &ReturnStatistics) -> Normal<f64> {
    // ReturnStatistics only holds finite means and non-negative finite
    // deviations, which Normal::new accepts unconditionally.
    Normal::new(stats.mean, stats.std_dev)
        .expect("return statistics form a valid normal distribution")
}

fn validate_dimensions(num_paths: usize, days: usize) -> Result<()> {
    if num_paths == 0 {
        return Err(SimulationError::InvalidParameter {
            name: "num_paths",
            value: num_paths,
            reason: "at least one path is required",
        });
    }
    if days == 0 {
        return Err(SimulationError::InvalidParameter {
            name: "days",
            value: days,
            reason: "at least one time step is required",
        });
    }
    Ok(())
}
