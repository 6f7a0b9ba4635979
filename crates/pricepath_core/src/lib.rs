//! Monte Carlo price-path simulation and smoothing library
//!
//! This crate generates ensembles of synthetic equity price paths from the
//! statistical properties of a historical price series, applies windowed
//! smoothing transforms to each path, and derives risk statistics from the
//! terminal-value distribution. It provides:
//! - Log-return estimation (sample mean and standard deviation)
//! - Geometric-random-walk path generation with an injected random source
//! - Simple and weighted moving-average smoothing with an adaptive window
//! - Percentile-based Value-at-Risk, expected value, and volatility
//!
//! # Quick start
//!
//! ```ignore
//! use pricepath_core::{PriceSeries, SimulationConfig, simulate, summarize};
//!
//! let series = PriceSeries::from_closes(jiff::civil::date(2025, 1, 2), &closes);
//! let config = SimulationConfig::default();
//! let set = simulate(&series, &config, 42)?;
//! let report = summarize(&set.raw)?;
//! println!("5% VaR: {:.2}", report.var_5pct);
//! ```
//!
//! Data flows strictly forward: price series -> return statistics -> raw
//! ensemble -> smoothed ensembles -> risk report. Every value is created
//! fresh per request and never mutated after construction.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
pub mod error;
pub mod returns;
pub mod risk;
pub mod simulation;
pub mod smoothing;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod ensemble;
pub mod series;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::SimulationConfig;
pub use ensemble::Ensemble;
pub use error::{Result, SimulationError};
pub use returns::ReturnStatistics;
pub use risk::{HistoricalRiskReport, RiskReport, summarize};
pub use series::{PricePoint, PriceSeries};
pub use simulation::{EnsembleVariant, SimulationSet, generate, simulate};
pub use smoothing::{SmoothingMethod, adaptive_window, smooth};
