//! Dense ensemble matrix shared by the generator and smoothing engine

use serde::{Deserialize, Serialize};

/// A dense row-major matrix of shape `days x num_paths`.
///
/// Each column is one simulated price path; row `d` holds every path's value
/// at time step `d`. The same representation serves raw ensembles (from
/// [`crate::simulation::generate`]) and smoothed ensembles (from
/// [`crate::smoothing::smooth`]). An ensemble is never mutated after the
/// producing component returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ensemble {
    days: usize,
    num_paths: usize,
    values: Vec<f64>,
}

impl Ensemble {
    /// A `days x num_paths` matrix with every cell set to `value`.
    pub(crate) fn filled(days: usize, num_paths: usize, value: f64) -> Self {
        Self {
            days,
            num_paths,
            values: vec![value; days * num_paths],
        }
    }

    /// Build an ensemble from raw row-major values.
    ///
    /// `values.len()` must equal `days * num_paths`.
    pub(crate) fn from_values(days: usize, num_paths: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), days * num_paths);
        Self {
            days,
            num_paths,
            values,
        }
    }

    /// Number of time steps (rows).
    #[must_use]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Number of simulated paths (columns).
    #[must_use]
    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days == 0 || self.num_paths == 0
    }

    /// Value of path `path` at time step `day`.
    #[must_use]
    pub fn get(&self, day: usize, path: usize) -> f64 {
        self.values[day * self.num_paths + path]
    }

    pub(crate) fn set(&mut self, day: usize, path: usize, value: f64) {
        self.values[day * self.num_paths + path] = value;
    }

    /// All path values at time step `day`.
    #[must_use]
    pub fn row(&self, day: usize) -> &[f64] {
        &self.values[day * self.num_paths..(day + 1) * self.num_paths]
    }

    /// The terminal row: every path's value at the final time step.
    ///
    /// Empty when the ensemble has no rows.
    #[must_use]
    pub fn terminal(&self) -> &[f64] {
        if self.days == 0 {
            &[]
        } else {
            self.row(self.days - 1)
        }
    }

    /// One path's values across all time steps.
    pub fn path(&self, path: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.days).map(move |day| self.get(day, path))
    }
}
