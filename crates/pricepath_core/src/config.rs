//! Simulation configuration

use serde::{Deserialize, Serialize};

fn default_num_paths() -> usize {
    1000
}

fn default_days() -> usize {
    180
}

/// Parameters for one simulation request.
///
/// Validation happens at use sites: `num_paths` and `days` must be at least
/// 1, and an explicit `window` must satisfy `1 <= window <= days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of independent price paths to generate.
    #[serde(default = "default_num_paths")]
    pub num_paths: usize,

    /// Number of time steps per path, including the initial row.
    #[serde(default = "default_days")]
    pub days: usize,

    /// Smoothing window override. When `None`, the adaptive window
    /// `min(20, days / 10)` (at least 1) is used.
    #[serde(default)]
    pub window: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_paths: default_num_paths(),
            days: default_days(),
            window: None,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn new(num_paths: usize, days: usize) -> Self {
        Self {
            num_paths,
            days,
            window: None,
        }
    }
}
