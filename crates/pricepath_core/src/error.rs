use std::fmt;

/// Errors produced by the simulation engine.
///
/// Every failure is local and synchronous: a component either returns a
/// complete, well-formed structure or fails outright with one of these
/// variants. There is no retry or recovery inside the engine; callers
/// receive the error unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Too few usable log-return observations remained after dropping
    /// non-finite values (at least 2 are required).
    InsufficientData { observations: usize },
    /// A simulation or smoothing parameter was out of range.
    InvalidParameter {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },
    /// Aggregation was requested over an ensemble with zero rows or columns.
    EmptyEnsemble,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InsufficientData { observations } => {
                write!(
                    f,
                    "insufficient return observations: got {observations}, need at least 2"
                )
            }
            SimulationError::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "invalid parameter {name}={value}: {reason}")
            }
            SimulationError::EmptyEnsemble => {
                write!(f, "ensemble has no rows or columns to aggregate")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

pub type Result<T> = std::result::Result<T, SimulationError>;
