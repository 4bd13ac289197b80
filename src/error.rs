//! Error types for pendulum configuration.

use thiserror::Error;

/// Which rod or bob a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// Pivot to bob 1.
    Inner,
    /// Bob 1 to bob 2.
    Outer,
}

impl core::fmt::Display for Link {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Link::Inner => write!(f, "1"),
            Link::Outer => write!(f, "2"),
        }
    }
}

/// Errors raised when building an integrator from a configuration.
///
/// Values are widened to `f64` so the error type is independent of the
/// integrator's float type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Rod length must be positive and finite.
    #[error("rod {rod} length must be positive and finite, got {value}")]
    InvalidLength { rod: Link, value: f64 },
    /// Mass must be positive and finite.
    #[error("bob {bob} mass must be positive and finite, got {value}")]
    InvalidMass { bob: Link, value: f64 },
    /// Gravitational acceleration must be positive and finite.
    #[error("gravity must be positive and finite, got {0}")]
    InvalidGravity(f64),
    /// Time step must be positive and finite.
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
    /// An initial angle, angular velocity or pivot coordinate is NaN or infinite.
    #[error("initial state and pivot must be finite")]
    NonFiniteInitialState,
    /// `(m1 + m2) - m2` is not strictly positive at working precision.
    #[error("masses {m1} and {m2} leave no margin in the shared denominator")]
    DegenerateMasses { m1: f64, m2: f64 },
}

/// Result alias for configuration validation.
pub type Result<T> = core::result::Result<T, ConfigError>;
