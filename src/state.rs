//! Dynamic state of a double pendulum.

use crate::config::PendulumConfig;
use crate::float::Float;

/// Angles and angular velocities of both rods.
///
/// Angles are measured from the downward vertical and are never wrapped: a
/// chaotic run may accumulate many full turns.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendulumState<F: Float> {
    pub theta1: F,
    pub theta2: F,
    pub omega1: F,
    pub omega2: F,
}

impl<F: Float> PendulumState<F> {
    /// Both rods at the given angles with zero angular velocity.
    pub fn at_rest(theta1: F, theta2: F) -> Self {
        PendulumState {
            theta1,
            theta2,
            omega1: F::zero(),
            omega2: F::zero(),
        }
    }

    /// Initial conditions taken from a configuration.
    pub fn from_config(config: &PendulumConfig<F>) -> Self {
        PendulumState {
            theta1: config.theta1,
            theta2: config.theta2,
            omega1: config.omega1,
            omega2: config.omega2,
        }
    }

    /// Angle of rod 2 relative to rod 1, `theta2 - theta1`.
    pub fn delta(&self) -> F {
        self.theta2 - self.theta1
    }
}
