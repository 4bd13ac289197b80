//! Configuration types for the double pendulum.

use crate::error::{ConfigError, Link, Result};
use crate::float::Float;
use crate::vec::Vec2;

/// Vertical convention used when converting angles to coordinates.
///
/// Angles are always measured from the downward vertical. The frame only
/// decides which way `y` points in the positions handed to a presenter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frame {
    /// Screen coordinates: `y` grows downward, a hanging bob sits below the pivot
    /// at `pivot.y + l`.
    #[default]
    YDown,
    /// Mathematical coordinates: `y` grows upward, a hanging bob sits at
    /// `pivot.y - l`.
    YUp,
}

/// Order in which one step updates velocities and angles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scheme {
    /// Velocities first, then angles from the new velocities.
    #[default]
    SemiImplicitEuler,
    /// Angles from the old velocities, then velocities. Not symplectic; energy
    /// drifts noticeably faster. Kept for comparison runs.
    ExplicitEuler,
}

/// Form of the angular acceleration equations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Equations {
    /// The classic closed form with `delta = theta2 - theta1` used in every
    /// term. Reproduces the reference animation exactly. The velocity-dependent
    /// `sin(delta)` terms carry the opposite sign to the Lagrangian, so total
    /// energy is not conserved once the rods swing apart.
    #[default]
    Reference,
    /// Same closed form with the `sin(delta)` terms sign-corrected, matching
    /// the Euler-Lagrange equations. Conserves energy up to integration error.
    Lagrangian,
}

/// Physical parameters and initial conditions of a double pendulum.
///
/// # Builder Pattern
/// ```
/// use double_pendulum::config::PendulumConfig;
/// use double_pendulum::vec::Vec2;
///
/// let config: PendulumConfig<f64> = PendulumConfig::reference()
///     .with_lengths(1.0, 1.0)
///     .with_masses(1.0, 1.0)
///     .with_dt(0.001)
///     .with_pivot(Vec2::new(0.0, 0.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PendulumConfig<F: Float> {
    /// Length of rod 1 (pivot to bob 1). Default: 200.
    pub l1: F,
    /// Length of rod 2 (bob 1 to bob 2). Default: 150.
    pub l2: F,
    /// Mass of bob 1. Default: 20.
    pub m1: F,
    /// Mass of bob 2. Default: 20.
    pub m2: F,
    /// Gravitational acceleration. Default: 9.81.
    pub g: F,
    /// Integration time step in seconds. Default: 0.02.
    pub dt: F,
    /// Initial angle of rod 1 from the downward vertical. Default: π/2.
    pub theta1: F,
    /// Initial angle of rod 2 from the downward vertical. Default: π/2.
    pub theta2: F,
    /// Initial angular velocity of rod 1. Default: 0.
    pub omega1: F,
    /// Initial angular velocity of rod 2. Default: 0.
    pub omega2: F,
    /// Fixed pivot. Default: (400, 150), a quarter down an 800×600 canvas.
    pub pivot: Vec2<F>,
    /// Vertical convention for positions. Default: [`Frame::YDown`].
    pub frame: Frame,
    /// Integration ordering. Default: [`Scheme::SemiImplicitEuler`].
    pub scheme: Scheme,
    /// Acceleration equations. Default: [`Equations::Reference`].
    pub equations: Equations,
}

impl<F: Float> PendulumConfig<F> {
    /// Reference configuration: 200/150 rods, 20/20 masses, both rods horizontal.
    pub fn reference() -> Self {
        let horizontal = F::pi() * F::half();
        PendulumConfig {
            l1: F::from_f64(200.0),
            l2: F::from_f64(150.0),
            m1: F::from_f64(20.0),
            m2: F::from_f64(20.0),
            g: F::from_f64(9.81),
            dt: F::from_f64(0.02),
            theta1: horizontal,
            theta2: horizontal,
            omega1: F::zero(),
            omega2: F::zero(),
            pivot: Vec2::new(F::from_f64(400.0), F::from_f64(150.0)),
            frame: Frame::YDown,
            scheme: Scheme::SemiImplicitEuler,
            equations: Equations::Reference,
        }
    }

    /// Set both rod lengths.
    pub fn with_lengths(mut self, l1: F, l2: F) -> Self {
        self.l1 = l1;
        self.l2 = l2;
        self
    }

    /// Set both bob masses.
    pub fn with_masses(mut self, m1: F, m2: F) -> Self {
        self.m1 = m1;
        self.m2 = m2;
        self
    }

    /// Set the gravitational acceleration.
    pub fn with_gravity(mut self, g: F) -> Self {
        self.g = g;
        self
    }

    /// Set the integration time step.
    pub fn with_dt(mut self, dt: F) -> Self {
        self.dt = dt;
        self
    }

    /// Set the initial angles.
    pub fn with_angles(mut self, theta1: F, theta2: F) -> Self {
        self.theta1 = theta1;
        self.theta2 = theta2;
        self
    }

    /// Set the initial angular velocities.
    pub fn with_velocities(mut self, omega1: F, omega2: F) -> Self {
        self.omega1 = omega1;
        self.omega2 = omega2;
        self
    }

    /// Set the fixed pivot.
    pub fn with_pivot(mut self, pivot: Vec2<F>) -> Self {
        self.pivot = pivot;
        self
    }

    /// Set the vertical convention of reported positions.
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    /// Set the integration ordering.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the acceleration equations.
    pub fn with_equations(mut self, equations: Equations) -> Self {
        self.equations = equations;
        self
    }

    /// Check every parameter. This is the only validation point; stepping
    /// never re-checks.
    pub fn validate(&self) -> Result<()> {
        positive(self.l1).ok_or(ConfigError::InvalidLength { rod: Link::Inner, value: self.l1.to_f64() })?;
        positive(self.l2).ok_or(ConfigError::InvalidLength { rod: Link::Outer, value: self.l2.to_f64() })?;
        positive(self.m1).ok_or(ConfigError::InvalidMass { bob: Link::Inner, value: self.m1.to_f64() })?;
        positive(self.m2).ok_or(ConfigError::InvalidMass { bob: Link::Outer, value: self.m2.to_f64() })?;
        positive(self.g).ok_or(ConfigError::InvalidGravity(self.g.to_f64()))?;
        positive(self.dt).ok_or(ConfigError::InvalidTimeStep(self.dt.to_f64()))?;

        let initial = [self.theta1, self.theta2, self.omega1, self.omega2];
        if !initial.iter().all(|v| v.is_finite()) || !self.pivot.is_finite() {
            return Err(ConfigError::NonFiniteInitialState);
        }

        // den1 = (m1 + m2) - m2 cos²(Δ) is bounded below by (m1 + m2) - m2.
        let total = self.m1 + self.m2;
        if !total.is_finite() || total - self.m2 <= F::zero() {
            return Err(ConfigError::DegenerateMasses {
                m1: self.m1.to_f64(),
                m2: self.m2.to_f64(),
            });
        }

        Ok(())
    }
}

impl<F: Float> Default for PendulumConfig<F> {
    fn default() -> Self {
        Self::reference()
    }
}

fn positive<F: Float>(value: F) -> Option<F> {
    (value.is_finite() && value > F::zero()).then_some(value)
}
