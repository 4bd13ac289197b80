//! The double-pendulum integrator.

use crate::config::{Equations, Frame, PendulumConfig, Scheme};
use crate::energy;
use crate::error::Result;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::state::PendulumState;
use crate::vec::Vec2;

/// Pivot and bob coordinates at one instant.
///
/// An immutable snapshot: presenters receive it by reference and may copy it
/// across threads without touching the integrator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Positions<F: Float> {
    pub pivot: Vec2<F>,
    pub bob1: Vec2<F>,
    pub bob2: Vec2<F>,
}

impl<F: Float> Positions<F> {
    /// The two rod segments: pivot to bob 1, bob 1 to bob 2.
    pub fn rods(&self) -> [(Vec2<F>, Vec2<F>); 2] {
        [(self.pivot, self.bob1), (self.bob1, self.bob2)]
    }

    /// The points as `[pivot, bob1, bob2]`.
    pub fn to_array(&self) -> [Vec2<F>; 3] {
        [self.pivot, self.bob1, self.bob2]
    }
}

/// A double pendulum advanced by fixed time steps.
///
/// Owns its state exclusively. There is one state, "ready": [`step`](Self::step)
/// may be called any number of times. Not internally synchronised; a host that
/// steps on one thread and draws on another should hand over [`Positions`]
/// snapshots.
#[derive(Clone, Debug)]
pub struct DoublePendulum<F: Float> {
    config: PendulumConfig<F>,
    state: PendulumState<F>,
    steps: u64,
}

impl<F: Float> DoublePendulum<F> {
    /// Validate `config` and place the pendulum at its initial conditions.
    pub fn new(config: PendulumConfig<F>) -> Result<Self> {
        if let Err(err) = config.validate() {
            #[cfg(feature = "tracing")]
            tracing::error!(%err, "rejected pendulum configuration");
            return Err(err);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            l1 = config.l1.to_f64(),
            l2 = config.l2.to_f64(),
            m1 = config.m1.to_f64(),
            m2 = config.m2.to_f64(),
            g = config.g.to_f64(),
            dt = config.dt.to_f64(),
            scheme = ?config.scheme,
            equations = ?config.equations,
            "double pendulum ready"
        );

        Ok(DoublePendulum {
            state: PendulumState::from_config(&config),
            config,
            steps: 0,
        })
    }

    /// Pendulum with the reference configuration.
    pub fn reference() -> Self {
        let config = PendulumConfig::reference();
        DoublePendulum {
            state: PendulumState::from_config(&config),
            config,
            steps: 0,
        }
    }

    /// Configuration the pendulum was built with.
    pub fn config(&self) -> &PendulumConfig<F> {
        &self.config
    }

    /// Current angles and angular velocities.
    pub fn state(&self) -> &PendulumState<F> {
        &self.state
    }

    /// Number of steps taken since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time since construction.
    pub fn elapsed(&self) -> F {
        F::from_f64(self.steps as f64) * self.config.dt
    }

    /// Angular accelerations `(a1, a2)` of the current state.
    pub fn accelerations(&self) -> (F, F) {
        accelerations(&self.config, &self.state)
    }

    /// Advance by one time step.
    pub fn step(&mut self) {
        self.step_observed(&mut NoOpStepObserver);
    }

    /// Advance by `n` time steps.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Advance by one time step, reporting to `observer`.
    pub fn step_observed<O: StepObserver<F>>(&mut self, observer: &mut O) {
        let dt = self.config.dt;
        let (a1, a2) = self.accelerations();
        observer.on_accelerations(a1, a2);

        let s = &mut self.state;
        match self.config.scheme {
            Scheme::SemiImplicitEuler => {
                s.omega1 = s.omega1 + a1 * dt;
                s.omega2 = s.omega2 + a2 * dt;
                s.theta1 = s.theta1 + s.omega1 * dt;
                s.theta2 = s.theta2 + s.omega2 * dt;
            }
            Scheme::ExplicitEuler => {
                s.theta1 = s.theta1 + s.omega1 * dt;
                s.theta2 = s.theta2 + s.omega2 * dt;
                s.omega1 = s.omega1 + a1 * dt;
                s.omega2 = s.omega2 + a2 * dt;
            }
        }
        self.steps += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            step = self.steps,
            theta1 = self.state.theta1.to_f64(),
            theta2 = self.state.theta2.to_f64(),
            "step"
        );

        observer.on_step_complete(self.steps, &self.state);
    }

    /// Pivot and bob coordinates in the configured [`Frame`]. Reads angles only.
    pub fn positions(&self) -> Positions<F> {
        let PendulumConfig { l1, l2, pivot, frame, .. } = self.config;
        let down = match frame {
            Frame::YDown => F::one(),
            Frame::YUp => -F::one(),
        };
        let (theta1, theta2) = (self.state.theta1, self.state.theta2);
        let bob1 = pivot + Vec2::new(l1 * theta1.sin(), down * l1 * theta1.cos());
        let bob2 = bob1 + Vec2::new(l2 * theta2.sin(), down * l2 * theta2.cos());
        Positions { pivot, bob1, bob2 }
    }

    /// Kinetic energy of both bobs.
    pub fn kinetic_energy(&self) -> F {
        energy::kinetic_energy(&self.config, &self.state)
    }

    /// Gravitational potential energy relative to the pivot.
    pub fn potential_energy(&self) -> F {
        energy::potential_energy(&self.config, &self.state)
    }

    /// Kinetic plus potential energy, heights measured upward from the pivot.
    pub fn total_energy(&self) -> F {
        energy::total_energy(&self.config, &self.state)
    }
}

impl<F: Float> Default for DoublePendulum<F> {
    fn default() -> Self {
        Self::reference()
    }
}

/// Angular accelerations for `state` under `config`.
///
/// With `Δ = θ2 − θ1` and `den = (m1+m2) − m2·cos²Δ`:
///
/// ```text
/// a1 = [m2·g·sinθ2·cosΔ − m2·s·(l1·ω1²·cosΔ + l2·ω2²) − (m1+m2)·g·sinθ1] / (l1·den)
/// a2 = [(m1+m2)·(l1·ω1²·s − g·sinθ2 + g·sinθ1·cosΔ) + m2·l2·ω2²·s·cosΔ] / (l2·den)
/// ```
///
/// where `s = sinΔ` for [`Equations::Reference`] and `s = −sinΔ` for
/// [`Equations::Lagrangian`]. Both use the pre-step velocities.
pub fn accelerations<F: Float>(config: &PendulumConfig<F>, state: &PendulumState<F>) -> (F, F) {
    let PendulumConfig { l1, l2, m1, m2, g, .. } = *config;
    let PendulumState { theta1, theta2, omega1, omega2 } = *state;

    let delta = state.delta();
    let (sin_d, cos_d) = (delta.sin(), delta.cos());
    let s = match config.equations {
        Equations::Reference => sin_d,
        Equations::Lagrangian => -sin_d,
    };
    let total = m1 + m2;
    // Never below m1 > 0 for a validated config.
    let den = total - m2 * cos_d * cos_d;
    let w1_sq = omega1 * omega1;
    let w2_sq = omega2 * omega2;

    let a1 = (m2 * g * theta2.sin() * cos_d
        - m2 * s * (l1 * w1_sq * cos_d + l2 * w2_sq)
        - total * g * theta1.sin())
        / (l1 * den);
    let a2 = (total * (l1 * w1_sq * s - g * theta2.sin() + g * theta1.sin() * cos_d)
        + m2 * l2 * w2_sq * s * cos_d)
        / (l2 * den);
    (a1, a2)
}
