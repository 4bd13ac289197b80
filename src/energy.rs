//! Mechanical energy and drift monitoring.
//!
//! Heights are measured upward from the pivot regardless of the presentation
//! [`Frame`](crate::config::Frame), so the two rods held horizontal and at rest
//! have zero total energy.

use crate::config::PendulumConfig;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::state::PendulumState;

/// Kinetic energy of both bobs.
///
/// `½(m1+m2)·l1²·ω1² + ½·m2·l2²·ω2² + m2·l1·l2·ω1·ω2·cos(θ1−θ2)`
pub fn kinetic_energy<F: Float>(config: &PendulumConfig<F>, state: &PendulumState<F>) -> F {
    let PendulumConfig { l1, l2, m1, m2, .. } = *config;
    let inner = F::half() * (m1 + m2) * (l1 * state.omega1).squared();
    let outer = F::half() * m2 * (l2 * state.omega2).squared();
    let coupling = m2 * l1 * l2 * state.omega1 * state.omega2 * (state.theta1 - state.theta2).cos();
    inner + outer + coupling
}

/// Gravitational potential energy relative to the pivot.
///
/// `−(m1+m2)·g·l1·cos θ1 − m2·g·l2·cos θ2`
pub fn potential_energy<F: Float>(config: &PendulumConfig<F>, state: &PendulumState<F>) -> F {
    let PendulumConfig { l1, l2, m1, m2, g, .. } = *config;
    -((m1 + m2) * g * l1 * state.theta1.cos()) - m2 * g * l2 * state.theta2.cos()
}

/// Total mechanical energy (kinetic + potential).
pub fn total_energy<F: Float>(config: &PendulumConfig<F>, state: &PendulumState<F>) -> F {
    kinetic_energy(config, state) + potential_energy(config, state)
}

/// Potential energy swing between hanging straight down and standing straight
/// up, halved: `(m1+m2)·g·l1 + m2·g·l2`.
///
/// Used to normalise drift when the baseline energy is near zero (for example
/// both rods starting horizontal).
pub fn energy_scale<F: Float>(config: &PendulumConfig<F>) -> F {
    (config.m1 + config.m2) * config.g * config.l1 + config.m2 * config.g * config.l2
}

/// Tracks how far total energy wanders from its starting value.
///
/// Drift is `|E − E₀| / max(|E₀|, scale)` with `scale` from [`energy_scale`].
#[derive(Clone, Debug)]
pub struct EnergyMonitor<F: Float> {
    config: PendulumConfig<F>,
    baseline: F,
    normaliser: F,
    max_drift: F,
    samples: u64,
}

impl<F: Float> EnergyMonitor<F> {
    /// Record the baseline from the given state.
    pub fn new(config: &PendulumConfig<F>, state: &PendulumState<F>) -> Self {
        let baseline = total_energy(config, state);
        let scale = energy_scale(config);
        let normaliser = if baseline.abs() > scale { baseline.abs() } else { scale };
        EnergyMonitor {
            config: *config,
            baseline,
            normaliser,
            max_drift: F::zero(),
            samples: 0,
        }
    }

    /// Energy at construction.
    pub fn baseline(&self) -> F {
        self.baseline
    }

    /// Normalised drift of `state` from the baseline. Does not update the
    /// running maximum.
    pub fn drift(&self, state: &PendulumState<F>) -> F {
        (total_energy(&self.config, state) - self.baseline).abs() / self.normaliser
    }

    /// Measure `state`, fold it into the running maximum and return its drift.
    pub fn record(&mut self, state: &PendulumState<F>) -> F {
        let drift = self.drift(state);
        if drift > self.max_drift {
            self.max_drift = drift;
        }
        self.samples += 1;
        drift
    }

    /// Worst drift seen by [`record`](Self::record).
    pub fn max_drift(&self) -> F {
        self.max_drift
    }

    /// Number of states recorded.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// True if the worst drift so far is within `tolerance`.
    pub fn is_within(&self, tolerance: F) -> bool {
        self.max_drift <= tolerance
    }
}

impl<F: Float> StepObserver<F> for EnergyMonitor<F> {
    fn on_step_complete(&mut self, _step: u64, state: &PendulumState<F>) {
        self.record(state);
    }
}
