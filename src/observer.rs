//! Step observer trait for monitoring integrator progress.

use crate::float::Float;
use crate::state::PendulumState;

/// Trait for observing integrator steps.
///
/// Implement this trait to monitor a run (energy tracking, debugging,
/// recording). All methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called with the angular accelerations evaluated from the pre-step state.
    fn on_accelerations(&mut self, _a1: F, _a2: F) {}

    /// Called when a step is complete. `step` counts from 1.
    fn on_step_complete(&mut self, _step: u64, _state: &PendulumState<F>) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
