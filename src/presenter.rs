//! Boundary between the integrator and whatever draws it.
//!
//! The driver here steps with a fixed `dt` a fixed number of times per frame
//! and never looks at the wall clock. A host that wants real-time playback
//! paces calls to [`Simulation::frame`] itself; when its frame period differs
//! from `dt × steps_per_frame` the animation simply runs faster or slower than
//! real time.

use crate::config::PendulumConfig;
use crate::error::Result;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::pendulum::{DoublePendulum, Positions};

/// Consumer of pendulum snapshots, typically a renderer.
pub trait Presenter<F: Float> {
    /// Called once per frame with the positions after that frame's steps.
    fn present(&mut self, positions: &Positions<F>);
}

impl<F: Float, T: FnMut(&Positions<F>)> Presenter<F> for T {
    fn present(&mut self, positions: &Positions<F>) {
        self(positions)
    }
}

/// Fixed-step driver: `steps_per_frame` integrator steps, then one snapshot.
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    pendulum: DoublePendulum<F>,
    steps_per_frame: usize,
    frames: u64,
}

impl<F: Float> Simulation<F> {
    /// One integrator step per frame.
    pub fn new(config: PendulumConfig<F>) -> Result<Self> {
        Ok(Self::from_pendulum(DoublePendulum::new(config)?))
    }

    /// Drive an already-built pendulum, one step per frame.
    pub fn from_pendulum(pendulum: DoublePendulum<F>) -> Self {
        Simulation {
            pendulum,
            steps_per_frame: 1,
            frames: 0,
        }
    }

    /// Set how many integrator steps make up one frame. Clamped to at least 1.
    pub fn with_steps_per_frame(mut self, steps: usize) -> Self {
        self.steps_per_frame = steps.max(1);
        self
    }

    /// Integrator steps taken per frame.
    pub fn steps_per_frame(&self) -> usize {
        self.steps_per_frame
    }

    /// Frames produced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The pendulum being driven.
    pub fn pendulum(&self) -> &DoublePendulum<F> {
        &self.pendulum
    }

    /// Give the pendulum back, ending the session.
    pub fn into_pendulum(self) -> DoublePendulum<F> {
        self.pendulum
    }

    /// Snapshot of the current positions without stepping.
    pub fn positions(&self) -> Positions<F> {
        self.pendulum.positions()
    }

    /// Advance one frame and hand the result to `presenter`.
    pub fn frame<P: Presenter<F>>(&mut self, presenter: &mut P) -> Positions<F> {
        for _ in 0..self.steps_per_frame {
            self.pendulum.step();
        }
        self.finish_frame(presenter)
    }

    /// Advance one frame, reporting every step to `observer`.
    pub fn frame_observed<P, O>(&mut self, presenter: &mut P, observer: &mut O) -> Positions<F>
    where
        P: Presenter<F>,
        O: StepObserver<F>,
    {
        for _ in 0..self.steps_per_frame {
            self.pendulum.step_observed(observer);
        }
        self.finish_frame(presenter)
    }

    /// Run `frames` frames back to back.
    pub fn run<P: Presenter<F>>(&mut self, frames: usize, presenter: &mut P) {
        for _ in 0..frames {
            self.frame(presenter);
        }
    }

    fn finish_frame<P: Presenter<F>>(&mut self, presenter: &mut P) -> Positions<F> {
        let positions = self.pendulum.positions();
        presenter.present(&positions);
        self.frames += 1;
        positions
    }
}
