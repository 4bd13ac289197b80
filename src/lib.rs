//! Deterministic double-pendulum simulation.
//!
//! `double_pendulum` advances two rigid, massless rods with point masses at
//! their ends, hung in series from a fixed pivot, by fixed time steps. It owns
//! the physics only; drawing, input and frame pacing belong to the host, which
//! reads pivot and bob coordinates after each step.
//!
//! # Features
//!
//! - **Semi-implicit Euler**: velocities first, then angles from the new velocities
//! - **Validated configuration**: bad masses, lengths or time steps are rejected up front
//! - **Energy monitoring**: kinetic/potential energy and normalised drift tracking
//! - **Presenter boundary**: fixed-step driver handing immutable snapshots to a renderer
//! - **Observable**: Monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use double_pendulum::{DoublePendulum, PendulumConfig};
//!
//! let mut pendulum = DoublePendulum::<f64>::new(PendulumConfig::reference()).unwrap();
//! pendulum.step();
//! let p = pendulum.positions();
//! assert_eq!(p.pivot.x, 400.0);
//! ```

#![no_std]

pub mod float;
pub mod vec;
pub mod config;
pub mod state;
pub mod pendulum;
pub mod energy;
pub mod presenter;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use config::{PendulumConfig, Frame, Scheme, Equations};
pub use state::PendulumState;
pub use pendulum::{DoublePendulum, Positions, accelerations};
pub use energy::{EnergyMonitor, kinetic_energy, potential_energy, total_energy, energy_scale};
pub use presenter::{Presenter, Simulation};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::{ConfigError, Link};
