use double_pendulum::{
    DoublePendulum, EnergyMonitor, Frame, PendulumConfig, Positions, Simulation, Vec2,
};
use wasm_bindgen::prelude::*;

// ---- Double Pendulum Demo ----

#[wasm_bindgen]
pub struct PendulumDemo {
    sim: Simulation<f64>,
    monitor: EnergyMonitor<f64>,
    last: Positions<f64>,
}

#[wasm_bindgen]
impl PendulumDemo {
    /// Reference pendulum on an 800x600 canvas: pivot at (400, 150), y down.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_pendulum(DoublePendulum::reference())
    }

    /// Custom rods, masses and start angles. Fails with the validation message.
    #[allow(clippy::too_many_arguments)]
    pub fn with_params(
        l1: f64,
        l2: f64,
        m1: f64,
        m2: f64,
        g: f64,
        dt: f64,
        theta1: f64,
        theta2: f64,
        pivot_x: f64,
        pivot_y: f64,
    ) -> Result<PendulumDemo, JsValue> {
        let config = PendulumConfig::reference()
            .with_lengths(l1, l2)
            .with_masses(m1, m2)
            .with_gravity(g)
            .with_dt(dt)
            .with_angles(theta1, theta2)
            .with_pivot(Vec2::new(pivot_x, pivot_y))
            .with_frame(Frame::YDown);
        let pendulum = DoublePendulum::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_pendulum(pendulum))
    }

    /// Advance `frames` frames of one step each. Called once per animation frame.
    pub fn update(&mut self, frames: usize) {
        // Drawing happens in JS from `positions()`, so the per-frame presenter is empty.
        for _ in 0..frames {
            self.last = self.sim.frame_observed(&mut |_: &Positions<f64>| {}, &mut self.monitor);
        }
    }

    /// Returns [x0, y0, x1, y1, x2, y2] -- pivot, bob 1, bob 2
    pub fn positions(&self) -> Vec<f64> {
        let [p0, p1, p2] = self.last.to_array();
        vec![p0.x, p0.y, p1.x, p1.y, p2.x, p2.y]
    }

    /// Returns [theta1, theta2, omega1, omega2]
    pub fn state(&self) -> Vec<f64> {
        let s = self.sim.pendulum().state();
        vec![s.theta1, s.theta2, s.omega1, s.omega2]
    }

    pub fn energy(&self) -> f64 {
        self.sim.pendulum().total_energy()
    }

    pub fn max_energy_drift(&self) -> f64 {
        self.monitor.max_drift()
    }

    pub fn elapsed(&self) -> f64 {
        self.sim.pendulum().elapsed()
    }
}

impl PendulumDemo {
    fn from_pendulum(pendulum: DoublePendulum<f64>) -> Self {
        let monitor = EnergyMonitor::new(pendulum.config(), pendulum.state());
        let last = pendulum.positions();
        PendulumDemo {
            sim: Simulation::from_pendulum(pendulum),
            monitor,
            last,
        }
    }
}

impl Default for PendulumDemo {
    fn default() -> Self {
        Self::new()
    }
}
