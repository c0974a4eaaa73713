/// Fixed timestep accumulator.
/// Ensures game logic runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Total stepped time in milliseconds since start. Only advances by
    /// whole steps, so the session clock and the step count stay in lockstep.
    elapsed_ms: f64,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            elapsed_ms: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        let cap = self.dt * 10.0;
        if self.accumulator > cap {
            log::warn!(
                "frame delta {:.1} ms overflows the step budget, dropping the excess",
                frame_dt * 1000.0
            );
            self.accumulator = cap;
        }
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.elapsed_ms += steps as f64 * self.dt as f64 * 1000.0;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// The fixed delta time in milliseconds.
    pub fn dt_ms(&self) -> f64 {
        self.dt as f64 * 1000.0
    }

    /// Total stepped time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}
