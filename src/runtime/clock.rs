/// Elapsed animation time in seconds, owned by one mounted background.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    elapsed: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Advance by `dt` seconds. Negative or non-finite deltas leave the clock untouched, so
    /// elapsed time never decreases.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.elapsed
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
