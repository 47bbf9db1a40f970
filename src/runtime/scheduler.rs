use crate::foundation::core::Fps;

/// Identifier of one scheduled frame callback, captured at schedule time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Host frame-pacing primitive.
///
/// At most one callback is pending per mount. The host later delivers the callback together with
/// the token returned here and its own timestamp.
pub trait FrameScheduler {
    /// Request the next frame callback.
    fn schedule_next(&mut self) -> FrameToken;

    /// Cancel a pending callback. Unknown or already fired tokens are ignored.
    fn cancel(&mut self, token: FrameToken);

    /// Host timestamp in seconds, on the same timeline as delivered frame timestamps.
    fn now(&self) -> f64;
}

/// Deterministic scheduler with a synthetic clock advancing one fixed interval per frame.
#[derive(Clone, Debug)]
pub struct ManualScheduler {
    interval: f64,
    now: f64,
    next_id: u64,
    pending: Option<FrameToken>,
    schedule_calls: u64,
    cancel_calls: u64,
}

impl ManualScheduler {
    pub fn new(fps: Fps) -> Self {
        Self::with_interval(fps.frame_duration_secs())
    }

    pub fn with_interval(interval_secs: f64) -> Self {
        Self {
            interval: interval_secs,
            now: 0.0,
            next_id: 1,
            pending: None,
            schedule_calls: 0,
            cancel_calls: 0,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Number of `schedule_next` calls so far.
    pub fn schedule_calls(&self) -> u64 {
        self.schedule_calls
    }

    pub fn cancel_calls(&self) -> u64 {
        self.cancel_calls
    }

    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Advance the synthetic clock by one interval without firing anything.
    pub fn tick(&mut self) -> f64 {
        self.now += self.interval;
        self.now
    }

    /// Advance one interval and fire the pending callback, if any.
    pub fn next_frame(&mut self) -> Option<(FrameToken, f64)> {
        let ts = self.tick();
        self.pending.take().map(|token| (token, ts))
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_next(&mut self) -> FrameToken {
        let token = FrameToken(self.next_id);
        self.next_id += 1;
        self.schedule_calls += 1;
        self.pending = Some(token);
        token
    }

    fn cancel(&mut self, token: FrameToken) {
        self.cancel_calls += 1;
        if self.pending == Some(token) {
            self.pending = None;
        }
    }

    fn now(&self) -> f64 {
        self.now
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/scheduler.rs"]
mod tests;
