use crate::foundation::core::Viewport;
use crate::render::backend::BackgroundRenderer;
use crate::runtime::clock::AnimationClock;
use crate::runtime::scheduler::{FrameScheduler, FrameToken};
use crate::runtime::viewport::{ResizeSubscription, ViewportAdapter};

/// Lifecycle of a mounted background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountState {
    /// Nothing drawn or scheduled.
    Unmounted,
    /// Drawing every delivered frame and keeping one frame scheduled.
    Running,
    /// A draw failed. The last frame stays on the surface and nothing more is scheduled.
    Stalled,
}

/// Outcome of one delivered frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was drawn and the next one scheduled.
    Drawn,
    /// No drawable surface (e.g. a zero-area container). Nothing was drawn but the next frame
    /// is still scheduled, so drawing resumes once the container has area again.
    Skipped,
    /// Stale token or not running; no work was done.
    Ignored,
    /// A draw or reconfigure failed; the animation stopped on its last frame.
    Stalled,
}

/// Drives one renderer from host frame callbacks.
///
/// `Unmounted -> Running(clock = 0) -> Unmounted`. The mount owns its clock and renderer; nothing
/// is shared between instances.
pub struct BackgroundMount<R, S, V> {
    renderer: R,
    scheduler: S,
    viewport: V,
    clock: AnimationClock,
    state: MountState,
    pending: Option<FrameToken>,
    subscription: Option<ResizeSubscription>,
    last_timestamp: f64,
    frames_drawn: u64,
}

impl<R, S, V> BackgroundMount<R, S, V>
where
    R: BackgroundRenderer,
    S: FrameScheduler,
    V: ViewportAdapter,
{
    /// Wrap a renderer with its scheduler and viewport capabilities. Nothing runs until `mount`.
    pub fn new(renderer: R, scheduler: S, viewport: V) -> Self {
        Self {
            renderer,
            scheduler,
            viewport,
            clock: AnimationClock::new(),
            state: MountState::Unmounted,
            pending: None,
            subscription: None,
            last_timestamp: 0.0,
            frames_drawn: 0,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> MountState {
        self.state
    }

    /// Whether frames are being drawn and scheduled.
    pub fn is_running(&self) -> bool {
        self.state == MountState::Running
    }

    /// Animation seconds since the last `mount`.
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Frames drawn since the last `mount`, including the first one.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Token of the scheduled frame callback, if one is pending.
    pub fn pending_token(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Borrow the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Borrow the frame scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutably borrow the frame scheduler (hosts and tests fire callbacks through it).
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Borrow the viewport capability.
    pub fn viewport_adapter(&self) -> &V {
        &self.viewport
    }

    /// Start (or restart) the animation at elapsed zero.
    ///
    /// When no surface can be configured for the current viewport the mount stays `Unmounted`
    /// and nothing is scheduled.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn mount(&mut self) -> MountState {
        if self.state != MountState::Unmounted {
            self.unmount();
        }
        self.clock.reset();
        self.frames_drawn = 0;

        let viewport = self.viewport.current();
        if let Err(e) = self.renderer.configure(viewport) {
            if e.is_silent() {
                tracing::debug!(error = %e, "no drawing surface; background stays unmounted");
            } else {
                tracing::warn!(error = %e, "background configure failed");
            }
            return self.state;
        }

        self.subscription = Some(self.viewport.subscribe());
        self.last_timestamp = self.scheduler.now();
        self.state = MountState::Running;

        if self.draw_current() != FrameOutcome::Stalled {
            self.pending = Some(self.scheduler.schedule_next());
        }
        self.state
    }

    /// Host frame callback.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_frame(&mut self, token: FrameToken, timestamp: f64) -> FrameOutcome {
        if self.state != MountState::Running || self.pending != Some(token) {
            return FrameOutcome::Ignored;
        }
        self.pending = None;

        // A resize to zero area leaves no surface; the next drawable resize brings it back.
        if let Some(viewport) = self.poll_resize()
            && let Err(e) = self.renderer.configure(viewport)
        {
            if !e.is_silent() {
                tracing::warn!(error = %e, "reconfigure after resize failed");
                self.stall();
                return FrameOutcome::Stalled;
            }
            tracing::debug!(error = %e, "no drawing surface after resize");
        }

        self.clock.advance(timestamp - self.last_timestamp);
        self.last_timestamp = timestamp;

        let outcome = self.draw_current();
        if outcome != FrameOutcome::Stalled {
            self.pending = Some(self.scheduler.schedule_next());
        }
        outcome
    }

    /// Cancel the pending frame and stop listening for resizes. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
        if let Some(sub) = self.subscription.take() {
            self.viewport.unsubscribe(sub);
        }
        if self.state != MountState::Unmounted {
            tracing::debug!(frames = self.frames_drawn, "background unmounted");
        }
        self.state = MountState::Unmounted;
    }

    /// Unmount and release the renderer's surface.
    pub fn into_renderer(mut self) -> R {
        self.unmount();
        self.renderer.release();
        self.renderer
    }

    fn poll_resize(&mut self) -> Option<Viewport> {
        let sub = self.subscription?;
        self.viewport.take_resize(sub)
    }

    fn draw_current(&mut self) -> FrameOutcome {
        match self.renderer.draw(self.clock.elapsed()) {
            Ok(()) => {
                self.frames_drawn += 1;
                FrameOutcome::Drawn
            }
            Err(e) if e.is_silent() => {
                tracing::trace!(error = %e, "frame skipped");
                FrameOutcome::Skipped
            }
            Err(e) => {
                tracing::debug!(error = %e, "draw failed; animation stops on the last frame");
                self.stall();
                FrameOutcome::Stalled
            }
        }
    }

    fn stall(&mut self) {
        self.state = MountState::Stalled;
        self.pending = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/mount.rs"]
mod tests;
