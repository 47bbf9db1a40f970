use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{WavepathsError, WavepathsResult};
use crate::render::backend::BackgroundRenderer;
use crate::runtime::mount::{BackgroundMount, FrameOutcome};
use crate::runtime::scheduler::ManualScheduler;
use crate::runtime::viewport::ViewportAdapter;

/// Statistics of one [`FrameLoop::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameLoopStats {
    /// Frames pushed to the sink, including the one drawn at mount.
    pub frames_pushed: u64,
    /// Elapsed animation seconds of the last pushed frame.
    pub last_elapsed: f64,
    /// The loop ended early because a draw failed or the surface disappeared.
    pub stalled: bool,
}

/// Offline driver: mounts a background on a [`ManualScheduler`] and pushes every drawn frame to a
/// sink, pacing the synthetic clock at `fps`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLoop {
    fps: Fps,
    frames: u64,
}

impl FrameLoop {
    pub fn new(fps: Fps, frames: u64) -> Self {
        Self { fps, frames }
    }

    /// Scheduler whose interval matches this loop's fps.
    pub fn scheduler(&self) -> ManualScheduler {
        ManualScheduler::new(self.fps)
    }

    #[tracing::instrument(level = "debug", skip(mount, sink), fields(fps = self.fps.as_f64()))]
    pub fn run<R, V>(
        &self,
        mount: &mut BackgroundMount<R, ManualScheduler, V>,
        sink: &mut dyn FrameSink,
    ) -> WavepathsResult<FrameLoopStats>
    where
        R: BackgroundRenderer,
        V: ViewportAdapter,
    {
        if !mount.is_running() {
            mount.mount();
        }
        if !mount.is_running() {
            return Err(WavepathsError::surface_unavailable(
                "background did not start; no drawing surface",
            ));
        }

        let mut stats = FrameLoopStats::default();
        if self.frames == 0 {
            mount.unmount();
            return Ok(stats);
        }

        let first = mount.renderer().snapshot()?;
        sink.begin(SinkConfig {
            width: first.width,
            height: first.height,
            fps: self.fps,
        })?;
        sink.push_frame(FrameIndex(0), &first)?;
        stats.frames_pushed = 1;
        stats.last_elapsed = mount.elapsed();

        while stats.frames_pushed < self.frames {
            let Some((token, ts)) = mount.scheduler_mut().next_frame() else {
                stats.stalled = true;
                break;
            };
            match mount.on_frame(token, ts) {
                FrameOutcome::Drawn => {}
                FrameOutcome::Skipped | FrameOutcome::Stalled | FrameOutcome::Ignored => {
                    stats.stalled = true;
                    break;
                }
            }
            let frame = mount.renderer().snapshot()?;
            sink.push_frame(FrameIndex(stats.frames_pushed), &frame)?;
            stats.frames_pushed += 1;
            stats.last_elapsed = mount.elapsed();
        }

        mount.unmount();
        sink.end()?;
        tracing::debug!(
            frames = stats.frames_pushed,
            stalled = stats.stalled,
            "frame loop finished"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/frame_loop.rs"]
mod tests;
