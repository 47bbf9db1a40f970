//! Procedural animated wave-path backdrops.
//!
//! Families of staggered, rippling wave curves are generated from an explicit
//! [`BackgroundConfig`] and drawn by one of two interchangeable renderers:
//!
//! - [`SvgRenderer`]: a declarative SVG document regenerated every frame
//! - [`SurfaceRenderer`]: a persistent CPU pixmap cleared and redrawn every frame
//!
//! A [`BackgroundMount`] drives either renderer from host frame callbacks, and [`FrameLoop`]
//! streams frames into a [`FrameSink`] offline.
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod encode;
pub mod render;
pub mod runtime;
pub mod session;
pub mod wave;

pub use crate::foundation::core::{
    Affine, BezPath, Fps, FrameIndex, Point, Rect, Rgba8, Size, Vec2, Viewport,
};
pub use crate::foundation::error::{WavepathsError, WavepathsResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::motion::{FloatMotion, GradientCycle};
pub use crate::encode::png::{PngSequenceSink, frame_file_name, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::render::backend::{
    BackgroundRenderer, FrameRGBA, RenderSettings, Strategy, create_renderer,
};
pub use crate::render::surface::SurfaceRenderer;
pub use crate::render::svg::{SvgFrameOpts, SvgRenderer, SvgScene};
pub use crate::runtime::clock::AnimationClock;
pub use crate::runtime::mount::{BackgroundMount, FrameOutcome, MountState};
pub use crate::runtime::scheduler::{FrameScheduler, FrameToken, ManualScheduler};
pub use crate::runtime::viewport::{
    FixedViewport, ResizeSubscription, SharedViewport, ViewportAdapter,
};
pub use crate::session::frame_loop::{FrameLoop, FrameLoopStats};
pub use crate::wave::config::{
    BackgroundConfig, GradientSpec, Harmonic, Oscillator, Precision, Preset, ViewBox,
    WaveGeometry,
};
pub use crate::wave::curve::{path_data, smooth_curve};
pub use crate::wave::generate::{WaveGenerator, WaveSample, cover_transform};
pub use crate::wave::layer::{Paint, Ramp, WaveInstance, WaveLayer};
