use crate::foundation::core::{Rgba8, Viewport};
use crate::foundation::error::WavepathsResult;
use crate::wave::config::BackgroundConfig;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the flag makes this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data, suitable for image encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Count of pixels with non-zero alpha.
    pub fn covered_pixels(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}

/// Shared contract of the two interchangeable drawing strategies.
///
/// Call order is `configure` (again on every resize), then `draw` once per frame. `configure`
/// fully replaces any cached dimensions; it never patches them.
pub trait BackgroundRenderer {
    /// (Re)build the drawing surface for `viewport`.
    ///
    /// Fails with [`crate::WavepathsError::SurfaceUnavailable`] when no surface can exist for it.
    fn configure(&mut self, viewport: Viewport) -> WavepathsResult<()>;

    /// Clear and redraw every wave at `elapsed` seconds.
    fn draw(&mut self, elapsed: f64) -> WavepathsResult<()>;

    /// Copy of the last drawn frame.
    fn snapshot(&self) -> WavepathsResult<FrameRGBA>;

    /// Viewport of the current surface, if configured.
    fn viewport(&self) -> Option<Viewport>;

    /// Drop the surface. Called on teardown.
    fn release(&mut self);
}

impl<R: BackgroundRenderer + ?Sized> BackgroundRenderer for Box<R> {
    fn configure(&mut self, viewport: Viewport) -> WavepathsResult<()> {
        (**self).configure(viewport)
    }

    fn draw(&mut self, elapsed: f64) -> WavepathsResult<()> {
        (**self).draw(elapsed)
    }

    fn snapshot(&self) -> WavepathsResult<FrameRGBA> {
        (**self).snapshot()
    }

    fn viewport(&self) -> Option<Viewport> {
        (**self).viewport()
    }

    fn release(&mut self) {
        (**self).release()
    }
}

/// Available drawing strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Per-frame SVG document rasterized with `resvg`.
    Svg,
    /// Persistent `vello_cpu` pixmap redrawn with imperative stroke calls.
    Surface,
}

/// Backend-agnostic settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Color the surface is cleared to before every frame.
    pub clear: Rgba8,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear: Rgba8::transparent(),
        }
    }
}

/// Create a renderer for `strategy`.
pub fn create_renderer(
    strategy: Strategy,
    config: &BackgroundConfig,
    settings: RenderSettings,
) -> WavepathsResult<Box<dyn BackgroundRenderer>> {
    config.validate()?;
    match strategy {
        Strategy::Svg => Ok(Box::new(crate::render::svg::SvgRenderer::new(
            config.clone(),
            settings,
        ))),
        Strategy::Surface => Ok(Box::new(crate::render::surface::SurfaceRenderer::new(
            config.clone(),
            settings,
        ))),
    }
}
