use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Point, Rgba8, Vec2, Viewport};
use crate::foundation::error::{WavepathsError, WavepathsResult};
use crate::render::backend::{BackgroundRenderer, FrameRGBA, RenderSettings};
use crate::wave::config::BackgroundConfig;
use crate::wave::curve::smooth_curve;
use crate::wave::generate::{WaveGenerator, cover_transform};
use crate::wave::layer::{Paint, WaveLayer};

/// Persistent pixel surface plus the dimensions it was built for.
struct CpuSurface {
    width: u16,
    height: u16,
    viewport: Viewport,
    pixmap: vello_cpu::Pixmap,
}

/// Imperative strategy: a persistent `vello_cpu` pixmap, cleared and fully redrawn every frame.
pub struct SurfaceRenderer {
    config: BackgroundConfig,
    generator: WaveGenerator,
    settings: RenderSettings,
    surface: Option<CpuSurface>,
}

impl SurfaceRenderer {
    pub fn new(config: BackgroundConfig, settings: RenderSettings) -> Self {
        let generator = WaveGenerator::new(&config);
        Self {
            config,
            generator,
            settings,
            surface: None,
        }
    }

    /// Device-pixel size of the current surface.
    pub fn pixel_size(&self) -> Option<(u16, u16)> {
        self.surface.as_ref().map(|s| (s.width, s.height))
    }

    /// Points of one instance in CSS pixels of the current surface.
    pub fn instance_points(&self, layer: &WaveLayer, index: u32, elapsed: f64) -> Vec<Point> {
        let Some(surface) = &self.surface else {
            return Vec::new();
        };
        let vp = surface.viewport;
        self.generator
            .generate(layer, index, elapsed, vp.width, vp.height)
    }

    /// Group float offset of `layer` at `elapsed`, in CSS pixels of the current surface.
    pub fn float_offset(&self, layer: &WaveLayer, elapsed: f64) -> Vec2 {
        let (Some(surface), Some(float)) = (&self.surface, &layer.float) else {
            return Vec2::ZERO;
        };
        let xf = cover_transform(self.config.geometry.view_box, surface.viewport.size());
        let dy = float.offset_at(elapsed);
        xf * Point::new(0.0, dy) - xf * Point::ORIGIN
    }

    fn stroke_instance(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        layer: &WaveLayer,
        index: u32,
        elapsed: f64,
    ) {
        let points = self.instance_points(layer, index, elapsed);
        if points.len() < 2 {
            return;
        }
        let path = smooth_curve(&points, self.config.geometry.tension);
        let opacity = layer.instance_opacity(index) * layer.group_opacity;

        match layer.paint {
            Paint::Solid { color } => {
                ctx.set_paint(color_to_cpu(color.with_opacity(opacity)));
            }
            Paint::Gradient => {
                let stops: Vec<(f32, vello_cpu::peniko::Color)> = gradient_stops(
                    &self.config.gradient.stops_at(elapsed),
                    opacity,
                );
                // Horizontal gradient across the path's own bounds.
                let bounds = path.bounding_box();
                let y = bounds.center().y;
                let gradient = vello_cpu::peniko::Gradient::new_linear(
                    vello_cpu::kurbo::Point::new(bounds.x0, y),
                    vello_cpu::kurbo::Point::new(bounds.x1, y),
                )
                .with_stops(stops.as_slice());
                ctx.set_paint(gradient);
            }
        }

        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(layer.instance_width(index))
                .with_caps(vello_cpu::kurbo::Cap::Round),
        );
        ctx.stroke_path(&bezpath_to_cpu(&path));
    }
}

impl BackgroundRenderer for SurfaceRenderer {
    fn configure(&mut self, viewport: Viewport) -> WavepathsResult<()> {
        self.surface = None;

        let (w, h) = viewport.pixel_size();
        if w == 0 || h == 0 {
            return Err(WavepathsError::surface_unavailable(format!(
                "viewport {}x{} has no drawable area",
                viewport.width, viewport.height
            )));
        }
        let width: u16 = w.try_into().map_err(|_| {
            WavepathsError::surface_unavailable(format!("surface width {w} exceeds u16"))
        })?;
        let height: u16 = h.try_into().map_err(|_| {
            WavepathsError::surface_unavailable(format!("surface height {h} exceeds u16"))
        })?;

        tracing::debug!(
            width,
            height,
            dpr = viewport.dpr(),
            "configured cpu surface"
        );
        self.surface = Some(CpuSurface {
            width,
            height,
            viewport,
            pixmap: vello_cpu::Pixmap::new(width, height),
        });
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn draw(&mut self, elapsed: f64) -> WavepathsResult<()> {
        // Dimensions are read once, before any drawing.
        let Some(surface) = self.surface.as_ref() else {
            return Err(WavepathsError::surface_unavailable(
                "cpu surface is not configured",
            ));
        };
        let (width, height) = (surface.width, surface.height);
        let dpr = surface.viewport.dpr();

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        let clear = self.settings.clear;
        if clear.a > 0 {
            ctx.set_paint(color_to_cpu(clear));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }
        for inst in self.config.instances() {
            let layer = &self.config.layers[inst.layer];
            let lift = Affine::translate(self.float_offset(layer, elapsed));
            ctx.set_transform(affine_to_cpu(Affine::scale(dpr) * lift));
            self.stroke_instance(&mut ctx, layer, inst.index, elapsed);
        }
        ctx.flush();

        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| WavepathsError::surface_unavailable("cpu surface vanished"))?;
        clear_pixmap(&mut surface.pixmap, [0, 0, 0, 0]);
        ctx.render_to_pixmap(&mut surface.pixmap);
        Ok(())
    }

    fn snapshot(&self) -> WavepathsResult<FrameRGBA> {
        let surface = self
            .surface
            .as_ref()
            .ok_or_else(|| WavepathsError::surface_unavailable("cpu surface is not configured"))?;
        Ok(FrameRGBA {
            width: u32::from(surface.width),
            height: u32::from(surface.height),
            data: surface.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn viewport(&self) -> Option<Viewport> {
        self.surface.as_ref().map(|s| s.viewport)
    }

    fn release(&mut self) {
        self.surface = None;
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn gradient_stops(palette: &[Rgba8], opacity: f64) -> Vec<(f32, vello_cpu::peniko::Color)> {
    let last = palette.len().saturating_sub(1).max(1) as f32;
    palette
        .iter()
        .enumerate()
        .map(|(k, c)| (k as f32 / last, color_to_cpu(c.with_opacity(opacity))))
        .collect()
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
