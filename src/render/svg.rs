use std::fmt::Write as _;

use crate::foundation::core::{Rgba8, Size, Viewport};
use crate::foundation::error::{WavepathsError, WavepathsResult};
use crate::foundation::math::{fmt_num, round_to};
use crate::render::backend::{BackgroundRenderer, FrameRGBA, RenderSettings};
use crate::wave::config::BackgroundConfig;
use crate::wave::curve::path_data;
use crate::wave::generate::WaveGenerator;
use crate::wave::layer::{Paint, WaveLayer};

const TITLE: &str = "Background Paths";

/// How a document is emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SvgFrameOpts {
    /// Explicit pixel size. `None` emits a fluid `100%` document for embedding.
    pub size: Option<Size>,
    /// Bake each group's float offset into a `transform` instead of leaving it to CSS.
    pub bake_float: bool,
}

/// Declarative rendering of the backdrop: one `<path>` per wave instance, one `<g>` per layer.
#[derive(Clone, Debug)]
pub struct SvgScene {
    config: BackgroundConfig,
    generator: WaveGenerator,
    position: f64,
}

impl SvgScene {
    pub fn new(config: BackgroundConfig) -> Self {
        let generator = WaveGenerator::new(&config);
        Self {
            config,
            generator,
            position: 1.0,
        }
    }

    /// Horizontal scale applied to every path; the page shell always uses `1.0`.
    pub fn with_position(self, position: f64) -> Self {
        Self { position, ..self }
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    /// Path data of one instance at `elapsed` seconds.
    pub fn path_data(&self, layer: &WaveLayer, index: u32, elapsed: f64) -> String {
        let points = self
            .generator
            .generate_design(layer, index, elapsed, self.position);
        path_data(
            &points,
            self.config.geometry.tension,
            self.generator.precision(),
        )
    }

    /// Complete SVG document for the frame at `elapsed` seconds.
    pub fn document(&self, elapsed: f64, opts: SvgFrameOpts) -> String {
        let mut out = String::with_capacity(256 * self.config.instance_count().max(1));
        let (w, h) = match opts.size {
            Some(s) => (fmt_num(s.width), fmt_num(s.height)),
            None => ("100%".to_string(), "100%".to_string()),
        };

        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{}" fill="none" preserveAspectRatio="xMidYMid slice">"#,
            self.config.geometry.view_box.attr()
        );
        let _ = write!(out, "<title>{TITLE}</title>");
        self.write_gradient(&mut out, elapsed);

        for layer in &self.config.layers {
            self.write_layer(&mut out, layer, elapsed, opts.bake_float);
        }
        out.push_str("</svg>");
        out
    }

    /// Static mount markup for a page shell: a full-bleed, pointer-transparent wrapper with the
    /// CSS float animations and the document at time zero.
    pub fn backdrop_markup(&self) -> String {
        let mut css = String::new();
        for layer in &self.config.layers {
            if let Some(float) = &layer.float {
                css.push_str(&float.css(&layer.name));
            }
        }

        let mut out = String::new();
        out.push_str(
            r#"<div class="wavepaths-backdrop" aria-hidden="true" style="position:absolute;inset:0;pointer-events:none;overflow:hidden">"#,
        );
        out.push('\n');
        if !css.is_empty() {
            let _ = write!(out, "<style>\n{css}</style>\n");
        }
        out.push_str(&self.document(0.0, SvgFrameOpts::default()));
        out.push_str("\n</div>\n");
        out
    }

    fn write_gradient(&self, out: &mut String, elapsed: f64) {
        let gradient = &self.config.gradient;
        let stops = gradient.stops_at(elapsed);
        if stops.is_empty() {
            return;
        }

        let _ = write!(
            out,
            r#"<defs><linearGradient id="{}" x1="0%" y1="0%" x2="100%" y2="0%">"#,
            gradient.id
        );
        let last = stops.len().saturating_sub(1).max(1) as f64;
        for (k, stop) in stops.iter().enumerate() {
            let offset = round_to(k as f64 / last * 100.0, 3);
            let _ = write!(
                out,
                r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
                fmt_num(offset),
                stop.hex(),
                fmt_num(round_to(stop.alpha_f64(), 3))
            );
        }
        out.push_str("</linearGradient></defs>");
    }

    fn write_layer(&self, out: &mut String, layer: &WaveLayer, elapsed: f64, bake_float: bool) {
        let _ = write!(out, r#"<g class="{}-waves""#, layer.name);
        if layer.group_opacity < 1.0 {
            let _ = write!(out, r#" opacity="{}""#, fmt_num(layer.group_opacity));
        }
        if bake_float && let Some(float) = &layer.float {
            let dy = round_to(float.offset_at(elapsed), 3);
            if dy != 0.0 {
                let _ = write!(out, r#" transform="translate(0 {})""#, fmt_num(dy));
            }
        }
        out.push('>');

        let stroke = self.stroke_attrs(layer.paint);
        for index in 0..layer.count {
            let _ = write!(
                out,
                r#"<path id="{}" d="{}" {stroke} stroke-width="{}" stroke-linecap="round" opacity="{}" fill="none"/>"#,
                layer.instance_id(index),
                self.path_data(layer, index, elapsed),
                fmt_num(round_to(layer.instance_width(index), 4)),
                fmt_num(round_to(layer.instance_opacity(index), 4)),
            );
        }
        out.push_str("</g>");
    }

    fn stroke_attrs(&self, paint: Paint) -> String {
        match paint {
            Paint::Gradient => format!(r#"stroke="url(#{})""#, self.config.gradient.id),
            Paint::Solid { color } => solid_stroke(color),
        }
    }
}

fn solid_stroke(color: Rgba8) -> String {
    if color.a == 255 {
        format!(r#"stroke="{}""#, color.hex())
    } else {
        format!(
            r#"stroke="{}" stroke-opacity="{}""#,
            color.hex(),
            fmt_num(round_to(color.alpha_f64(), 3))
        )
    }
}

/// Declarative strategy: regenerate the document every frame and rasterize it with `resvg`.
pub struct SvgRenderer {
    scene: SvgScene,
    settings: RenderSettings,
    viewport: Option<Viewport>,
    pixmap: Option<resvg::tiny_skia::Pixmap>,
}

impl SvgRenderer {
    pub fn new(config: BackgroundConfig, settings: RenderSettings) -> Self {
        Self {
            scene: SvgScene::new(config),
            settings,
            viewport: None,
            pixmap: None,
        }
    }

    pub fn scene(&self) -> &SvgScene {
        &self.scene
    }
}

impl BackgroundRenderer for SvgRenderer {
    fn configure(&mut self, viewport: Viewport) -> WavepathsResult<()> {
        self.pixmap = None;
        self.viewport = None;

        let (w, h) = viewport.pixel_size();
        let pixmap = resvg::tiny_skia::Pixmap::new(w, h).ok_or_else(|| {
            WavepathsError::surface_unavailable(format!("cannot allocate {w}x{h} svg surface"))
        })?;

        tracing::debug!(width = w, height = h, "configured svg surface");
        self.pixmap = Some(pixmap);
        self.viewport = Some(viewport);
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn draw(&mut self, elapsed: f64) -> WavepathsResult<()> {
        let (Some(viewport), Some(pixmap)) = (self.viewport, self.pixmap.as_mut()) else {
            return Err(WavepathsError::surface_unavailable(
                "svg surface is not configured",
            ));
        };

        let doc = self.scene.document(
            elapsed,
            SvgFrameOpts {
                size: Some(viewport.size()),
                bake_float: true,
            },
        );
        let tree = usvg::Tree::from_str(&doc, &usvg::Options::default())
            .map_err(|e| WavepathsError::render(format!("svg parse failed: {e}")))?;

        let c = self.settings.clear;
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a));

        let sx = (pixmap.width() as f32) / tree.size().width();
        let sy = (pixmap.height() as f32) / tree.size().height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
        resvg::render(&tree, xform, &mut pixmap.as_mut());
        Ok(())
    }

    fn snapshot(&self) -> WavepathsResult<FrameRGBA> {
        let pixmap = self
            .pixmap
            .as_ref()
            .ok_or_else(|| WavepathsError::surface_unavailable("svg surface is not configured"))?;
        Ok(FrameRGBA {
            width: pixmap.width(),
            height: pixmap.height(),
            data: pixmap.data().to_vec(),
            premultiplied: true,
        })
    }

    fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    fn release(&mut self) {
        self.pixmap = None;
        self.viewport = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
