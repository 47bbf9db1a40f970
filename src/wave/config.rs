use std::path::Path;

use crate::animation::motion::{FloatMotion, GradientCycle};
use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{WavepathsError, WavepathsResult};
use crate::wave::layer::{Paint, Ramp, WaveInstance, WaveLayer};

/// Periodic function driving one harmonic term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Oscillator {
    Sine,
    Cosine,
}

impl Oscillator {
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Self::Sine => x.sin(),
            Self::Cosine => x.cos(),
        }
    }
}

/// One sinusoidal displacement term: `osc(cycles * PI * progress + phase) * weight`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Harmonic {
    pub cycles: f64,
    pub weight: f64,
    pub oscillator: Oscillator,
}

impl Harmonic {
    pub const fn new(cycles: f64, weight: f64, oscillator: Oscillator) -> Self {
        Self {
            cycles,
            weight,
            oscillator,
        }
    }
}

/// SVG-style `viewBox` of the design coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn rect(self) -> Rect {
        Rect::new(
            self.min_x,
            self.min_y,
            self.min_x + self.width,
            self.min_y + self.height,
        )
    }

    /// Attribute form, `"-2400 -800 4800 1600"`.
    pub fn attr(self) -> String {
        use crate::foundation::math::fmt_num;
        format!(
            "{} {} {} {}",
            fmt_num(self.min_x),
            fmt_num(self.min_y),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}

/// Shared geometry of every wave in design units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveGeometry {
    pub view_box: ViewBox,
    /// Where every wave starts (progress 0).
    pub start: Point,
    /// Where instance 0 ends (progress 1); instance `i` ends `i * instance_spacing` lower.
    pub end: Point,
    pub instance_spacing: f64,
    /// Phase offset between consecutive instances, in radians.
    pub phase_step: f64,
    /// Fraction of amplitude lost by the trailing end (`1 - decay * eased`).
    pub amplitude_decay: f64,
    /// Control-point offset used when smoothing points into cubic segments.
    pub tension: f64,
}

impl Default for WaveGeometry {
    fn default() -> Self {
        Self {
            view_box: ViewBox {
                min_x: -2400.0,
                min_y: -800.0,
                width: 4800.0,
                height: 1600.0,
            },
            start: Point::new(2400.0, 800.0),
            end: Point::new(-2400.0, -800.0),
            instance_spacing: 25.0,
            phase_step: 0.2,
            amplitude_decay: 0.3,
            tension: 0.4,
        }
    }
}

/// Rounding applied while generating points.
///
/// `Fixed` keeps markup byte-stable between independently produced renders; `Exact` keeps full
/// floating-point precision for raster output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Precision {
    Exact,
    Fixed {
        trig_decimals: u32,
        coord_decimals: u32,
    },
}

impl Precision {
    pub const MARKUP: Self = Self::Fixed {
        trig_decimals: 6,
        coord_decimals: 3,
    };
}

/// The shared stroke gradient (horizontal, evenly spaced stops).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientSpec {
    pub id: String,
    pub palette: Vec<Rgba8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<GradientCycle>,
}

impl GradientSpec {
    /// Stop colors at `t` seconds on the gradient clock.
    pub fn stops_at(&self, t: f64) -> Vec<Rgba8> {
        match &self.cycle {
            Some(cycle) => cycle.stops_at(&self.palette, t),
            None => self.palette.clone(),
        }
    }
}

/// Built-in configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Floating gradient-stroked SVG path groups.
    Paths,
    /// `Paths` with a slowly color-cycling gradient.
    GradientPaths,
    /// Rippling solid-color layers redrawn on a raster surface.
    Canvas,
}

impl Preset {
    pub fn config(self) -> BackgroundConfig {
        match self {
            Self::Paths => BackgroundConfig::paths(),
            Self::GradientPaths => BackgroundConfig::gradient_paths(),
            Self::Canvas => BackgroundConfig::canvas(),
        }
    }
}

/// Immutable configuration of a whole backdrop, handed to generators and renderers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackgroundConfig {
    pub layers: Vec<WaveLayer>,
    #[serde(default)]
    pub geometry: WaveGeometry,
    pub harmonics: [Harmonic; 3],
    pub precision: Precision,
    pub gradient: GradientSpec,
}

const VIOLET: Rgba8 = Rgba8::rgb(147, 51, 234);
const PINK: Rgba8 = Rgba8::rgb(236, 72, 153);
const BLUE: Rgba8 = Rgba8::rgb(59, 130, 246);

fn half(c: Rgba8) -> Rgba8 {
    Rgba8 { a: 128, ..c }
}

fn shared_gradient(cycle: Option<GradientCycle>) -> GradientSpec {
    GradientSpec {
        id: "sharedGradient".to_string(),
        palette: vec![half(VIOLET), half(PINK), half(BLUE)],
        cycle,
    }
}

impl BackgroundConfig {
    /// Three floating gradient-stroked families: primary, secondary and accent.
    pub fn paths() -> Self {
        let family = |name: &str,
                      count: u32,
                      segments: u32,
                      amplitude: f64,
                      opacity: Ramp,
                      width: Ramp,
                      group_opacity: f64,
                      float: FloatMotion| WaveLayer {
            name: name.to_string(),
            count,
            segments,
            base_amplitude: amplitude,
            ripple_speed: 0.0,
            opacity,
            stroke_width: width,
            paint: Paint::Gradient,
            group_opacity,
            float: Some(float),
        };

        Self {
            layers: vec![
                family(
                    "primary",
                    12,
                    10,
                    150.0,
                    Ramp::new(0.15, 0.02),
                    Ramp::new(4.0, 0.3),
                    1.0,
                    FloatMotion::new(8.0, 15.0),
                ),
                family(
                    "secondary",
                    15,
                    8,
                    100.0,
                    Ramp::new(0.12, 0.015),
                    Ramp::new(3.0, 0.25),
                    0.8,
                    FloatMotion::new(6.0, 10.0),
                ),
                family(
                    "accent",
                    10,
                    6,
                    60.0,
                    Ramp::new(0.08, 0.012),
                    Ramp::new(2.0, 0.2),
                    0.6,
                    FloatMotion::new(4.0, 5.0),
                ),
            ],
            geometry: WaveGeometry::default(),
            harmonics: [
                Harmonic::new(3.0, 0.7, Oscillator::Sine),
                Harmonic::new(4.0, 0.3, Oscillator::Cosine),
                Harmonic::new(2.0, 0.2, Oscillator::Sine),
            ],
            precision: Precision::MARKUP,
            gradient: shared_gradient(None),
        }
    }

    /// [`Self::paths`] with a gently rippling, color-cycling gradient.
    pub fn gradient_paths() -> Self {
        let mut cfg = Self::paths();
        for (layer, speed) in cfg.layers.iter_mut().zip([0.35, 0.5, 0.7]) {
            layer.ripple_speed = speed;
        }
        cfg.gradient = shared_gradient(Some(GradientCycle { period_secs: 12.0 }));
        cfg
    }

    /// Solid-color rippling layers for the raster surface.
    pub fn canvas() -> Self {
        let layer = |name: &str,
                     count: u32,
                     segments: u32,
                     amplitude: f64,
                     ripple_speed: f64,
                     opacity: Ramp,
                     width: Ramp,
                     color: Rgba8| WaveLayer {
            name: name.to_string(),
            count,
            segments,
            base_amplitude: amplitude,
            ripple_speed,
            opacity,
            stroke_width: width,
            paint: Paint::Solid { color },
            group_opacity: 1.0,
            float: None,
        };

        Self {
            layers: vec![
                layer(
                    "violet",
                    8,
                    10,
                    150.0,
                    0.6,
                    Ramp::new(0.15, 0.03),
                    Ramp::new(2.0, 0.3),
                    VIOLET,
                ),
                layer(
                    "pink",
                    8,
                    8,
                    100.0,
                    0.8,
                    Ramp::new(0.12, 0.025),
                    Ramp::new(1.5, 0.25),
                    PINK,
                ),
                layer(
                    "blue",
                    6,
                    6,
                    60.0,
                    1.1,
                    Ramp::new(0.1, 0.02),
                    Ramp::new(1.0, 0.2),
                    BLUE,
                ),
            ],
            geometry: WaveGeometry::default(),
            harmonics: [
                Harmonic::new(3.0, 0.7, Oscillator::Sine),
                Harmonic::new(4.0, 0.3, Oscillator::Sine),
                Harmonic::new(2.0, 0.2, Oscillator::Sine),
            ],
            precision: Precision::Exact,
            gradient: shared_gradient(None),
        }
    }

    pub fn from_json_str(json: &str) -> WavepathsResult<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| WavepathsError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> WavepathsResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> WavepathsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WavepathsError::serde(e.to_string()))
    }

    pub fn layer(&self, name: &str) -> Option<&WaveLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Total number of drawn curves across all layers.
    pub fn instance_count(&self) -> usize {
        self.layers.iter().map(|l| l.count as usize).sum()
    }

    /// Every drawn curve, in paint order.
    pub fn instances(&self) -> impl Iterator<Item = WaveInstance> + '_ {
        self.layers.iter().enumerate().flat_map(|(layer, l)| {
            (0..l.count).map(move |index| WaveInstance { layer, index })
        })
    }

    pub fn validate(&self) -> WavepathsResult<()> {
        if self.layers.is_empty() {
            return Err(WavepathsError::validation("at least one layer is required"));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            layer.validate()?;
            if self.layers[..i].iter().any(|l| l.name == layer.name) {
                return Err(WavepathsError::validation(format!(
                    "duplicate layer name '{}'",
                    layer.name
                )));
            }
        }

        let g = &self.geometry;
        let vb = g.view_box;
        if !(vb.width > 0.0 && vb.height > 0.0) || !vb.min_x.is_finite() || !vb.min_y.is_finite() {
            return Err(WavepathsError::validation(
                "view_box must be finite with width/height > 0",
            ));
        }
        let finite = [
            g.start.x,
            g.start.y,
            g.end.x,
            g.end.y,
            g.instance_spacing,
            g.phase_step,
            g.amplitude_decay,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(WavepathsError::validation("geometry values must be finite"));
        }
        if !(0.0..=1.0).contains(&g.tension) {
            return Err(WavepathsError::validation("tension must be in [0, 1]"));
        }

        if self
            .harmonics
            .iter()
            .any(|h| !h.cycles.is_finite() || !h.weight.is_finite())
        {
            return Err(WavepathsError::validation("harmonics must be finite"));
        }

        if let Precision::Fixed {
            trig_decimals,
            coord_decimals,
        } = self.precision
            && (trig_decimals > 15 || coord_decimals > 15)
        {
            return Err(WavepathsError::validation(
                "precision decimals must be <= 15",
            ));
        }

        let id = &self.gradient.id;
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(WavepathsError::validation(
                "gradient id must be non-empty ascii alphanumeric, '-' or '_'",
            ));
        }

        let uses_gradient = self.layers.iter().any(|l| l.paint == Paint::Gradient);
        if uses_gradient && self.gradient.palette.is_empty() {
            return Err(WavepathsError::validation(
                "gradient palette must be non-empty when a layer uses the gradient",
            ));
        }
        if let Some(cycle) = &self.gradient.cycle
            && !(cycle.period_secs > 0.0)
        {
            return Err(WavepathsError::validation(
                "gradient cycle period must be > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/config.rs"]
mod tests;
