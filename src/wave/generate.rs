use std::f64::consts::PI;

use crate::animation::ease::Ease;
use crate::foundation::core::{Affine, Point, Size};
use crate::foundation::math::{lerp, round_to};
use crate::wave::config::{BackgroundConfig, Harmonic, Precision, ViewBox, WaveGeometry};
use crate::wave::layer::WaveLayer;

/// One evaluated position along a wave before it is turned into a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSample {
    /// Normalized position along the path, `i / segments`.
    pub progress: f64,
    /// `Ease::OutQuad` of `progress`; drives both the baseline and the amplitude decay.
    pub eased: f64,
    /// Point on the straight start→end baseline.
    pub base: Point,
    /// Vertical displacement added to the baseline.
    pub displacement: f64,
}

/// Pure wave-path generator: (layer, instance, elapsed time, scale) → ordered points.
///
/// Output is a function of its inputs only; equal inputs always yield bit-identical points.
#[derive(Clone, Copy, Debug)]
pub struct WaveGenerator {
    geometry: WaveGeometry,
    harmonics: [Harmonic; 3],
    precision: Precision,
}

impl WaveGenerator {
    pub fn new(cfg: &BackgroundConfig) -> Self {
        Self {
            geometry: cfg.geometry,
            harmonics: cfg.harmonics,
            precision: cfg.precision,
        }
    }

    /// Same generator with a different rounding mode.
    pub fn with_precision(self, precision: Precision) -> Self {
        Self { precision, ..self }
    }

    pub fn geometry(&self) -> &WaveGeometry {
        &self.geometry
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Ripple phase of instance `index` at `elapsed` seconds.
    pub fn phase(&self, layer: &WaveLayer, index: u32, elapsed: f64) -> f64 {
        self.geometry.phase_step * f64::from(index) + layer.ripple_speed * elapsed
    }

    /// End point of instance `index`; instances stack downward by `instance_spacing`.
    pub fn end_point(&self, index: u32) -> Point {
        let g = &self.geometry;
        Point::new(g.end.x, g.end.y + f64::from(index) * g.instance_spacing)
    }

    /// Evaluate point `i` of `layer.segments` for one instance, in design units.
    pub fn sample(&self, layer: &WaveLayer, index: u32, i: u32, elapsed: f64) -> WaveSample {
        let g = &self.geometry;
        let progress = f64::from(i) / f64::from(layer.segments);
        let eased = Ease::OutQuad.apply(progress);

        let end = self.end_point(index);
        let base = Point::new(lerp(g.start.x, end.x, eased), lerp(g.start.y, end.y, eased));

        let amplitude_factor = 1.0 - eased * g.amplitude_decay;
        let phase = self.phase(layer, index, elapsed);
        let displacement: f64 = self
            .harmonics
            .iter()
            .map(|h| {
                let osc = self.trig(h.oscillator.eval(progress * PI * h.cycles + phase));
                osc * (layer.base_amplitude * h.weight * amplitude_factor)
            })
            .sum();

        WaveSample {
            progress,
            eased,
            base,
            displacement,
        }
    }

    /// Points of one instance in design space (the configured view box).
    ///
    /// `position` scales x only; callers that don't need it pass `1.0`.
    pub fn generate_design(
        &self,
        layer: &WaveLayer,
        index: u32,
        elapsed: f64,
        position: f64,
    ) -> Vec<Point> {
        (0..=layer.segments)
            .map(|i| {
                let s = self.sample(layer, index, i, elapsed);
                Point::new(
                    self.coord(s.base.x * position),
                    self.coord(s.base.y + s.displacement),
                )
            })
            .collect()
    }

    /// Points of one instance mapped into a `width × height` viewport.
    ///
    /// The design view box covers the viewport (centered, cropped on the longer axis), so wave
    /// endpoints sit outside the visible area and scale linearly with viewport size.
    pub fn generate(
        &self,
        layer: &WaveLayer,
        index: u32,
        elapsed: f64,
        width: f64,
        height: f64,
    ) -> Vec<Point> {
        let xf = cover_transform(self.geometry.view_box, Size::new(width, height));
        self.generate_design(layer, index, elapsed, 1.0)
            .into_iter()
            .map(|p| xf * p)
            .collect()
    }

    fn trig(&self, v: f64) -> f64 {
        match self.precision {
            Precision::Exact => v,
            Precision::Fixed { trig_decimals, .. } => round_to(v, trig_decimals),
        }
    }

    fn coord(&self, v: f64) -> f64 {
        match self.precision {
            Precision::Exact => v,
            Precision::Fixed { coord_decimals, .. } => round_to(v, coord_decimals),
        }
    }
}

/// Transform from the design view box into a viewport so the box fully covers it
/// (SVG `preserveAspectRatio="xMidYMid slice"`).
pub fn cover_transform(view_box: ViewBox, viewport: Size) -> Affine {
    let scale = (viewport.width / view_box.width).max(viewport.height / view_box.height);
    let cx = view_box.min_x + view_box.width / 2.0;
    let cy = view_box.min_y + view_box.height / 2.0;
    Affine::new([
        scale,
        0.0,
        0.0,
        scale,
        viewport.width / 2.0 - scale * cx,
        viewport.height / 2.0 - scale * cy,
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/wave/generate.rs"]
mod tests;
