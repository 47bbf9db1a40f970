use crate::animation::motion::FloatMotion;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{WavepathsError, WavepathsResult};

/// Per-instance linear ramp `base + index * step`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ramp {
    pub base: f64,
    pub step: f64,
}

impl Ramp {
    pub const fn new(base: f64, step: f64) -> Self {
        Self { base, step }
    }

    pub fn at(self, index: u32) -> f64 {
        self.base + f64::from(index) * self.step
    }

    fn is_finite(self) -> bool {
        self.base.is_finite() && self.step.is_finite()
    }
}

/// Stroke paint of a layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    /// The background's shared (possibly color-cycling) gradient.
    Gradient,
    /// A single color.
    Solid { color: Rgba8 },
}

/// A named family of wave instances sharing amplitude, speed, opacity and color.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveLayer {
    pub name: String,
    /// Number of instances drawn for this layer.
    pub count: u32,
    /// Curve segments per instance; every instance has `segments + 1` points.
    pub segments: u32,
    pub base_amplitude: f64,
    /// Phase advance in radians per second of elapsed time. Zero freezes the ripple.
    #[serde(default)]
    pub ripple_speed: f64,
    pub opacity: Ramp,
    pub stroke_width: Ramp,
    pub paint: Paint,
    #[serde(default = "full")]
    pub group_opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float: Option<FloatMotion>,
}

fn full() -> f64 {
    1.0
}

/// One drawn curve: `index` within the layer at `layer` in the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WaveInstance {
    pub layer: usize,
    pub index: u32,
}

impl WaveLayer {
    pub fn point_count(&self) -> usize {
        self.segments as usize + 1
    }

    /// Instance opacity, growing with the index and capped at fully opaque.
    pub fn instance_opacity(&self, index: u32) -> f64 {
        self.opacity.at(index).clamp(0.0, 1.0)
    }

    pub fn instance_width(&self, index: u32) -> f64 {
        self.stroke_width.at(index).max(0.0)
    }

    /// Stable element id for markup (`primary-3`).
    pub fn instance_id(&self, index: u32) -> String {
        format!("{}-{index}", self.name)
    }

    pub fn validate(&self) -> WavepathsResult<()> {
        let err = |msg: &str| WavepathsError::validation(format!("layer '{}': {msg}", self.name));

        if self.name.is_empty() {
            return Err(WavepathsError::validation("layer name must be non-empty"));
        }
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(err("name must be ascii alphanumeric, '-' or '_'"));
        }
        if self.count == 0 {
            return Err(err("count must be > 0"));
        }
        if self.segments == 0 {
            return Err(err("segments must be > 0"));
        }
        if !self.base_amplitude.is_finite() {
            return Err(err("base_amplitude must be finite"));
        }
        if !self.ripple_speed.is_finite() {
            return Err(err("ripple_speed must be finite"));
        }
        if !self.opacity.is_finite() || !self.stroke_width.is_finite() {
            return Err(err("opacity and stroke_width ramps must be finite"));
        }
        if self.stroke_width.base < 0.0 {
            return Err(err("stroke_width base must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.group_opacity) {
            return Err(err("group_opacity must be in [0, 1]"));
        }
        if let Some(float) = &self.float
            && (!(float.period_secs > 0.0) || !float.rise.is_finite())
        {
            return Err(err("float period must be > 0 and rise finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/layer.rs"]
mod tests;
