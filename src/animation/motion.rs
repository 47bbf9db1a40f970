use crate::animation::ease::Ease;
use crate::foundation::core::Rgba8;
use crate::foundation::math::fmt_num;

/// Vertical "breathing" motion of a whole layer group: rest at 0, rise to `-rise` halfway
/// through the period, settle back to 0.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FloatMotion {
    /// Full cycle length in seconds.
    pub period_secs: f64,
    /// Peak upward travel in design units.
    pub rise: f64,
    #[serde(default = "default_float_ease")]
    pub ease: Ease,
}

fn default_float_ease() -> Ease {
    Ease::InOutSine
}

impl FloatMotion {
    pub fn new(period_secs: f64, rise: f64) -> Self {
        Self {
            period_secs,
            rise,
            ease: Ease::InOutSine,
        }
    }

    /// Vertical offset at `t` seconds (negative is up).
    pub fn offset_at(&self, t: f64) -> f64 {
        if !(self.period_secs > 0.0) || !t.is_finite() {
            return 0.0;
        }
        let phase = (t / self.period_secs).rem_euclid(1.0);
        let half = if phase < 0.5 {
            phase * 2.0
        } else {
            (1.0 - phase) * 2.0
        };
        let y = -self.rise * self.ease.apply(half);
        if y == 0.0 { 0.0 } else { y }
    }

    /// CSS `@keyframes` block plus the class rule that applies it.
    pub fn css(&self, name: &str) -> String {
        format!(
            "@keyframes float-{name} {{\n  0%, 100% {{ transform: translateY(0px); }}\n  50% {{ transform: translateY({}px); }}\n}}\n.{name}-waves {{\n  animation: float-{name} {}s ease-in-out infinite;\n}}\n",
            fmt_num(-self.rise),
            fmt_num(self.period_secs),
        )
    }
}

/// Slow color rotation of the shared gradient: every stop walks through the palette over
/// `period_secs`, independently of the path ripple clock.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientCycle {
    pub period_secs: f64,
}

impl GradientCycle {
    /// Stop colors at `t` seconds for a gradient whose resting stops are `palette`.
    pub fn stops_at(&self, palette: &[Rgba8], t: f64) -> Vec<Rgba8> {
        let n = palette.len();
        if n < 2 || !(self.period_secs > 0.0) || !t.is_finite() {
            return palette.to_vec();
        }

        let pos = (t / self.period_secs).rem_euclid(1.0) * n as f64;
        let shift = pos.floor() as usize;
        let frac = pos - pos.floor();

        (0..n)
            .map(|k| {
                let from = palette[(k + shift) % n];
                let to = palette[(k + shift + 1) % n];
                from.lerp(to, frac)
            })
            .collect()
    }
}
