/// Round `x` to `decimals` places after the decimal point.
pub(crate) fn round_to(x: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let r = (x * scale).round() / scale;
    // Avoid emitting "-0" in markup.
    if r == 0.0 { 0.0 } else { r }
}

/// Format a coordinate for SVG path data in shortest round-trip form (`2400`, `-799.5`).
pub(crate) fn fmt_num(x: f64) -> String {
    if x == 0.0 || !x.is_finite() {
        return "0".to_string();
    }
    format!("{x}")
}

/// Linear interpolation between `a` and `b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
