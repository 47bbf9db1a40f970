use crate::foundation::core::{BezPath, Point};
use crate::foundation::math::{fmt_num, round_to};
use crate::wave::config::Precision;

/// Control points of the cubic joining `prev` to `cur`.
///
/// Both controls sit `tension` of the way in from each end along x and keep their endpoint's y,
/// so every joint has a flat tangent and segments never overshoot vertically.
pub fn segment_controls(prev: Point, cur: Point, tension: f64) -> (Point, Point) {
    let dx = cur.x - prev.x;
    (
        Point::new(prev.x + dx * tension, prev.y),
        Point::new(prev.x + dx * (1.0 - tension), cur.y),
    )
}

/// Smooth cubic curve through `points` (empty path for no points).
pub fn smooth_curve(points: &[Point], tension: f64) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };

    path.move_to(first);
    let mut prev = first;
    for &cur in rest {
        let (c1, c2) = segment_controls(prev, cur, tension);
        path.curve_to(c1, c2, cur);
        prev = cur;
    }
    path
}

/// SVG path data (`M x y C x1 y1, x2 y2, x y ...`) for the smooth curve through `points`.
///
/// With fixed precision, control points are rounded like the coordinates so the string is
/// stable across independent renders.
pub fn path_data(points: &[Point], tension: f64, precision: Precision) -> String {
    let round = |v: f64| match precision {
        Precision::Exact => v,
        Precision::Fixed { coord_decimals, .. } => round_to(v, coord_decimals),
    };
    let pt = |p: Point| format!("{} {}", fmt_num(round(p.x)), fmt_num(round(p.y)));

    let mut commands = Vec::with_capacity(points.len());
    for (i, &cur) in points.iter().enumerate() {
        if i == 0 {
            commands.push(format!("M {}", pt(cur)));
            continue;
        }
        let (c1, c2) = segment_controls(points[i - 1], cur, tension);
        commands.push(format!("C {}, {}, {}", pt(c1), pt(c2), pt(cur)));
    }
    commands.join(" ")
}
