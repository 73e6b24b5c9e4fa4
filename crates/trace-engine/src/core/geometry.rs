use glam::Vec2;

/// A sampled position in the shared display coordinate space.
pub type Point = Vec2;

/// One continuous pointer-down to pointer-up gesture.
pub type Stroke = Vec<Point>;

/// Strokes shorter than this contribute nothing to scoring.
pub const MIN_STROKE_POINTS: usize = 2;

/// Axis-aligned rectangle used as the valid drawing region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Square of side `size` centred on `center`, grown by `margin` on every side.
    pub fn around(center: Vec2, size: f32, margin: f32) -> Self {
        let half = Vec2::splat(size * 0.5 + margin);
        Self::new(center - half, center + half)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Flatten scorable strokes into one point list in capture order.
///
/// Non-finite samples are removed first. Strokes left with fewer than
/// [`MIN_STROKE_POINTS`] points are then dropped.
pub fn flatten_strokes(strokes: &[Stroke]) -> Vec<Point> {
    let total: usize = strokes.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    let mut dropped = 0usize;

    for stroke in strokes {
        let finite: Vec<Point> = stroke.iter().copied().filter(|p| p.is_finite()).collect();
        dropped += stroke.len() - finite.len();
        if finite.len() >= MIN_STROKE_POINTS {
            out.extend(finite);
        }
    }

    if dropped > 0 {
        log::warn!("flatten_strokes: dropped {dropped} non-finite point(s)");
    }
    out
}

/// First-to-last displacement of a point sequence (zero for < 2 points).
pub fn overall_direction(points: &[Point]) -> Vec2 {
    match (points.first(), points.last()) {
        (Some(&first), Some(&last)) => last - first,
        _ => Vec2::ZERO,
    }
}

/// Minimal angle between the headings of two vectors, in [0, π].
///
/// Headings come from `atan2`, so a zero vector has heading 0.
pub fn heading_difference(a: Vec2, b: Vec2) -> f32 {
    use std::f32::consts::PI;

    let mut diff = (a.y.atan2(a.x) - b.y.atan2(b.x)).abs();
    if diff > PI {
        diff = 2.0 * PI - diff;
    }
    diff.clamp(0.0, PI)
}

/// True if any point of `points` lies within `radius` of `target`.
pub fn any_within(points: &[Point], target: Point, radius: f32) -> bool {
    points.iter().any(|p| p.distance(target) <= radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn flatten_skips_short_strokes() {
        let strokes = vec![
            vec![Vec2::new(0.0, 0.0)],
            vec![Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)],
            vec![],
            vec![Vec2::new(3.0, 3.0), Vec2::new(4.0, 4.0), Vec2::new(5.0, 5.0)],
        ];
        let flat = flatten_strokes(&strokes);
        assert_eq!(flat.len(), 5);
        assert_eq!(flat[0], Vec2::new(1.0, 1.0));
        assert_eq!(flat[4], Vec2::new(5.0, 5.0));
    }

    #[test]
    fn flatten_drops_non_finite_points() {
        let strokes = vec![vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(f32::NAN, 1.0),
            Vec2::new(2.0, f32::INFINITY),
            Vec2::new(3.0, 3.0),
        ]];
        let flat = flatten_strokes(&strokes);
        assert_eq!(flat, vec![Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0)]);
    }

    #[test]
    fn stroke_reduced_to_one_finite_point_is_dropped() {
        let strokes = vec![
            vec![Vec2::new(0.0, 0.0), Vec2::new(f32::NAN, 0.0)],
            vec![Vec2::new(f32::INFINITY, 1.0), Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0)],
        ];
        let flat = flatten_strokes(&strokes);
        assert_eq!(flat, vec![Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0)]);
    }

    #[test]
    fn heading_difference_wraps_around() {
        let a = Vec2::new(1.0, 0.01);
        let b = Vec2::new(1.0, -0.01);
        assert!(heading_difference(a, b) < 0.05);

        let left = Vec2::new(-1.0, 0.0);
        let right = Vec2::new(1.0, 0.0);
        assert!((heading_difference(left, right) - PI).abs() < 1e-5);
    }

    #[test]
    fn rect_around_contains_margin() {
        let r = Rect::around(Vec2::new(100.0, 100.0), 200.0, 10.0);
        assert!(r.contains(Vec2::new(-9.0, 100.0)));
        assert!(!r.contains(Vec2::new(-11.0, 100.0)));
        assert!(r.contains(Vec2::new(210.0, 210.0)));
    }

    #[test]
    fn any_within_is_inclusive() {
        let pts = [Vec2::new(10.0, 0.0)];
        assert!(any_within(&pts, Vec2::ZERO, 10.0));
        assert!(!any_within(&pts, Vec2::ZERO, 9.99));
    }
}
