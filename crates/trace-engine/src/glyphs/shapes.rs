//! Parametric stroke primitives for reference paths.
//!
//! Segments live in a 200 x 200 design box centred on the origin with y
//! growing downward. A template is a slice of segments sampled in order.

use std::f32::consts::PI;

use glam::Vec2;

use crate::core::geometry::Point;

/// Side length of the design box all templates are authored in.
pub const DESIGN_SIZE: f32 = 200.0;

/// One parametric piece of a glyph path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight segment from `from` to `to`.
    Line { from: [f32; 2], to: [f32; 2], steps: u32 },
    /// Circular arc. Angles in radians, positive sweep turns clockwise on screen.
    Arc {
        center: [f32; 2],
        radius: f32,
        start: f32,
        sweep: f32,
        steps: u32,
    },
    /// Elliptical arc with independent radii.
    Ellipse {
        center: [f32; 2],
        radii: [f32; 2],
        start: f32,
        sweep: f32,
        steps: u32,
    },
    /// x runs linearly across `x`, y = `y0 + amp * sin(freq * π * t)`.
    SineX {
        x: [f32; 2],
        y0: f32,
        amp: f32,
        freq: f32,
        steps: u32,
    },
    /// y runs linearly across `y`, x = `x0 + amp * cos(freq * π * t)`.
    CosY {
        x0: f32,
        amp: f32,
        freq: f32,
        y: [f32; 2],
        steps: u32,
    },
    /// Quadratic Bézier curve.
    Quad {
        from: [f32; 2],
        ctrl: [f32; 2],
        to: [f32; 2],
        steps: u32,
    },
}

impl Segment {
    /// Position at parameter `t` in [0, 1], in design units.
    pub fn point_at(&self, t: f32) -> Vec2 {
        match *self {
            Segment::Line { from, to, .. } => Vec2::from(from).lerp(Vec2::from(to), t),
            Segment::Arc {
                center,
                radius,
                start,
                sweep,
                ..
            } => {
                let angle = start + sweep * t;
                Vec2::from(center) + Vec2::new(angle.cos(), angle.sin()) * radius
            }
            Segment::Ellipse {
                center,
                radii,
                start,
                sweep,
                ..
            } => {
                let angle = start + sweep * t;
                Vec2::from(center) + Vec2::new(angle.cos() * radii[0], angle.sin() * radii[1])
            }
            Segment::SineX {
                x,
                y0,
                amp,
                freq,
                ..
            } => Vec2::new(
                x[0] + (x[1] - x[0]) * t,
                y0 + amp * (freq * PI * t).sin(),
            ),
            Segment::CosY {
                x0,
                amp,
                freq,
                y,
                ..
            } => Vec2::new(
                x0 + amp * (freq * PI * t).cos(),
                y[0] + (y[1] - y[0]) * t,
            ),
            Segment::Quad { from, ctrl, to, .. } => {
                let (a, c, b) = (Vec2::from(from), Vec2::from(ctrl), Vec2::from(to));
                let u = 1.0 - t;
                a * (u * u) + c * (2.0 * u * t) + b * (t * t)
            }
        }
    }

    pub fn steps(&self) -> u32 {
        let steps = match *self {
            Segment::Line { steps, .. }
            | Segment::Arc { steps, .. }
            | Segment::Ellipse { steps, .. }
            | Segment::SineX { steps, .. }
            | Segment::CosY { steps, .. }
            | Segment::Quad { steps, .. } => steps,
        };
        steps.max(1)
    }

    /// Append `steps + 1` samples mapped through `to_world`.
    pub fn sample_into(&self, out: &mut Vec<Point>, to_world: impl Fn(Vec2) -> Point) {
        let steps = self.steps();
        out.reserve(steps as usize + 1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            out.push(to_world(self.point_at(t)));
        }
    }
}

/// Samples per straight segment in the authored tables.
pub const LINE_STEPS: u32 = 30;
/// Samples per curved segment in the authored tables.
pub const CURVE_STEPS: u32 = 40;

pub const fn line(from: [f32; 2], to: [f32; 2]) -> Segment {
    Segment::Line {
        from,
        to,
        steps: LINE_STEPS,
    }
}

pub const fn arc(center: [f32; 2], radius: f32, start: f32, sweep: f32) -> Segment {
    Segment::Arc {
        center,
        radius,
        start,
        sweep,
        steps: CURVE_STEPS,
    }
}

pub const fn ellipse(center: [f32; 2], radii: [f32; 2], start: f32, sweep: f32) -> Segment {
    Segment::Ellipse {
        center,
        radii,
        start,
        sweep,
        steps: CURVE_STEPS,
    }
}

pub const fn quad(from: [f32; 2], ctrl: [f32; 2], to: [f32; 2]) -> Segment {
    Segment::Quad {
        from,
        ctrl,
        to,
        steps: CURVE_STEPS,
    }
}

/// Sample a template into world coordinates, scaled from the design box to `size`.
pub fn sample_template(segments: &[Segment], center: Point, size: f32) -> Vec<Point> {
    let scale = size / DESIGN_SIZE;
    let capacity: usize = segments.iter().map(|s| s.steps() as usize + 1).sum();
    let mut points = Vec::with_capacity(capacity);
    for segment in segments {
        segment.sample_into(&mut points, |p| center + p * scale);
    }
    points
}

/// Closed circle of `radius` around `center`: `steps + 1` samples, first == last.
pub fn circle(center: Point, radius: f32, steps: u32) -> Vec<Point> {
    let steps = steps.max(2);
    (0..=steps)
        .map(|i| {
            // Index-based angle keeps the closing sample exactly on the start.
            let angle = if i == steps {
                0.0
            } else {
                i as f32 / steps as f32 * 2.0 * PI
            };
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}
