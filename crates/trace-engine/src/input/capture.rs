use crate::core::config::CaptureConfig;
use crate::core::geometry::{Point, Rect, Stroke, MIN_STROKE_POINTS};

use super::queue::InputEvent;

/// Whether a stroke is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Waiting for pointer down.
    Idle,
    /// Pointer is down inside the region.
    Drawing,
}

/// Result of feeding one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureResult {
    /// A new stroke began.
    Started,
    /// Point appended to the current stroke.
    Accepted,
    /// Point closer than the jitter distance, dropped.
    Filtered,
    /// Pointer down outside the region; nothing started.
    OutOfBounds,
    /// Stroke ended and kept.
    Committed,
    /// Stroke ended with too few points and was dropped.
    Discarded,
    /// No action (e.g. move while idle).
    Ignored,
}

/// Accumulates the strokes of one trace attempt.
///
/// Strokes append in capture order. Lifting the pointer keeps earlier
/// strokes; only [`StrokeCapture::clear`] removes them.
pub struct StrokeCapture {
    config: CaptureConfig,
    region: Option<Rect>,
    strokes: Vec<Stroke>,
    current: Stroke,
    state: CaptureState,
}

impl StrokeCapture {
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            config,
            region: None,
            strokes: Vec::new(),
            current: Vec::with_capacity(256),
            state: CaptureState::Idle,
        }
    }

    /// Only accept drawing inside `region`.
    pub fn with_region(mut self, region: Rect) -> Self {
        self.region = Some(region);
        self
    }

    pub fn set_region(&mut self, region: Option<Rect>) {
        self.region = region;
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == CaptureState::Drawing
    }

    /// Committed strokes.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Stroke in progress (empty when idle).
    pub fn current_stroke(&self) -> &[Point] {
        &self.current
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Vec::len).sum::<usize>() + self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.current.is_empty()
    }

    fn in_region(&self, p: Point) -> bool {
        p.is_finite() && self.region.map_or(true, |r| r.contains(p))
    }

    pub fn pointer_down(&mut self, p: Point) -> CaptureResult {
        if self.state == CaptureState::Drawing {
            // A lost pointer-up: close the old stroke first.
            self.pointer_up();
        }
        if !self.in_region(p) {
            return CaptureResult::OutOfBounds;
        }
        self.current.clear();
        self.current.push(p);
        self.state = CaptureState::Drawing;
        CaptureResult::Started
    }

    pub fn pointer_move(&mut self, p: Point) -> CaptureResult {
        if self.state != CaptureState::Drawing {
            return CaptureResult::Ignored;
        }
        if !self.in_region(p) {
            return self.pointer_up();
        }

        let Some(&last) = self.current.last() else {
            self.current.push(p);
            return CaptureResult::Accepted;
        };
        if p.distance(last) < self.config.min_point_distance {
            return CaptureResult::Filtered;
        }
        self.current.push(last + (p - last) * self.config.smoothing);
        CaptureResult::Accepted
    }

    pub fn pointer_up(&mut self) -> CaptureResult {
        if self.state != CaptureState::Drawing {
            return CaptureResult::Ignored;
        }
        self.state = CaptureState::Idle;
        let stroke = std::mem::take(&mut self.current);
        if stroke.len() >= MIN_STROKE_POINTS {
            log::debug!("Stroke {} committed ({} points)", self.strokes.len(), stroke.len());
            self.strokes.push(stroke);
            CaptureResult::Committed
        } else {
            CaptureResult::Discarded
        }
    }

    /// Forget every stroke, including one in progress.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current.clear();
        self.state = CaptureState::Idle;
    }

    /// Feed one queued event.
    pub fn handle(&mut self, event: &InputEvent) -> CaptureResult {
        match *event {
            InputEvent::PointerDown { x, y } => self.pointer_down(Point::new(x, y)),
            InputEvent::PointerMove { x, y } => self.pointer_move(Point::new(x, y)),
            InputEvent::PointerUp { .. } | InputEvent::PointerCancel => self.pointer_up(),
            InputEvent::Clear => {
                self.clear();
                CaptureResult::Ignored
            }
        }
    }

    /// Committed strokes plus the one in progress, if long enough.
    pub fn snapshot(&self) -> Vec<Stroke> {
        let mut out = self.strokes.clone();
        if self.current.len() >= MIN_STROKE_POINTS {
            out.push(self.current.clone());
        }
        out
    }
}

impl Default for StrokeCapture {
    fn default() -> Self {
        Self::new(CaptureConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn raw() -> CaptureConfig {
        CaptureConfig {
            min_point_distance: 0.0,
            smoothing: 1.0,
            region_margin: 0.0,
        }
    }

    #[test]
    fn strokes_accumulate_across_pen_up() {
        let mut cap = StrokeCapture::new(raw());
        assert_eq!(cap.pointer_down(Vec2::new(0.0, 0.0)), CaptureResult::Started);
        assert_eq!(cap.pointer_move(Vec2::new(10.0, 0.0)), CaptureResult::Accepted);
        assert_eq!(cap.pointer_up(), CaptureResult::Committed);

        cap.pointer_down(Vec2::new(0.0, 10.0));
        cap.pointer_move(Vec2::new(10.0, 10.0));
        cap.pointer_move(Vec2::new(20.0, 10.0));
        cap.pointer_up();

        assert_eq!(cap.stroke_count(), 2);
        assert_eq!(cap.strokes()[1].len(), 3);
        assert_eq!(cap.state(), CaptureState::Idle);
    }

    #[test]
    fn tap_is_discarded() {
        let mut cap = StrokeCapture::new(raw());
        cap.pointer_down(Vec2::new(5.0, 5.0));
        assert_eq!(cap.pointer_up(), CaptureResult::Discarded);
        assert!(cap.strokes().is_empty());
    }

    #[test]
    fn pointer_down_outside_region_is_rejected() {
        let region = Rect::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
        let mut cap = StrokeCapture::new(raw()).with_region(region);
        assert_eq!(cap.pointer_down(Vec2::new(150.0, 50.0)), CaptureResult::OutOfBounds);
        assert!(!cap.is_drawing());
        assert_eq!(cap.pointer_move(Vec2::new(50.0, 50.0)), CaptureResult::Ignored);
    }

    #[test]
    fn leaving_region_ends_stroke() {
        let region = Rect::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
        let mut cap = StrokeCapture::new(raw()).with_region(region);
        cap.pointer_down(Vec2::new(10.0, 10.0));
        cap.pointer_move(Vec2::new(50.0, 10.0));
        assert_eq!(cap.pointer_move(Vec2::new(150.0, 10.0)), CaptureResult::Committed);
        assert_eq!(cap.strokes()[0], vec![Vec2::new(10.0, 10.0), Vec2::new(50.0, 10.0)]);
        assert_eq!(cap.pointer_move(Vec2::new(60.0, 10.0)), CaptureResult::Ignored);
    }

    #[test]
    fn jitter_filter_and_smoothing() {
        let config = CaptureConfig::child_friendly();
        let mut cap = StrokeCapture::new(config);
        cap.pointer_down(Vec2::new(0.0, 0.0));
        assert_eq!(cap.pointer_move(Vec2::new(3.0, 0.0)), CaptureResult::Filtered);
        assert_eq!(cap.pointer_move(Vec2::new(10.0, 0.0)), CaptureResult::Accepted);
        let p = cap.current_stroke()[1];
        assert!((p.x - 8.0).abs() < 1e-5);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn non_finite_points_are_not_captured() {
        let mut cap = StrokeCapture::new(raw());
        assert_eq!(cap.pointer_down(Vec2::new(f32::NAN, 0.0)), CaptureResult::OutOfBounds);
        cap.pointer_down(Vec2::new(0.0, 0.0));
        cap.pointer_move(Vec2::new(5.0, 0.0));
        assert_eq!(cap.pointer_move(Vec2::new(f32::INFINITY, 0.0)), CaptureResult::Committed);
    }

    #[test]
    fn clear_and_snapshot() {
        let mut cap = StrokeCapture::new(raw());
        cap.handle(&InputEvent::PointerDown { x: 0.0, y: 0.0 });
        cap.handle(&InputEvent::PointerMove { x: 5.0, y: 0.0 });
        assert_eq!(cap.snapshot().len(), 1);
        assert!(cap.strokes().is_empty());

        cap.handle(&InputEvent::PointerCancel);
        assert_eq!(cap.stroke_count(), 1);

        cap.handle(&InputEvent::Clear);
        assert!(cap.is_empty());
        assert_eq!(cap.point_count(), 0);
    }

    #[test]
    fn second_pointer_down_closes_open_stroke() {
        let mut cap = StrokeCapture::new(raw());
        cap.pointer_down(Vec2::new(0.0, 0.0));
        cap.pointer_move(Vec2::new(5.0, 0.0));
        assert_eq!(cap.pointer_down(Vec2::new(20.0, 0.0)), CaptureResult::Started);
        assert_eq!(cap.stroke_count(), 1);
        assert_eq!(cap.current_stroke(), &[Vec2::new(20.0, 0.0)]);
    }
}
