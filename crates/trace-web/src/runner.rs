use trace_engine::{
    ConfigResult, GlyphCatalog, InputEvent, InputQueue, Lesson, LessonStep, Point, TraceConfig,
};

/// Owns one lesson and its input queue for the wasm exports.
///
/// wasm-bindgen cannot export the lesson directly, so `lib.rs` keeps a
/// `LessonRunner` in a `thread_local!` and forwards free functions to it.
pub struct LessonRunner {
    lesson: Lesson,
    input: InputQueue,
}

impl LessonRunner {
    /// Build a lesson for `stage` from a JSON config (empty string for defaults).
    /// A positive `size` overrides the config's letter size. The first glyph
    /// is timed from `now_ms`.
    pub fn new(config_json: &str, stage: u32, center: Point, size: f32, now_ms: f64) -> ConfigResult<Self> {
        let mut config = if config_json.trim().is_empty() {
            TraceConfig::default()
        } else {
            TraceConfig::from_json(config_json)?
        };
        if size > 0.0 {
            config.letter_size = size;
        }
        let lesson = Lesson::for_stage(config, GlyphCatalog::builtin(), stage, center, now_ms)?;
        Ok(Self {
            lesson,
            input: InputQueue::new(),
        })
    }

    pub fn start(&mut self, now_ms: f64) {
        self.input.drain();
        self.lesson.start(now_ms);
    }

    /// Queue an event. A finished gesture is handed to the lesson at once.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
        if self.input.gesture_ended() {
            self.flush_input();
        }
    }

    /// Apply queued input to the lesson, then drain the queue.
    pub fn flush_input(&mut self) {
        self.lesson.handle_input(&self.input);
        self.input.drain();
    }

    pub fn clear(&mut self) {
        self.input.drain();
        self.lesson.clear();
    }

    pub fn submit(&mut self, now_ms: f64) -> LessonStep {
        self.flush_input();
        self.lesson.submit(now_ms)
    }

    pub fn skip(&mut self, now_ms: f64) -> LessonStep {
        self.input.drain();
        self.lesson.skip(now_ms)
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    /// Current reference path as flat `[x0, y0, x1, y1, ...]`.
    pub fn reference_path_flat(&self) -> Vec<f32> {
        flatten_points(self.lesson.reference_path())
    }

    pub fn current_symbol(&self) -> String {
        self.lesson
            .current()
            .map(|g| g.symbol.clone())
            .unwrap_or_default()
    }

    pub fn statistics_json(&self) -> String {
        to_json(&self.lesson.report())
    }
}

/// Interleave point coordinates for transfer to JS.
pub fn flatten_points(points: &[Point]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Serialize a payload for JS. Failures are logged and yield `"null"`.
pub fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("Failed to serialize payload: {e}");
        "null".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const CENTER: Vec2 = Vec2::new(300.0, 300.0);

    #[test]
    fn default_config_for_empty_json() {
        let runner = LessonRunner::new("", 1, CENTER, 0.0, 0.0).unwrap();
        assert_eq!(runner.lesson().config().letter_size, 200.0);
        assert_eq!(runner.current_symbol(), "அ");
    }

    #[test]
    fn size_overrides_config() {
        let runner = LessonRunner::new(r#"{ "letter_size": 120 }"#, 4, CENTER, 300.0, 0.0).unwrap();
        assert_eq!(runner.lesson().config().letter_size, 300.0);
        let flat = runner.reference_path_flat();
        assert_eq!(flat.len(), runner.lesson().reference_path().len() * 2);
    }

    #[test]
    fn bad_config_is_an_error() {
        assert!(LessonRunner::new("{", 1, CENTER, 200.0, 0.0).is_err());
        assert!(LessonRunner::new("", 99, CENTER, 200.0, 0.0).is_err());
    }

    #[test]
    fn queued_input_reaches_lesson_on_submit() {
        let mut runner = LessonRunner::new("", 4, CENTER, 200.0, 0.0).unwrap();
        runner.start(0.0);
        let path = runner.lesson().reference_path().to_vec();
        runner.push_input(InputEvent::PointerDown { x: path[0].x, y: path[0].y });
        for p in &path[1..] {
            runner.push_input(InputEvent::PointerMove { x: p.x, y: p.y });
        }
        runner.push_input(InputEvent::PointerUp { x: 0.0, y: 0.0 });

        assert!(matches!(runner.submit(1_000.0), LessonStep::Passed { .. }));
        assert_eq!(runner.current_symbol(), "B");
    }

    #[test]
    fn pointer_up_hands_stroke_to_lesson() {
        let mut runner = LessonRunner::new("", 4, CENTER, 200.0, 0.0).unwrap();
        runner.push_input(InputEvent::PointerDown { x: 250.0, y: 300.0 });
        runner.push_input(InputEvent::PointerMove { x: 280.0, y: 300.0 });
        assert!(runner.lesson().capture().is_empty());

        runner.push_input(InputEvent::PointerUp { x: 280.0, y: 300.0 });
        assert_eq!(runner.lesson().capture().stroke_count(), 1);
    }

    #[test]
    fn skip_and_statistics_json() {
        let mut runner = LessonRunner::new("", 1, CENTER, 200.0, 0.0).unwrap();
        runner.start(0.0);
        let step = runner.skip(500.0);
        let json = to_json(&step);
        assert!(json.contains(r#""kind":"skipped""#));

        let stats: serde_json::Value = serde_json::from_str(&runner.statistics_json()).unwrap();
        assert_eq!(stats["statistics"]["skipped_letters"], 1);
        assert_eq!(stats["records"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn flatten_interleaves() {
        let flat = flatten_points(&[Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
        assert_eq!(flat, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
