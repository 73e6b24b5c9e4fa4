use serde::Serialize;

use crate::core::config::TraceConfig;
use crate::core::error::{ConfigError, ConfigResult};
use crate::core::geometry::{Point, Rect};
use crate::glyphs::catalog::{GlyphCatalog, GlyphDescriptor};
use crate::glyphs::registry::generate_reference_path;
use crate::input::capture::StrokeCapture;
use crate::input::queue::InputQueue;
use crate::scoring::evaluator::evaluate_trace;
use crate::scoring::feedback::{feedback_for, Feedback};
use crate::scoring::round::{LetterRound, RoundOutcome};
use crate::scoring::session::{LetterAttemptRecord, ScoreSession, SessionReport, SessionStatistics};

/// What happened on submit or skip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LessonStep {
    /// Below threshold; strokes were cleared for another try.
    Retry { feedback: Feedback, remaining: u32 },
    /// Threshold met; the lesson moved to the next glyph.
    Passed {
        feedback: Feedback,
        record: LetterAttemptRecord,
    },
    /// Out of attempts; the lesson moved to the next glyph.
    Exhausted {
        feedback: Feedback,
        record: LetterAttemptRecord,
    },
    /// Glyph skipped; the lesson moved to the next glyph.
    Skipped { record: LetterAttemptRecord },
    /// Every glyph is done. Nothing was recorded.
    Finished,
}

/// One play-through of a stage: capture, evaluate, gate, record, advance.
pub struct Lesson {
    config: TraceConfig,
    tolerance: f32,
    glyphs: Vec<GlyphDescriptor>,
    index: usize,
    center: Point,
    reference: Vec<Point>,
    capture: StrokeCapture,
    round: LetterRound,
    session: ScoreSession,
}

impl Lesson {
    /// Lesson over an explicit glyph list, centred on `center`. The first
    /// glyph's timer starts at `now_ms`.
    pub fn new(
        config: TraceConfig,
        glyphs: Vec<GlyphDescriptor>,
        center: Point,
        now_ms: f64,
    ) -> ConfigResult<Self> {
        config.validate()?;
        let tolerance = config.effective_tolerance()?;
        let capture_config = config.capture_config();
        let region = Rect::around(center, config.letter_size, capture_config.region_margin);

        let mut lesson = Self {
            tolerance,
            glyphs,
            index: 0,
            center,
            reference: Vec::new(),
            capture: StrokeCapture::new(capture_config).with_region(region),
            round: LetterRound::new(config.accuracy_threshold, config.max_attempts, now_ms),
            session: ScoreSession::new(config.difficulty.score_multiplier()),
            config,
        };
        lesson.load_current(now_ms);
        Ok(lesson)
    }

    /// Lesson over every glyph of `stage_id` in `catalog`.
    pub fn for_stage(
        config: TraceConfig,
        catalog: &GlyphCatalog,
        stage_id: u32,
        center: Point,
        now_ms: f64,
    ) -> ConfigResult<Self> {
        let glyphs: Vec<GlyphDescriptor> = catalog.stage(stage_id).into_iter().cloned().collect();
        if glyphs.is_empty() {
            log::warn!("Lesson: stage {stage_id} has no glyphs");
            return Err(ConfigError::UnknownStage(stage_id));
        }
        Self::new(config, glyphs, center, now_ms)
    }

    /// Restart from the first glyph with a fresh session.
    pub fn start(&mut self, now_ms: f64) {
        self.index = 0;
        self.session.reset(self.config.difficulty.score_multiplier());
        self.load_current(now_ms);
        log::info!(
            "Lesson started: {} glyphs, difficulty {}, tolerance {}",
            self.glyphs.len(),
            self.config.difficulty.name(),
            self.tolerance
        );
    }

    fn load_current(&mut self, now_ms: f64) {
        self.capture.clear();
        self.round = LetterRound::new(self.config.accuracy_threshold, self.config.max_attempts, now_ms);
        self.reference = match self.glyphs.get(self.index) {
            Some(glyph) => generate_reference_path(&glyph.symbol, self.center, self.config.letter_size),
            None => Vec::new(),
        };
    }

    fn advance(&mut self, now_ms: f64) {
        self.index += 1;
        self.load_current(now_ms);
        if self.is_finished() {
            log::info!("Lesson finished: {}%", self.session.session_percentage());
        }
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Effective matching radius used for every evaluation.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn current(&self) -> Option<&GlyphDescriptor> {
        self.glyphs.get(self.index)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.glyphs.len()
    }

    /// Reference path of the current glyph (empty once finished).
    pub fn reference_path(&self) -> &[Point] {
        &self.reference
    }

    pub fn capture(&self) -> &StrokeCapture {
        &self.capture
    }

    pub fn round(&self) -> &LetterRound {
        &self.round
    }

    pub fn session(&self) -> &ScoreSession {
        &self.session
    }

    /// Feed every pending event to the stroke capture.
    pub fn handle_input(&mut self, input: &InputQueue) {
        if self.is_finished() {
            return;
        }
        for event in input.iter() {
            self.capture.handle(event);
        }
    }

    /// Erase the strokes of the current attempt.
    pub fn clear(&mut self) {
        self.capture.clear();
    }

    /// Score the captured strokes and gate progression.
    pub fn submit(&mut self, now_ms: f64) -> LessonStep {
        if self.is_finished() {
            return LessonStep::Finished;
        }

        let strokes = self.capture.snapshot();
        let result = evaluate_trace(&strokes, &self.reference, self.tolerance, self.config.child_friendly);
        let feedback = feedback_for(&result);

        match self.round.submit(result.overall as f32) {
            RoundOutcome::Retry { remaining, .. } => {
                self.capture.clear();
                LessonStep::Retry { feedback, remaining }
            }
            RoundOutcome::Passed { accuracy, attempts_used } => {
                let record = self.record(accuracy, attempts_used, now_ms, false);
                self.advance(now_ms);
                LessonStep::Passed { feedback, record }
            }
            RoundOutcome::Exhausted { accuracy, attempts_used } => {
                let record = self.record(accuracy, attempts_used, now_ms, false);
                self.advance(now_ms);
                LessonStep::Exhausted { feedback, record }
            }
            RoundOutcome::Ignored => LessonStep::Finished,
        }
    }

    /// Give up on the current glyph.
    pub fn skip(&mut self, now_ms: f64) -> LessonStep {
        if self.is_finished() || !self.round.skip() {
            return LessonStep::Finished;
        }
        let record = self.record(0.0, 0, now_ms, true);
        self.advance(now_ms);
        LessonStep::Skipped { record }
    }

    fn record(&mut self, accuracy: f32, attempts_used: u32, now_ms: f64, skipped: bool) -> LetterAttemptRecord {
        let elapsed = self.round.elapsed_ms(now_ms);
        self.session.record(self.index, accuracy, attempts_used, elapsed, skipped)
    }

    pub fn statistics(&self) -> SessionStatistics {
        self.session.session_statistics()
    }

    pub fn report(&self) -> SessionReport {
        self.session.report()
    }
}
