pub mod api;
pub mod core;
pub mod glyphs;
pub mod input;
pub mod scoring;

// Re-export key types at crate root for convenience
pub use api::lesson::{Lesson, LessonStep};
pub use core::config::{CaptureConfig, Difficulty, ToleranceConfig, TraceConfig};
pub use core::error::{ConfigError, ConfigResult};
pub use core::geometry::{Point, Rect, Stroke};
pub use glyphs::catalog::{GlyphCatalog, GlyphDescriptor, Script, StageInfo};
pub use glyphs::registry::{generate_reference_path, PathRegistry};
pub use input::capture::{CaptureResult, CaptureState, StrokeCapture};
pub use input::queue::{InputEvent, InputQueue};
pub use scoring::evaluator::{evaluate_trace, AccuracyResult};
pub use scoring::feedback::{feedback_for, Feedback, Suggestion};
pub use scoring::round::{LetterRound, RoundOutcome, RoundState};
pub use scoring::session::{
    Achievement, BonusBreakdown, LetterAttemptRecord, PerformanceLevel, Recommendation,
    ScoreSession, SessionReport, SessionStatistics,
};
