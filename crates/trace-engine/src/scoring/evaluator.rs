use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::geometry::{any_within, flatten_strokes, heading_difference, overall_direction, Point, Stroke};

/// Direction score when either path is too short to have a heading.
pub const DEFAULT_DIRECTION_SCORE: f32 = 80.0;
/// Paths with fewer points than this get [`DEFAULT_DIRECTION_SCORE`].
pub const MIN_DIRECTION_POINTS: usize = 3;
/// Start/end matching radius as a multiple of the tolerance radius.
pub const ENDPOINT_RADIUS_FACTOR: f32 = 2.0;

pub const COMPLETION_BOTH: f32 = 100.0;
pub const COMPLETION_ONE: f32 = 70.0;
pub const COMPLETION_NONE: f32 = 40.0;

/// Sub-score weights (coverage, direction, completion).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub coverage: f32,
    pub direction: f32,
    pub completion: f32,
}

impl ScoreWeights {
    /// Coverage-heavy weighting for young learners.
    pub const CHILD_FRIENDLY: ScoreWeights = ScoreWeights {
        coverage: 0.7,
        direction: 0.15,
        completion: 0.15,
    };

    pub const STANDARD: ScoreWeights = ScoreWeights {
        coverage: 0.8,
        direction: 0.1,
        completion: 0.1,
    };

    pub fn for_mode(child_friendly: bool) -> Self {
        if child_friendly {
            Self::CHILD_FRIENDLY
        } else {
            Self::STANDARD
        }
    }

    fn combine(&self, coverage: f32, direction: f32, completion: f32) -> f32 {
        coverage * self.coverage + direction * self.direction + completion * self.completion
    }
}

/// Scores for one trace attempt. Every field lies in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccuracyResult {
    /// Share of reference points matched by the trace.
    pub coverage: f32,
    /// Agreement of the overall first-to-last heading.
    pub direction: f32,
    /// Whether the trace reached the reference start and end.
    pub completion: f32,
    /// Weighted, rounded and clamped combination of the above.
    pub overall: u32,
}

impl AccuracyResult {
    /// Result for an attempt with nothing to score.
    pub const ZERO: AccuracyResult = AccuracyResult {
        coverage: 0.0,
        direction: 0.0,
        completion: 0.0,
        overall: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Score a multi-stroke trace against a reference path.
///
/// `tolerance` is the already-boosted matching radius. `child_friendly`
/// only selects the weighting. Never fails: empty or degenerate input
/// produces [`AccuracyResult::ZERO`].
pub fn evaluate_trace(
    strokes: &[Stroke],
    reference: &[Point],
    tolerance: f32,
    child_friendly: bool,
) -> AccuracyResult {
    let drawn = flatten_strokes(strokes);
    if drawn.is_empty() || reference.is_empty() {
        log::debug!(
            "evaluate_trace: nothing to score ({} drawn, {} reference)",
            drawn.len(),
            reference.len()
        );
        return AccuracyResult::ZERO;
    }

    let coverage = coverage_score(&drawn, reference, tolerance);
    let direction = direction_score(&drawn, reference);
    let completion = completion_score(&drawn, reference, tolerance);
    let overall = combine(ScoreWeights::for_mode(child_friendly), coverage, direction, completion);

    log::debug!(
        "evaluate_trace: coverage={coverage:.1} direction={direction:.1} completion={completion} overall={overall}"
    );

    AccuracyResult {
        coverage,
        direction,
        completion,
        overall,
    }
}

/// Percentage of reference points with a drawn point within `tolerance`.
pub fn coverage_score(drawn: &[Point], reference: &[Point], tolerance: f32) -> f32 {
    if reference.is_empty() {
        return 0.0;
    }
    let covered = reference
        .iter()
        .filter(|&&r| any_within(drawn, r, tolerance))
        .count();
    (covered as f32 / reference.len() as f32 * 100.0).clamp(0.0, 100.0)
}

/// Heading agreement of the first-to-last vectors of both paths.
pub fn direction_score(drawn: &[Point], reference: &[Point]) -> f32 {
    if drawn.len() < MIN_DIRECTION_POINTS || reference.len() < MIN_DIRECTION_POINTS {
        return DEFAULT_DIRECTION_SCORE;
    }
    let diff = heading_difference(overall_direction(drawn), overall_direction(reference));
    (100.0 - diff / PI * 100.0).clamp(0.0, 100.0)
}

/// 100 when the trace touches both reference endpoints, 70 for one, 40 for neither.
pub fn completion_score(drawn: &[Point], reference: &[Point], tolerance: f32) -> f32 {
    let (Some(&start), Some(&end)) = (reference.first(), reference.last()) else {
        return 0.0;
    };
    let radius = tolerance * ENDPOINT_RADIUS_FACTOR;
    match (any_within(drawn, start, radius), any_within(drawn, end, radius)) {
        (true, true) => COMPLETION_BOTH,
        (true, false) | (false, true) => COMPLETION_ONE,
        (false, false) => COMPLETION_NONE,
    }
}

fn combine(weights: ScoreWeights, coverage: f32, direction: f32, completion: f32) -> u32 {
    let raw = weights.combine(coverage, direction, completion);
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u32
}
