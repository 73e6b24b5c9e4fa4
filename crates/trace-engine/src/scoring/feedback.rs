use serde::{Deserialize, Serialize};

use super::evaluator::AccuracyResult;

/// Sub-scores below this earn a suggestion.
pub const SUGGESTION_THRESHOLD: f32 = 60.0;

/// A hint shown to the player after an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    /// Nothing scorable was drawn.
    StartTracing,
    StayOnPath,
    FollowArrows,
    StartAndFinish,
    Encouragement,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::StartTracing => "Start at the green dot and follow the outline",
            Suggestion::StayOnPath => "Try to stay closer to the outlined path",
            Suggestion::FollowArrows => "Follow the direction arrows for better tracing",
            Suggestion::StartAndFinish => "Make sure to start and finish at the right places",
            Suggestion::Encouragement => "Great job! Your tracing is improving!",
        }
    }
}

/// An attempt's scores with the hints derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(flatten)]
    pub result: AccuracyResult,
    pub suggestions: Vec<Suggestion>,
}

impl Feedback {
    pub fn messages(&self) -> Vec<&'static str> {
        self.suggestions.iter().map(|s| s.message()).collect()
    }
}

/// Build the suggestion list for an evaluated attempt.
pub fn feedback_for(result: &AccuracyResult) -> Feedback {
    let mut suggestions = Vec::with_capacity(3);

    if result.is_zero() {
        suggestions.push(Suggestion::StartTracing);
    } else {
        if result.coverage < SUGGESTION_THRESHOLD {
            suggestions.push(Suggestion::StayOnPath);
        }
        if result.direction < SUGGESTION_THRESHOLD {
            suggestions.push(Suggestion::FollowArrows);
        }
        if result.completion < SUGGESTION_THRESHOLD {
            suggestions.push(Suggestion::StartAndFinish);
        }
        if suggestions.is_empty() {
            suggestions.push(Suggestion::Encouragement);
        }
    }

    Feedback {
        result: *result,
        suggestions,
    }
}
