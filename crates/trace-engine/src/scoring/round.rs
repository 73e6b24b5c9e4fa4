use serde::{Deserialize, Serialize};

/// State of the gate for the current glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for an attempt.
    Active,
    /// Threshold reached.
    Passed,
    /// Attempt budget used up.
    Exhausted,
    /// Player skipped the glyph.
    Skipped,
}

/// Result of submitting one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Accuracy met the threshold.
    Passed { accuracy: f32, attempts_used: u32 },
    /// Below threshold, attempts remain.
    Retry { accuracy: f32, remaining: u32 },
    /// Below threshold on the last attempt.
    Exhausted { accuracy: f32, attempts_used: u32 },
    /// The round is already finished.
    Ignored,
}

impl RoundOutcome {
    /// True when the lesson should record the glyph and move on.
    pub fn is_final(&self) -> bool {
        matches!(self, RoundOutcome::Passed { .. } | RoundOutcome::Exhausted { .. })
    }
}

/// Accuracy threshold and attempt budget for one glyph.
#[derive(Debug, Clone)]
pub struct LetterRound {
    threshold: f32,
    max_attempts: u32,
    remaining: u32,
    state: RoundState,
    started_ms: f64,
}

impl LetterRound {
    /// `max_attempts` of 0 is treated as 1.
    pub fn new(threshold: f32, max_attempts: u32, now_ms: f64) -> Self {
        let max_attempts = max_attempts.max(1);
        Self {
            threshold,
            max_attempts,
            remaining: max_attempts,
            state: RoundState::Active,
            started_ms: now_ms,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_finished(&self) -> bool {
        self.state != RoundState::Active
    }

    /// Milliseconds since the round started, never negative.
    pub fn elapsed_ms(&self, now_ms: f64) -> u64 {
        let elapsed = now_ms - self.started_ms;
        if elapsed.is_finite() && elapsed > 0.0 {
            elapsed.round() as u64
        } else {
            0
        }
    }

    /// Gate one attempt.
    pub fn submit(&mut self, accuracy: f32) -> RoundOutcome {
        if self.is_finished() {
            return RoundOutcome::Ignored;
        }

        if accuracy >= self.threshold {
            self.state = RoundState::Passed;
            return RoundOutcome::Passed {
                accuracy,
                attempts_used: self.max_attempts - self.remaining + 1,
            };
        }

        self.remaining -= 1;
        if self.remaining > 0 {
            RoundOutcome::Retry {
                accuracy,
                remaining: self.remaining,
            }
        } else {
            self.state = RoundState::Exhausted;
            RoundOutcome::Exhausted {
                accuracy,
                attempts_used: self.max_attempts,
            }
        }
    }

    /// Give up on the glyph. Returns false if the round was already over.
    pub fn skip(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.state = RoundState::Skipped;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_on_first_try() {
        let mut round = LetterRound::new(80.0, 3, 0.0);
        assert_eq!(
            round.submit(80.0),
            RoundOutcome::Passed {
                accuracy: 80.0,
                attempts_used: 1
            }
        );
        assert_eq!(round.state(), RoundState::Passed);
        assert_eq!(round.submit(100.0), RoundOutcome::Ignored);
    }

    #[test]
    fn pass_after_retry_counts_attempts() {
        let mut round = LetterRound::new(80.0, 3, 0.0);
        assert_eq!(
            round.submit(50.0),
            RoundOutcome::Retry {
                accuracy: 50.0,
                remaining: 2
            }
        );
        match round.submit(90.0) {
            RoundOutcome::Passed { attempts_used, .. } => assert_eq!(attempts_used, 2),
            other => panic!("expected Passed, got {other:?}"),
        }
    }

    #[test]
    fn exhausts_after_max_attempts() {
        let mut round = LetterRound::new(80.0, 3, 0.0);
        assert!(!round.submit(10.0).is_final());
        assert!(!round.submit(20.0).is_final());
        let outcome = round.submit(30.0);
        assert_eq!(
            outcome,
            RoundOutcome::Exhausted {
                accuracy: 30.0,
                attempts_used: 3
            }
        );
        assert!(outcome.is_final());
        assert_eq!(round.remaining(), 0);
        assert_eq!(round.submit(99.0), RoundOutcome::Ignored);
    }

    #[test]
    fn skip_only_while_active() {
        let mut round = LetterRound::new(80.0, 3, 0.0);
        assert!(round.skip());
        assert_eq!(round.state(), RoundState::Skipped);
        assert!(!round.skip());
        assert_eq!(round.submit(100.0), RoundOutcome::Ignored);
    }

    #[test]
    fn zero_attempt_budget_allows_one() {
        let mut round = LetterRound::new(80.0, 0, 0.0);
        assert_eq!(round.max_attempts(), 1);
        assert!(round.submit(0.0).is_final());
    }

    #[test]
    fn elapsed_is_clamped() {
        let round = LetterRound::new(80.0, 3, 1_000.0);
        assert_eq!(round.elapsed_ms(4_500.0), 3_500);
        assert_eq!(round.elapsed_ms(500.0), 0);
        assert_eq!(round.elapsed_ms(f64::NAN), 0);
    }
}
