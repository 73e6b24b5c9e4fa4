use serde::{Deserialize, Serialize};

/// Elapsed time at or under which the full speed bonus is earned.
pub const FAST_TIME_MS: u64 = 15_000;
/// Elapsed time at or over which no speed bonus is earned.
pub const SLOW_TIME_MS: u64 = 60_000;
pub const MAX_SPEED_BONUS: u32 = 10;
/// Accuracy counted as a perfect letter.
pub const PERFECT_ACCURACY: f32 = 95.0;

/// Bonus points folded into one letter's score, before the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BonusBreakdown {
    pub attempt: u32,
    pub speed: u32,
    pub accuracy: u32,
    /// Points added (or removed) by the difficulty multiplier.
    pub difficulty: i32,
}

impl BonusBreakdown {
    pub fn total(&self) -> i64 {
        self.attempt as i64 + self.speed as i64 + self.accuracy as i64 + self.difficulty as i64
    }
}

/// Outcome for one glyph. Created once and never changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterAttemptRecord {
    pub glyph_index: usize,
    pub accuracy: f32,
    pub attempts_used: u32,
    pub elapsed_ms: u64,
    pub skipped: bool,
    pub final_score: u32,
    pub difficulty_multiplier: f32,
    pub bonus: BonusBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Excellent,
    Great,
    Good,
    Fair,
    KeepPracticing,
}

impl PerformanceLevel {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => PerformanceLevel::Excellent,
            80..=89 => PerformanceLevel::Great,
            70..=79 => PerformanceLevel::Good,
            60..=69 => PerformanceLevel::Fair,
            _ => PerformanceLevel::KeepPracticing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::Great => "Great",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::Fair => "Fair",
            PerformanceLevel::KeepPracticing => "Keep Practicing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    PerfectScore,
    SpeedDemon,
    FirstTryMaster,
    Perfectionist,
    PersistentLearner,
    HardModeHero,
}

impl Achievement {
    pub fn name(self) -> &'static str {
        match self {
            Achievement::PerfectScore => "Perfect Score!",
            Achievement::SpeedDemon => "Speed Demon",
            Achievement::FirstTryMaster => "First Try Master",
            Achievement::Perfectionist => "Perfectionist",
            Achievement::PersistentLearner => "Persistent Learner",
            Achievement::HardModeHero => "Hard Mode Hero",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::PerfectScore => "Achieved 100% accuracy",
            Achievement::SpeedDemon => "Fast letter completion",
            Achievement::FirstTryMaster => "Most letters correct on first try",
            Achievement::Perfectionist => "High accuracy on most letters",
            Achievement::PersistentLearner => "Completed all letters without skipping",
            Achievement::HardModeHero => "Great performance on hard difficulty",
        }
    }

    pub fn rarity(self) -> Rarity {
        match self {
            Achievement::PerfectScore => Rarity::Legendary,
            Achievement::FirstTryMaster | Achievement::HardModeHero => Rarity::Epic,
            Achievement::SpeedDemon | Achievement::Perfectionist => Rarity::Rare,
            Achievement::PersistentLearner => Rarity::Common,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    PracticeBasics,
    ConfidenceBuilding,
    ObservationPractice,
    AdvanceLevel,
}

impl Recommendation {
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::PracticeBasics => {
                "Try using easier difficulty or practice tracing shapes first"
            }
            Recommendation::ConfidenceBuilding => {
                "Take your time, but try to trace more confidently"
            }
            Recommendation::ObservationPractice => {
                "Focus on the letter shape before starting to trace"
            }
            Recommendation::AdvanceLevel => "Ready for the next stage or higher difficulty!",
        }
    }
}

/// Aggregates derived from a session's records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatistics {
    pub total_score: u64,
    pub final_percentage: u32,
    pub total_letters: usize,
    pub completed_letters: usize,
    pub skipped_letters: usize,

    pub total_time_ms: u64,
    pub average_time_ms: u64,
    pub fastest_ms: Option<u64>,
    pub slowest_ms: Option<u64>,

    /// Mean accuracy of non-skipped letters, rounded.
    pub average_accuracy: u32,
    pub best_accuracy: Option<f32>,
    pub worst_accuracy: Option<f32>,
    pub perfect_letters: usize,

    pub total_attempts: u64,
    pub average_attempts: f32,
    pub first_try_successes: usize,

    pub performance_level: PerformanceLevel,
    pub achievements: Vec<Achievement>,
    pub recommendations: Vec<Recommendation>,
    pub bonus_points: i64,
}

impl SessionStatistics {
    fn achievements(&self, min_multiplier: f32) -> Vec<Achievement> {
        let mut out = Vec::new();
        if self.completed_letters == 0 {
            return out;
        }
        let completed = self.completed_letters as f32;

        if self.final_percentage == 100 {
            out.push(Achievement::PerfectScore);
        }
        if self.average_time_ms < 20_000 {
            out.push(Achievement::SpeedDemon);
        }
        if self.first_try_successes as f32 >= completed * 0.8 {
            out.push(Achievement::FirstTryMaster);
        }
        if self.perfect_letters as f32 >= completed * 0.5 {
            out.push(Achievement::Perfectionist);
        }
        if self.total_letters >= 12 && self.skipped_letters == 0 {
            out.push(Achievement::PersistentLearner);
        }
        if min_multiplier >= 1.5 && self.final_percentage >= 75 {
            out.push(Achievement::HardModeHero);
        }
        out
    }

    fn recommendations(&self) -> Vec<Recommendation> {
        let mut out = Vec::new();
        if self.total_letters == 0 {
            return out;
        }
        if self.average_accuracy < 70 {
            out.push(Recommendation::PracticeBasics);
        }
        if self.average_time_ms > 45_000 {
            out.push(Recommendation::ConfidenceBuilding);
        }
        if self.average_attempts > 2.5 {
            out.push(Recommendation::ObservationPractice);
        }
        if self.performance_level == PerformanceLevel::Excellent {
            out.push(Recommendation::AdvanceLevel);
        }
        out
    }
}

/// Records plus statistics, for the results screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub records: Vec<LetterAttemptRecord>,
    pub statistics: SessionStatistics,
}

/// Append-only list of letter records for one play-through.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSession {
    records: Vec<LetterAttemptRecord>,
    difficulty_multiplier: f32,
}

impl ScoreSession {
    pub fn new(difficulty_multiplier: f32) -> Self {
        Self {
            records: Vec::with_capacity(32),
            difficulty_multiplier: sanitize_multiplier(difficulty_multiplier),
        }
    }

    /// Start a new session, dropping every record.
    pub fn reset(&mut self, difficulty_multiplier: f32) {
        self.records.clear();
        self.difficulty_multiplier = sanitize_multiplier(difficulty_multiplier);
    }

    /// Multiplier used by [`ScoreSession::record`].
    pub fn difficulty_multiplier(&self) -> f32 {
        self.difficulty_multiplier
    }

    /// Score one glyph and append its record.
    pub fn record_attempt(
        &mut self,
        glyph_index: usize,
        accuracy: f32,
        attempts_used: u32,
        elapsed_ms: u64,
        skipped: bool,
        difficulty_multiplier: f32,
    ) -> LetterAttemptRecord {
        let multiplier = sanitize_multiplier(difficulty_multiplier);
        let (final_score, bonus) = if skipped {
            (0, BonusBreakdown::default())
        } else {
            score_letter(accuracy, attempts_used, elapsed_ms, multiplier)
        };

        let record = LetterAttemptRecord {
            glyph_index,
            accuracy,
            attempts_used,
            elapsed_ms,
            skipped,
            final_score,
            difficulty_multiplier: multiplier,
            bonus,
        };
        log::info!(
            "Letter {glyph_index}: accuracy={accuracy} attempts={attempts_used} time={elapsed_ms}ms skipped={skipped} score={final_score}"
        );
        self.records.push(record.clone());
        record
    }

    /// [`ScoreSession::record_attempt`] with the session's own multiplier.
    pub fn record(
        &mut self,
        glyph_index: usize,
        accuracy: f32,
        attempts_used: u32,
        elapsed_ms: u64,
        skipped: bool,
    ) -> LetterAttemptRecord {
        let multiplier = self.difficulty_multiplier;
        self.record_attempt(glyph_index, accuracy, attempts_used, elapsed_ms, skipped, multiplier)
    }

    pub fn records(&self) -> &[LetterAttemptRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_score(&self) -> u64 {
        self.records
            .iter()
            .map(|r| r.final_score as u64)
            .fold(0, u64::saturating_add)
    }

    /// Share of the attainable score earned, 0-100.
    pub fn session_percentage(&self) -> u32 {
        let possible: f64 = self
            .records
            .iter()
            .map(|r| 100.0 * r.difficulty_multiplier as f64)
            .sum();
        if possible <= 0.0 {
            return 0;
        }
        let earned: f64 = self
            .records
            .iter()
            .filter(|r| !r.skipped)
            .map(|r| r.final_score as f64)
            .sum();
        (earned / possible * 100.0).round().clamp(0.0, 100.0) as u32
    }

    pub fn session_statistics(&self) -> SessionStatistics {
        let records = &self.records;
        let total_letters = records.len();
        let completed: Vec<&LetterAttemptRecord> = records.iter().filter(|r| !r.skipped).collect();
        let completed_letters = completed.len();
        let final_percentage = self.session_percentage();

        let total_time_ms = records.iter().map(|r| r.elapsed_ms).fold(0, u64::saturating_add);
        let average_time_ms = if total_letters == 0 {
            0
        } else {
            (total_time_ms as f64 / total_letters as f64).round() as u64
        };

        let average_accuracy = if completed.is_empty() {
            0
        } else {
            let sum: f64 = completed.iter().map(|r| r.accuracy.max(0.0) as f64).sum();
            (sum / completed_letters as f64).round() as u32
        };

        let total_attempts = records
            .iter()
            .map(|r| r.attempts_used as u64)
            .fold(0, u64::saturating_add);
        let average_attempts = if total_letters == 0 {
            0.0
        } else {
            total_attempts as f32 / total_letters as f32
        };

        let mut stats = SessionStatistics {
            total_score: self.total_score(),
            final_percentage,
            total_letters,
            completed_letters,
            skipped_letters: total_letters - completed_letters,
            total_time_ms,
            average_time_ms,
            fastest_ms: records.iter().map(|r| r.elapsed_ms).min(),
            slowest_ms: records.iter().map(|r| r.elapsed_ms).max(),
            average_accuracy,
            best_accuracy: records.iter().map(|r| r.accuracy).reduce(f32::max),
            worst_accuracy: records.iter().map(|r| r.accuracy).reduce(f32::min),
            perfect_letters: records
                .iter()
                .filter(|r| r.accuracy >= PERFECT_ACCURACY)
                .count(),
            total_attempts,
            average_attempts,
            first_try_successes: records.iter().filter(|r| r.attempts_used == 1).count(),
            performance_level: PerformanceLevel::from_percentage(final_percentage),
            achievements: Vec::new(),
            recommendations: Vec::new(),
            bonus_points: records.iter().map(|r| r.bonus.total()).fold(0, i64::saturating_add),
        };

        let min_multiplier = records
            .iter()
            .map(|r| r.difficulty_multiplier)
            .reduce(f32::min)
            .unwrap_or(self.difficulty_multiplier);
        stats.achievements = stats.achievements(min_multiplier);
        stats.recommendations = stats.recommendations();
        stats
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            records: self.records.clone(),
            statistics: self.session_statistics(),
        }
    }
}

impl Default for ScoreSession {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Attempt bonus: 5 points per attempt saved below four.
pub fn attempt_bonus(attempts_used: u32) -> u32 {
    4u32.saturating_sub(attempts_used) * 5
}

/// Linear falloff from 10 points at 15 s to 0 at 60 s.
pub fn speed_bonus(elapsed_ms: u64) -> u32 {
    if elapsed_ms <= FAST_TIME_MS {
        MAX_SPEED_BONUS
    } else if elapsed_ms >= SLOW_TIME_MS {
        0
    } else {
        let remaining = (SLOW_TIME_MS - elapsed_ms) as f64;
        let window = (SLOW_TIME_MS - FAST_TIME_MS) as f64;
        (MAX_SPEED_BONUS as f64 * remaining / window).round() as u32
    }
}

pub fn accuracy_bonus(accuracy: f32) -> u32 {
    if accuracy >= 95.0 {
        10
    } else if accuracy >= 90.0 {
        5
    } else {
        0
    }
}

fn score_letter(
    accuracy: f32,
    attempts_used: u32,
    elapsed_ms: u64,
    multiplier: f32,
) -> (u32, BonusBreakdown) {
    let mut bonus = BonusBreakdown {
        attempt: attempt_bonus(attempts_used),
        speed: speed_bonus(elapsed_ms),
        accuracy: accuracy_bonus(accuracy),
        difficulty: 0,
    };
    let accuracy = if accuracy.is_finite() { accuracy.max(0.0) } else { 0.0 };
    let base = accuracy + (bonus.attempt + bonus.speed + bonus.accuracy) as f32;
    bonus.difficulty = (base * (multiplier - 1.0)).round() as i32;
    let final_score = (base * multiplier).round().max(0.0) as u32;
    (final_score, bonus)
}

/// Non-finite or non-positive multipliers fall back to 1.0.
fn sanitize_multiplier(multiplier: f32) -> f32 {
    if multiplier.is_finite() && multiplier > 0.0 {
        multiplier
    } else {
        log::warn!("Invalid difficulty multiplier {multiplier}, using 1.0");
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_bonus_boundaries() {
        assert_eq!(attempt_bonus(1), 15);
        assert_eq!(attempt_bonus(3), 5);
        assert_eq!(attempt_bonus(4), 0);
        assert_eq!(attempt_bonus(5), 0);
        assert_eq!(attempt_bonus(0), 20);
    }

    #[test]
    fn speed_bonus_falloff() {
        assert_eq!(speed_bonus(0), 10);
        assert_eq!(speed_bonus(15_000), 10);
        assert_eq!(speed_bonus(37_500), 5);
        assert_eq!(speed_bonus(60_000), 0);
        assert_eq!(speed_bonus(120_000), 0);
    }

    #[test]
    fn skipped_letter_scores_zero() {
        let mut session = ScoreSession::new(1.5);
        let record = session.record(0, 99.0, 1, 1_000, true);
        assert_eq!(record.final_score, 0);
        assert_eq!(record.accuracy, 99.0);
        assert_eq!(record.bonus, BonusBreakdown::default());
    }

    #[test]
    fn full_bonus_letter() {
        let mut session = ScoreSession::default();
        let record = session.record(3, 96.0, 1, 10_000, false);
        // 96 + 15 + 10 + 10
        assert_eq!(record.final_score, 131);
        assert_eq!(record.bonus.total(), 35);
    }

    #[test]
    fn multiplier_scales_final_score() {
        let mut session = ScoreSession::new(1.2);
        let record = session.record(0, 80.0, 4, 60_000, false);
        assert_eq!(record.final_score, 96);
        assert_eq!(record.bonus.difficulty, 16);
    }

    #[test]
    fn session_aggregation() {
        let mut session = ScoreSession::default();
        session.record(0, 80.0, 4, 60_000, false);
        session.record(1, 85.0, 3, 60_000, false);
        session.record(2, 70.0, 4, 60_000, false);
        let scores: Vec<u32> = session.records().iter().map(|r| r.final_score).collect();
        assert_eq!(scores, vec![80, 90, 70]);
        assert_eq!(session.session_percentage(), 80);
    }

    #[test]
    fn percentage_is_capped() {
        let mut session = ScoreSession::default();
        session.record(0, 100.0, 1, 0, false);
        assert_eq!(session.session_percentage(), 100);
        assert!(ScoreSession::default().session_percentage() == 0);
    }

    #[test]
    fn mixed_multipliers_use_per_record_denominator() {
        let mut session = ScoreSession::default();
        session.record_attempt(0, 80.0, 4, 60_000, false, 1.0);
        session.record_attempt(1, 80.0, 4, 60_000, false, 1.5);
        // (80 + 120) / (100 + 150)
        assert_eq!(session.session_percentage(), 80);
    }

    #[test]
    fn invalid_multiplier_falls_back() {
        let mut session = ScoreSession::new(f32::NAN);
        assert_eq!(session.difficulty_multiplier(), 1.0);
        let record = session.record_attempt(0, 50.0, 4, 60_000, false, -2.0);
        assert_eq!(record.difficulty_multiplier, 1.0);
        assert_eq!(record.final_score, 50);
    }

    #[test]
    fn statistics_summary() {
        let mut session = ScoreSession::default();
        session.record(0, 96.0, 1, 10_000, false);
        session.record(1, 60.0, 3, 30_000, false);
        session.record(2, 0.0, 0, 5_000, true);

        let stats = session.session_statistics();
        assert_eq!(stats.total_letters, 3);
        assert_eq!(stats.completed_letters, 2);
        assert_eq!(stats.skipped_letters, 1);
        assert_eq!(stats.average_accuracy, 78);
        assert_eq!(stats.best_accuracy, Some(96.0));
        assert_eq!(stats.worst_accuracy, Some(0.0));
        assert_eq!(stats.perfect_letters, 1);
        assert_eq!(stats.total_attempts, 4);
        assert_eq!(stats.first_try_successes, 1);
        assert_eq!(stats.fastest_ms, Some(5_000));
        assert_eq!(stats.slowest_ms, Some(30_000));
        assert_eq!(stats.average_time_ms, 15_000);
        assert_eq!(stats.total_score, session.total_score());
    }

    #[test]
    fn huge_elapsed_times_saturate() {
        let mut session = ScoreSession::default();
        session.record_attempt(0, 90.0, 1, u64::MAX, false, 1.0);
        session.record_attempt(1, 90.0, 1, 10, false, 1.0);

        let stats = session.session_statistics();
        assert_eq!(stats.total_time_ms, u64::MAX);
        assert_eq!(stats.slowest_ms, Some(u64::MAX));
        assert_eq!(stats.fastest_ms, Some(10));
        assert_eq!(stats.total_attempts, 2);
    }

    #[test]
    fn empty_session_statistics() {
        let stats = ScoreSession::default().session_statistics();
        assert_eq!(stats.final_percentage, 0);
        assert_eq!(stats.average_accuracy, 0);
        assert_eq!(stats.fastest_ms, None);
        assert_eq!(stats.best_accuracy, None);
        assert_eq!(stats.performance_level, PerformanceLevel::KeepPracticing);
        assert!(stats.achievements.is_empty());
        assert!(stats.recommendations.is_empty());
    }

    #[test]
    fn strong_hard_session_earns_achievements() {
        let mut session = ScoreSession::new(1.5);
        for i in 0..12 {
            session.record(i, 98.0, 1, 8_000, false);
        }
        let stats = session.session_statistics();
        assert_eq!(stats.final_percentage, 100);
        assert_eq!(stats.performance_level, PerformanceLevel::Excellent);
        for a in [
            Achievement::PerfectScore,
            Achievement::SpeedDemon,
            Achievement::FirstTryMaster,
            Achievement::Perfectionist,
            Achievement::PersistentLearner,
            Achievement::HardModeHero,
        ] {
            assert!(stats.achievements.contains(&a), "missing {}", a.name());
        }
        assert_eq!(stats.recommendations, vec![Recommendation::AdvanceLevel]);
    }

    #[test]
    fn weak_session_gets_recommendations() {
        let mut session = ScoreSession::default();
        session.record(0, 40.0, 3, 50_000, false);
        session.record(1, 50.0, 3, 55_000, false);
        let stats = session.session_statistics();
        assert_eq!(
            stats.recommendations,
            vec![
                Recommendation::PracticeBasics,
                Recommendation::ConfidenceBuilding,
                Recommendation::ObservationPractice,
            ]
        );
        assert!(stats.achievements.is_empty());
    }

    #[test]
    fn reset_starts_fresh() {
        let mut session = ScoreSession::default();
        session.record(0, 90.0, 1, 1_000, false);
        session.reset(1.2);
        assert!(session.is_empty());
        assert_eq!(session.difficulty_multiplier(), 1.2);
        assert_eq!(session.session_percentage(), 0);
    }

    #[test]
    fn performance_levels() {
        assert_eq!(PerformanceLevel::from_percentage(90), PerformanceLevel::Excellent);
        assert_eq!(PerformanceLevel::from_percentage(89), PerformanceLevel::Great);
        assert_eq!(PerformanceLevel::from_percentage(70), PerformanceLevel::Good);
        assert_eq!(PerformanceLevel::from_percentage(60), PerformanceLevel::Fair);
        assert_eq!(PerformanceLevel::from_percentage(59), PerformanceLevel::KeepPracticing);
    }
}
