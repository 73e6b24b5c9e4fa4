use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Tolerance boost applied in child-friendly mode unless configured otherwise.
pub const DEFAULT_CHILD_FRIENDLY_BOOST: f32 = 1.5;

/// Difficulty level chosen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// Thick outline, direction arrows, widest tolerance.
    #[default]
    Easy,
    /// Thin outline, start dot only.
    Medium,
    /// Letter flashed briefly, start dot only.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Base matching radius in display pixels.
    pub fn base_tolerance(self) -> f32 {
        match self {
            Difficulty::Easy => 20.0,
            Difficulty::Medium => 15.0,
            Difficulty::Hard => 10.0,
        }
    }

    /// Outline stroke width the UI draws under the trace (0 = hidden).
    pub fn outline_width(self) -> f32 {
        match self {
            Difficulty::Easy => 8.0,
            Difficulty::Medium => 4.0,
            Difficulty::Hard => 0.0,
        }
    }

    pub fn shows_direction_arrows(self) -> bool {
        matches!(self, Difficulty::Easy)
    }

    /// Multiplier applied to every per-letter score.
    pub fn score_multiplier(self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.2,
            Difficulty::Hard => 1.5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Matching radius settings, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToleranceConfig {
    base_radius: f32,
    child_friendly_boost: f32,
}

impl ToleranceConfig {
    pub fn new(base_radius: f32, child_friendly_boost: f32) -> ConfigResult<Self> {
        if !base_radius.is_finite() || base_radius <= 0.0 {
            return Err(ConfigError::InvalidTolerance(format!(
                "base radius must be positive and finite, got {base_radius}"
            )));
        }
        if !child_friendly_boost.is_finite() || child_friendly_boost < 1.0 {
            return Err(ConfigError::InvalidTolerance(format!(
                "child-friendly boost must be finite and >= 1, got {child_friendly_boost}"
            )));
        }
        Ok(Self {
            base_radius,
            child_friendly_boost,
        })
    }

    /// Tolerance for a difficulty level with the default boost.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            base_radius: difficulty.base_tolerance(),
            child_friendly_boost: DEFAULT_CHILD_FRIENDLY_BOOST,
        }
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn child_friendly_boost(&self) -> f32 {
        self.child_friendly_boost
    }

    /// Radius handed to the evaluator.
    pub fn effective_radius(&self, child_friendly: bool) -> f32 {
        if child_friendly {
            self.base_radius * self.child_friendly_boost
        } else {
            self.base_radius
        }
    }
}

/// Pointer capture tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Samples closer than this to the previous point are skipped (jitter filter).
    pub min_point_distance: f32,
    /// Fraction of the way each point moves from the previous point toward the raw
    /// sample. 1.0 disables smoothing.
    pub smoothing: f32,
    /// Extra margin around the glyph box where drawing is still accepted.
    pub region_margin: f32,
}

impl CaptureConfig {
    pub fn child_friendly() -> Self {
        Self {
            min_point_distance: 5.0,
            smoothing: 0.8,
            region_margin: 60.0,
        }
    }

    pub fn standard() -> Self {
        Self {
            min_point_distance: 2.0,
            smoothing: 0.5,
            region_margin: 60.0,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.min_point_distance.is_finite() || self.min_point_distance < 0.0 {
            return Err(ConfigError::InvalidCapture(format!(
                "min point distance must be >= 0, got {}",
                self.min_point_distance
            )));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::InvalidCapture(format!(
                "smoothing must lie in (0, 1], got {}",
                self.smoothing
            )));
        }
        if !self.region_margin.is_finite() || self.region_margin < 0.0 {
            return Err(ConfigError::InvalidCapture(format!(
                "region margin must be >= 0, got {}",
                self.region_margin
            )));
        }
        Ok(())
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self::child_friendly()
    }
}

/// Gameplay configuration for a tracing lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Accuracy (0-100) needed to pass a letter (default: 80).
    pub accuracy_threshold: f32,
    /// Attempts allowed per letter before moving on (default: 3).
    pub max_attempts: u32,
    /// Selected difficulty (default: Easy).
    pub difficulty: Difficulty,
    /// Lenient matching and weighting for young learners (default: on).
    pub child_friendly: bool,
    /// Tolerance multiplier used when `child_friendly` is set (default: 1.5).
    pub child_friendly_boost: f32,
    /// Overrides the difficulty's base tolerance when set.
    pub base_tolerance: Option<f32>,
    /// Linear size of the glyph box in display pixels (default: 200).
    pub letter_size: f32,
    /// Pointer capture tuning. Defaults follow `child_friendly`.
    pub capture: Option<CaptureConfig>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            accuracy_threshold: 80.0,
            max_attempts: 3,
            difficulty: Difficulty::Easy,
            child_friendly: true,
            child_friendly_boost: DEFAULT_CHILD_FRIENDLY_BOOST,
            base_tolerance: None,
            letter_size: 200.0,
            capture: None,
        }
    }
}

impl TraceConfig {
    /// Parse and validate a config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            log::warn!("Rejected trace config: {e}");
            return Err(e);
        }
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=100.0).contains(&self.accuracy_threshold) {
            return Err(ConfigError::InvalidThreshold(self.accuracy_threshold));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidAttempts);
        }
        if !self.letter_size.is_finite() || self.letter_size <= 0.0 {
            return Err(ConfigError::InvalidLetterSize(self.letter_size));
        }
        self.tolerance()?;
        self.capture_config().validate()
    }

    pub fn tolerance(&self) -> ConfigResult<ToleranceConfig> {
        let base = self
            .base_tolerance
            .unwrap_or_else(|| self.difficulty.base_tolerance());
        ToleranceConfig::new(base, self.child_friendly_boost)
    }

    /// Effective matching radius for the evaluator.
    pub fn effective_tolerance(&self) -> ConfigResult<f32> {
        Ok(self.tolerance()?.effective_radius(self.child_friendly))
    }

    pub fn capture_config(&self) -> CaptureConfig {
        self.capture.unwrap_or_else(|| {
            if self.child_friendly {
                CaptureConfig::child_friendly()
            } else {
                CaptureConfig::standard()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_radius_applies_boost_only_in_child_mode() {
        let t = ToleranceConfig::new(10.0, 1.5).unwrap();
        assert_eq!(t.effective_radius(true), 15.0);
        assert_eq!(t.effective_radius(false), 10.0);
    }

    #[test]
    fn tolerance_rejects_bad_values() {
        assert!(ToleranceConfig::new(0.0, 1.5).is_err());
        assert!(ToleranceConfig::new(-3.0, 1.5).is_err());
        assert!(ToleranceConfig::new(f32::NAN, 1.5).is_err());
        assert!(ToleranceConfig::new(10.0, 0.5).is_err());
        assert!(ToleranceConfig::new(10.0, f32::INFINITY).is_err());
    }

    #[test]
    fn difficulty_table() {
        assert_eq!(Difficulty::Easy.base_tolerance(), 20.0);
        assert_eq!(Difficulty::Hard.score_multiplier(), 1.5);
        assert!(Difficulty::Easy.shows_direction_arrows());
        assert!(!Difficulty::Medium.shows_direction_arrows());
        assert_eq!(Difficulty::Hard.outline_width(), 0.0);
    }

    #[test]
    fn parse_partial_config() {
        let json = r#"{ "difficulty": "HARD", "child_friendly": false, "max_attempts": 5 }"#;
        let config = TraceConfig::from_json(json).unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.accuracy_threshold, 80.0);
        assert_eq!(config.effective_tolerance().unwrap(), 10.0);
        assert_eq!(config.capture_config(), CaptureConfig::standard());
    }

    #[test]
    fn default_config_is_valid() {
        let config = TraceConfig::default();
        config.validate().unwrap();
        assert_eq!(config.effective_tolerance().unwrap(), 30.0);
    }

    #[test]
    fn invalid_config_rejected() {
        assert!(matches!(
            TraceConfig::from_json(r#"{ "accuracy_threshold": 120 }"#),
            Err(ConfigError::InvalidThreshold(_))
        ));
        assert!(matches!(
            TraceConfig::from_json(r#"{ "max_attempts": 0 }"#),
            Err(ConfigError::InvalidAttempts)
        ));
        assert!(matches!(
            TraceConfig::from_json(r#"{ "base_tolerance": -1 }"#),
            Err(ConfigError::InvalidTolerance(_))
        ));
        assert!(matches!(
            TraceConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
