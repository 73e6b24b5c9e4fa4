use std::collections::HashMap;
use std::sync::OnceLock;

use crate::core::geometry::Point;

use super::latin::LATIN_TEMPLATES;
use super::shapes::{circle, sample_template, Segment};
use super::tamil::TAMIL_TEMPLATES;

/// Fallback circle radius as a fraction of the letter size.
pub const FALLBACK_RADIUS_FACTOR: f32 = 0.3;
/// Segments in the fallback circle (`FALLBACK_STEPS + 1` samples).
pub const FALLBACK_STEPS: u32 = 50;

/// Maps glyph symbols to their parametric path templates.
pub struct PathRegistry {
    templates: HashMap<&'static str, &'static [Segment]>,
}

impl PathRegistry {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Registry with every built-in Tamil and Latin template.
    pub fn builtin() -> &'static PathRegistry {
        static REGISTRY: OnceLock<PathRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let mut registry = PathRegistry::new();
            for &(symbol, segments) in TAMIL_TEMPLATES.iter().chain(LATIN_TEMPLATES) {
                registry.register(symbol, segments);
            }
            log::debug!("PathRegistry: {} templates registered", registry.len());
            registry
        })
    }

    /// Register (or replace) the template for `symbol`.
    pub fn register(&mut self, symbol: &'static str, segments: &'static [Segment]) {
        if segments.is_empty() {
            log::warn!("PathRegistry: ignoring empty template for '{symbol}'");
            return;
        }
        self.templates.insert(symbol, segments);
    }

    pub fn get(&self, symbol: &str) -> Option<&'static [Segment]> {
        self.templates.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.templates.contains_key(symbol)
    }

    /// Modeled symbols, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Sample the path for `symbol` at `center`, scaled to `size`.
    ///
    /// Unmodeled symbols get a closed circle of radius `size * 0.3`.
    pub fn generate(&self, symbol: &str, center: Point, size: f32) -> Vec<Point> {
        match self.get(symbol) {
            Some(segments) => sample_template(segments, center, size),
            None => {
                log::warn!("No reference path for '{symbol}', using circle fallback");
                fallback_path(center, size)
            }
        }
    }
}

impl Default for PathRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Closed circle used for glyphs without a template.
pub fn fallback_path(center: Point, size: f32) -> Vec<Point> {
    circle(center, size * FALLBACK_RADIUS_FACTOR, FALLBACK_STEPS)
}

/// Reference path for `symbol` from the built-in registry.
pub fn generate_reference_path(symbol: &str, center: Point, size: f32) -> Vec<Point> {
    PathRegistry::builtin().generate(symbol, center, size)
}
