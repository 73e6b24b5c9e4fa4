use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigError, ConfigResult};

/// Writing system a stage teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Tamil,
    Latin,
}

/// One teachable glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphDescriptor {
    pub symbol: String,
    pub transliteration: String,
    #[serde(default)]
    pub pronunciation: String,
    pub stage_id: u32,
    /// 1 (easiest) to 3.
    pub difficulty: u8,
}

/// A named group of glyphs played as one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInfo {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub script: Script,
}

/// Stage ids of the built-in catalog.
pub const STAGE_UYIR: u32 = 1;
pub const STAGE_MEI: u32 = 2;
pub const STAGE_UYIRMEI_KA: u32 = 3;
pub const STAGE_LATIN_CAPITAL: u32 = 4;
pub const STAGE_LATIN_SMALL: u32 = 5;

// (symbol, transliteration, pronunciation, difficulty)
type Row = (&'static str, &'static str, &'static str, u8);

const UYIR: &[Row] = &[
    ("அ", "a", "ah", 1),
    ("ஆ", "aa", "aah", 1),
    ("இ", "i", "i", 1),
    ("ஈ", "ii", "ee", 1),
    ("உ", "u", "u", 1),
    ("ஊ", "uu", "oo", 1),
    ("எ", "e", "e", 2),
    ("ஏ", "ee", "ey", 2),
    ("ஐ", "ai", "ai", 2),
    ("ஒ", "o", "o", 2),
    ("ஓ", "oo", "oh", 2),
    ("ஔ", "au", "au", 3),
];

const MEI: &[Row] = &[
    ("க்", "k", "k", 2),
    ("ங்", "ng", "ng", 3),
    ("ச்", "ch", "ch", 2),
    ("ஞ்", "nj", "nj", 3),
    ("ட்", "t", "t", 2),
    ("ண்", "n", "n", 2),
    ("த்", "th", "th", 2),
    ("ந்", "n", "n", 2),
    ("ப்", "p", "p", 2),
    ("ம்", "m", "m", 2),
    ("ய்", "y", "y", 2),
    ("ர்", "r", "r", 2),
    ("ல்", "l", "l", 2),
    ("வ்", "v", "v", 2),
    ("ழ்", "zh", "zh", 3),
    ("ள்", "l", "l", 3),
    ("ற்", "r", "r", 3),
    ("ன்", "n", "n", 2),
];

const UYIRMEI_KA: &[Row] = &[
    ("க", "ka", "ka", 2),
    ("கா", "kaa", "kaa", 2),
    ("கி", "ki", "ki", 2),
    ("கீ", "kii", "kee", 2),
    ("கு", "ku", "ku", 2),
    ("கூ", "kuu", "koo", 2),
    ("கெ", "ke", "ke", 3),
    ("கே", "kee", "key", 3),
    ("கை", "kai", "kai", 3),
    ("கொ", "ko", "ko", 3),
    ("கோ", "koo", "koh", 3),
    ("கௌ", "kau", "kau", 3),
];

/// Ordered catalog of stages and their glyphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlyphCatalog {
    pub stages: Vec<StageInfo>,
    pub glyphs: Vec<GlyphDescriptor>,
}

impl GlyphCatalog {
    /// The built-in Tamil and Latin catalog.
    pub fn builtin() -> &'static GlyphCatalog {
        static CATALOG: OnceLock<GlyphCatalog> = OnceLock::new();
        CATALOG.get_or_init(build_builtin)
    }

    /// Parse a custom catalog from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        for glyph in &catalog.glyphs {
            if catalog.stage_info(glyph.stage_id).is_none() {
                return Err(ConfigError::UnknownStage(glyph.stage_id));
            }
        }
        Ok(catalog)
    }

    pub fn stage_info(&self, stage_id: u32) -> Option<&StageInfo> {
        self.stages.iter().find(|s| s.id == stage_id)
    }

    /// Glyphs of one stage in teaching order.
    pub fn stage(&self, stage_id: u32) -> Vec<&GlyphDescriptor> {
        self.glyphs.iter().filter(|g| g.stage_id == stage_id).collect()
    }

    pub fn by_difficulty(&self, difficulty: u8) -> Vec<&GlyphDescriptor> {
        self.glyphs
            .iter()
            .filter(|g| g.difficulty == difficulty)
            .collect()
    }

    pub fn by_script(&self, script: Script) -> Vec<&GlyphDescriptor> {
        self.glyphs
            .iter()
            .filter(|g| self.stage_info(g.stage_id).map(|s| s.script) == Some(script))
            .collect()
    }

    pub fn find(&self, symbol: &str) -> Option<&GlyphDescriptor> {
        self.glyphs.iter().find(|g| g.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

fn build_builtin() -> GlyphCatalog {
    let stages = vec![
        stage(STAGE_UYIR, "Uyir Ezhuthukkal", "Learn Tamil Vowels", Script::Tamil),
        stage(STAGE_MEI, "Mei Ezhuthukkal", "Learn Tamil Consonants", Script::Tamil),
        stage(STAGE_UYIRMEI_KA, "Uyirmei Ezhuthukkal", "Learn Combined Letters", Script::Tamil),
        stage(STAGE_LATIN_CAPITAL, "Capital Letters", "Learn A to Z", Script::Latin),
        stage(STAGE_LATIN_SMALL, "Small Letters", "Learn a to z", Script::Latin),
    ];

    let mut glyphs = Vec::with_capacity(UYIR.len() + MEI.len() + UYIRMEI_KA.len() + 52);
    for (stage_id, rows) in [(STAGE_UYIR, UYIR), (STAGE_MEI, MEI), (STAGE_UYIRMEI_KA, UYIRMEI_KA)] {
        glyphs.extend(rows.iter().map(|&(symbol, translit, pron, difficulty)| GlyphDescriptor {
            symbol: symbol.to_string(),
            transliteration: translit.to_string(),
            pronunciation: pron.to_string(),
            stage_id,
            difficulty,
        }));
    }

    glyphs.extend(('A'..='Z').map(|c| latin(c, STAGE_LATIN_CAPITAL)));
    glyphs.extend(('a'..='z').map(|c| latin(c, STAGE_LATIN_SMALL)));

    GlyphCatalog { stages, glyphs }
}

fn stage(id: u32, name: &str, description: &str, script: Script) -> StageInfo {
    StageInfo {
        id,
        name: name.to_string(),
        description: description.to_string(),
        script,
    }
}

/// Latin letters: straight-stroke shapes are easy, single curves medium,
/// multi-curve shapes hard.
fn latin(c: char, stage_id: u32) -> GlyphDescriptor {
    let difficulty = match c.to_ascii_lowercase() {
        'i' | 'l' | 't' | 'v' | 'x' | 'z' | 'e' | 'f' | 'h' | 'k' | 'w' | 'y' | 'a' | 'n' | 'm' => 1,
        'c' | 'o' | 'u' | 'j' | 'p' | 'd' | 'r' => 2,
        _ => 3,
    };
    GlyphDescriptor {
        symbol: c.to_string(),
        transliteration: c.to_string(),
        pronunciation: c.to_ascii_lowercase().to_string(),
        stage_id,
        difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_stage_sizes() {
        let catalog = GlyphCatalog::builtin();
        assert_eq!(catalog.stage(STAGE_UYIR).len(), 12);
        assert_eq!(catalog.stage(STAGE_MEI).len(), 18);
        assert_eq!(catalog.stage(STAGE_UYIRMEI_KA).len(), 12);
        assert_eq!(catalog.stage(STAGE_LATIN_CAPITAL).len(), 26);
        assert_eq!(catalog.stage(STAGE_LATIN_SMALL).len(), 26);
        assert_eq!(catalog.len(), 94);
    }

    #[test]
    fn symbols_are_unique() {
        let mut seen = HashSet::new();
        for g in &GlyphCatalog::builtin().glyphs {
            assert!(seen.insert(g.symbol.as_str()), "duplicate glyph '{}'", g.symbol);
            assert!((1..=3).contains(&g.difficulty), "bad difficulty for '{}'", g.symbol);
        }
    }

    #[test]
    fn find_and_filter() {
        let catalog = GlyphCatalog::builtin();
        let aa = catalog.find("ஆ").unwrap();
        assert_eq!(aa.transliteration, "aa");
        assert_eq!(aa.stage_id, STAGE_UYIR);
        assert!(catalog.find("?").is_none());

        assert_eq!(catalog.by_script(Script::Latin).len(), 52);
        assert_eq!(catalog.by_script(Script::Tamil).len(), 42);
        assert!(catalog.by_difficulty(3).iter().any(|g| g.symbol == "ஔ"));
    }

    #[test]
    fn parse_custom_catalog() {
        let json = r#"{
            "stages": [{ "id": 9, "name": "Demo", "description": "d", "script": "latin" }],
            "glyphs": [{ "symbol": "Q", "transliteration": "q", "stage_id": 9, "difficulty": 2 }]
        }"#;
        let catalog = GlyphCatalog::from_json(json).unwrap();
        assert_eq!(catalog.stage(9).len(), 1);
        assert_eq!(catalog.glyphs[0].pronunciation, "");
    }

    #[test]
    fn custom_catalog_rejects_unknown_stage() {
        let json = r#"{
            "stages": [],
            "glyphs": [{ "symbol": "Q", "transliteration": "q", "stage_id": 9, "difficulty": 2 }]
        }"#;
        assert!(matches!(
            GlyphCatalog::from_json(json),
            Err(ConfigError::UnknownStage(9))
        ));
    }
}
