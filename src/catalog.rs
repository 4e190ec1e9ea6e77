//! Immutable catalog snapshot of character and compound-word entries.
//!
//! Built once at startup (config rows, else built-in seeds) and shared
//! read-only by every request.

use std::collections::BTreeMap;

use tracing::{info, instrument, warn};

use crate::config::{CharacterRow, QuizConfig, WordRow};
use crate::domain::{CharacterEntry, Level, WordEntry};
use crate::seeds::{seed_characters, seed_words};
use crate::util::{is_cjk, trunc_for_log};

#[derive(Clone, Debug, Default)]
pub struct Catalog {
  characters: Vec<CharacterEntry>,
  words: Vec<WordEntry>,
}

impl Catalog {
  pub fn new(characters: Vec<CharacterEntry>, words: Vec<WordEntry>) -> Self {
    Self { characters, words }
  }

  pub fn seeded() -> Self {
    Self::new(seed_characters(), seed_words())
  }

  /// Build from config rows. Without usable character rows the built-in seed
  /// characters are used; configured words are kept, seed words fill in only
  /// when none are configured.
  #[instrument(level = "info", target = "catalog", skip_all)]
  pub fn from_config(cfg: Option<&QuizConfig>) -> Self {
    let catalog = match cfg {
      Some(cfg) => Self::from_rows(&cfg.characters, &cfg.words),
      None => Self::default(),
    };
    let catalog = if catalog.characters.is_empty() {
      let words = if catalog.words.is_empty() {
        info!(target: "catalog", "No catalog rows configured; using built-in seeds");
        seed_words()
      } else {
        warn!(target: "catalog", words = catalog.words.len(), "No usable character rows; using built-in seed characters with configured words");
        catalog.words
      };
      Self::new(seed_characters(), words)
    } else {
      catalog
    };
    catalog.log_inventory();
    catalog
  }

  /// Convert raw rows, skipping any with an unknown level or an empty field.
  pub fn from_rows(characters: &[CharacterRow], words: &[WordRow]) -> Self {
    let characters = characters
      .iter()
      .enumerate()
      .filter_map(|(i, row)| {
        let Some(level) = Level::parse(&row.level) else {
          warn!(target: "catalog", row = i, level = %trunc_for_log(&row.level, 16), "Skipping character row: unknown level");
          return None;
        };
        let (reading, glyph, gloss) = (row.reading.trim(), row.glyph.trim(), row.gloss.trim());
        if reading.is_empty() || glyph.is_empty() || gloss.is_empty() {
          warn!(target: "catalog", row = i, "Skipping character row: empty field");
          return None;
        }
        if !glyph.chars().any(is_cjk) {
          warn!(target: "catalog", row = i, %glyph, "Character row glyph has no Han ideograph");
        }
        Some(CharacterEntry { level, reading: reading.into(), glyph: glyph.into(), gloss: gloss.into() })
      })
      .collect();

    let words = words
      .iter()
      .enumerate()
      .filter_map(|(i, row)| {
        let Some(level) = Level::parse(&row.level) else {
          warn!(target: "catalog", row = i, level = %trunc_for_log(&row.level, 16), "Skipping word row: unknown level");
          return None;
        };
        let (reading, glyphs) = (row.reading.trim(), row.glyphs.trim());
        if reading.is_empty() || glyphs.is_empty() {
          warn!(target: "catalog", row = i, "Skipping word row: empty field");
          return None;
        }
        Some(WordEntry { level, reading: reading.into(), glyphs: glyphs.into() })
      })
      .collect();

    Self { characters, words }
  }

  pub fn characters_at(&self, level: Level) -> Vec<&CharacterEntry> {
    self.characters.iter().filter(|c| c.level == level).collect()
  }

  pub fn words_at(&self, level: Level) -> Vec<&WordEntry> {
    self.words.iter().filter(|w| w.level == level).collect()
  }

  pub fn all_words(&self) -> &[WordEntry] {
    &self.words
  }

  /// First entry with this glyph, in load order.
  pub fn find_character(&self, glyph: &str) -> Option<&CharacterEntry> {
    self.characters.iter().find(|c| c.glyph == glyph)
  }

  /// Levels that have at least one character entry, in rank order.
  pub fn levels(&self) -> Vec<Level> {
    Level::ALL
      .into_iter()
      .filter(|l| self.characters.iter().any(|c| c.level == *l))
      .collect()
  }

  pub fn character_count(&self) -> usize {
    self.characters.len()
  }

  pub fn word_count(&self) -> usize {
    self.words.len()
  }

  fn log_inventory(&self) {
    let mut by_level: BTreeMap<Level, (usize, usize)> = BTreeMap::new();
    for c in &self.characters {
      by_level.entry(c.level).or_default().0 += 1;
    }
    for w in &self.words {
      by_level.entry(w.level).or_default().1 += 1;
    }
    for (level, (characters, words)) in by_level {
      info!(target: "catalog", %level, characters, words, "Catalog inventory");
    }
    info!(target: "catalog", characters = self.character_count(), words = self.word_count(), "Catalog loaded");
  }
}
