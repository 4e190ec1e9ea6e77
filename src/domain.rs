//! Domain models: proficiency levels, catalog entries, questions and grade results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Proficiency grade, ordered from beginner (준8급) to advanced (4급).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
  #[serde(rename = "준8급")] Pre8,
  #[serde(rename = "8급")] Grade8,
  #[serde(rename = "준7급")] Pre7,
  #[serde(rename = "7급")] Grade7,
  #[serde(rename = "준6급")] Pre6,
  #[serde(rename = "6급")] Grade6,
  #[serde(rename = "준5급")] Pre5,
  #[serde(rename = "5급")] Grade5,
  #[serde(rename = "준4급")] Pre4,
  #[serde(rename = "4급")] Grade4,
}

impl Level {
  pub const ALL: [Level; 10] = [
    Level::Pre8, Level::Grade8, Level::Pre7, Level::Grade7, Level::Pre6,
    Level::Grade6, Level::Pre5, Level::Grade5, Level::Pre4, Level::Grade4,
  ];

  pub fn label(self) -> &'static str {
    match self {
      Level::Pre8 => "준8급",
      Level::Grade8 => "8급",
      Level::Pre7 => "준7급",
      Level::Grade7 => "7급",
      Level::Pre6 => "준6급",
      Level::Grade6 => "6급",
      Level::Pre5 => "준5급",
      Level::Grade5 => "5급",
      Level::Pre4 => "준4급",
      Level::Grade4 => "4급",
    }
  }

  /// Compound-word questions exist only for the top five grades (6급 and above).
  pub fn has_word_questions(self) -> bool {
    self >= Level::Grade6
  }

  /// Lenient parse used at the edges: unknown labels become `None`.
  pub fn parse(label: &str) -> Option<Level> {
    let label = label.trim();
    Level::ALL.into_iter().find(|l| l.label() == label)
  }
}

impl fmt::Display for Level {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for Level {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Level::parse(s).ok_or_else(|| format!("unknown level label: {s:?}"))
  }
}

/// A single studied character (한자) with its representative reading and gloss.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEntry {
  #[serde(rename = "grade")]
  pub level: Level,
  pub reading: String,
  #[serde(rename = "character")]
  pub glyph: String,
  #[serde(rename = "meaning")]
  pub gloss: String,
}

impl CharacterEntry {
  /// The "reading, gloss" pair shown as an option and expected as an answer.
  pub fn answer_text(&self) -> String {
    format!("{}, {}", self.reading, self.gloss)
  }
}

/// A compound word (한자어): its reading and glyph sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
  pub level: Level,
  pub reading: String,
  pub glyphs: String,
}

/// The four question shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
  /// Pick the "reading, gloss" of a character among options.
  McChar,
  /// Type the "reading, gloss" of a character.
  FreeChar,
  /// Pick the reading of a compound word among options.
  McWord,
  /// Type the reading of a compound word.
  FreeWord,
}

impl QuestionKind {
  pub fn is_multiple_choice(self) -> bool {
    matches!(self, QuestionKind::McChar | QuestionKind::McWord)
  }

  pub fn is_word(self) -> bool {
    matches!(self, QuestionKind::McWord | QuestionKind::FreeWord)
  }
}

/// A generated question. Ids are 1-based within a single generation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
  pub id: u32,
  #[serde(rename = "type")]
  pub kind: QuestionKind,
  #[serde(rename = "question")]
  pub prompt: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub options: Option<Vec<String>>,
  pub answer: String,
  #[serde(rename = "character")]
  pub subject: String,
}

/// Verdict for one free-text answer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
  pub correct: bool,
  /// 0..=100
  pub score: u32,
  /// 0.0..=1.0
  pub similarity: f64,
}
