//! Question generation for the four question shapes.
//!
//! Selection never errors: unknown subjects, empty levels and word questions
//! below 6급 all produce an empty list, and `count` is clamped to the pool size.

use tracing::{debug, info, instrument};

use crate::catalog::Catalog;
use crate::config::Prompts;
use crate::domain::{CharacterEntry, Level, Question, QuestionKind, WordEntry};
use crate::random::{choose_distinct, shuffle, RandomSource};
use crate::sampler::sample_distractors;
use crate::util::fill_template;

pub const DEFAULT_COUNT: usize = 10;
pub const DISTRACTORS_PER_QUESTION: usize = 3;

/// What to generate: a level, how many, and optionally one specific glyph.
#[derive(Clone, Debug)]
pub struct QuestionRequest<'a> {
  pub level: Level,
  pub count: usize,
  pub subject: Option<&'a str>,
}

impl<'a> QuestionRequest<'a> {
  pub fn new(level: Level, count: usize) -> Self {
    Self { level, count, subject: None }
  }

  pub fn with_subject(mut self, subject: Option<&'a str>) -> Self {
    self.subject = subject.filter(|s| !s.is_empty());
    self
  }
}

/// Generator over a borrowed catalog snapshot.
pub struct QuestionGenerator<'a> {
  catalog: &'a Catalog,
  prompts: &'a Prompts,
}

impl<'a> QuestionGenerator<'a> {
  pub fn new(catalog: &'a Catalog, prompts: &'a Prompts) -> Self {
    Self { catalog, prompts }
  }

  #[instrument(level = "info", target = "quiz", skip(self, rng), fields(level = %req.level, count = req.count, subject = req.subject.unwrap_or("")))]
  pub fn generate(&self, kind: QuestionKind, req: &QuestionRequest<'_>, rng: &mut dyn RandomSource) -> Vec<Question> {
    let questions = if kind.is_word() {
      self.word_questions(kind, req, rng)
    } else {
      self.character_questions(kind, req, rng)
    };
    info!(target: "quiz", ?kind, level = %req.level, generated = questions.len(), "Generated questions");
    questions
  }

  fn character_questions(&self, kind: QuestionKind, req: &QuestionRequest<'_>, rng: &mut dyn RandomSource) -> Vec<Question> {
    let pool = self.catalog.characters_at(req.level);
    let selected: Vec<&CharacterEntry> = match req.subject {
      Some(glyph) => pool.iter().find(|c| c.glyph == glyph).copied().into_iter().collect(),
      None => choose_distinct(rng, &pool, req.count).into_iter().copied().collect(),
    };
    if selected.is_empty() {
      debug!(target: "quiz", level = %req.level, "No character entries selected");
      return Vec::new();
    }

    let option_pool: Vec<String> = if kind.is_multiple_choice() {
      pool.iter().map(|c| c.answer_text()).collect()
    } else {
      Vec::new()
    };

    selected
      .into_iter()
      .enumerate()
      .map(|(i, entry)| {
        let answer = entry.answer_text();
        let options = kind
          .is_multiple_choice()
          .then(|| build_options(rng, &answer, &option_pool, &[]));
        Question {
          id: i as u32 + 1,
          kind,
          prompt: self.prompt_for(kind, &entry.glyph),
          options,
          answer,
          subject: entry.glyph.clone(),
        }
      })
      .collect()
  }

  fn word_questions(&self, kind: QuestionKind, req: &QuestionRequest<'_>, rng: &mut dyn RandomSource) -> Vec<Question> {
    if !req.level.has_word_questions() {
      debug!(target: "quiz", level = %req.level, "Word questions are not offered at this level");
      return Vec::new();
    }

    let pool = self.catalog.words_at(req.level);
    let selected: Vec<&WordEntry> = match req.subject {
      Some(glyphs) => pool.iter().find(|w| w.glyphs == glyphs).copied().into_iter().collect(),
      None => choose_distinct(rng, &pool, req.count).into_iter().copied().collect(),
    };
    if selected.is_empty() {
      return Vec::new();
    }

    let (level_readings, all_readings): (Vec<String>, Vec<String>) = if kind.is_multiple_choice() {
      (
        pool.iter().map(|w| w.reading.clone()).collect(),
        self.catalog.all_words().iter().map(|w| w.reading.clone()).collect(),
      )
    } else {
      (Vec::new(), Vec::new())
    };

    selected
      .into_iter()
      .enumerate()
      .map(|(i, entry)| {
        let options = kind
          .is_multiple_choice()
          .then(|| build_options(rng, &entry.reading, &level_readings, &all_readings));
        Question {
          id: i as u32 + 1,
          kind,
          prompt: self.prompt_for(kind, &entry.glyphs),
          options,
          answer: entry.reading.clone(),
          subject: entry.glyphs.clone(),
        }
      })
      .collect()
  }

  fn prompt_for(&self, kind: QuestionKind, subject: &str) -> String {
    let tpl = match kind {
      QuestionKind::McChar => &self.prompts.mc_char,
      QuestionKind::FreeChar => &self.prompts.free_char,
      QuestionKind::McWord => &self.prompts.mc_word,
      QuestionKind::FreeWord => &self.prompts.free_word,
    };
    fill_template(tpl, &[("subject", subject)])
  }
}

/// Correct answer plus up to three distractors, shuffled.
fn build_options(rng: &mut dyn RandomSource, answer: &str, primary: &[String], fallback: &[String]) -> Vec<String> {
  let mut options = vec![answer.to_string()];
  options.extend(sample_distractors(rng, answer, primary, fallback, DISTRACTORS_PER_QUESTION));
  shuffle(rng, &mut options);
  options
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use pretty_assertions::assert_eq;

  use super::*;
  use crate::random::testing::FirstN;
  use crate::random::thread_source;

  fn entry(level: Level, reading: &str, glyph: &str, gloss: &str) -> CharacterEntry {
    CharacterEntry { level, reading: reading.into(), glyph: glyph.into(), gloss: gloss.into() }
  }

  fn word(level: Level, reading: &str, glyphs: &str) -> WordEntry {
    WordEntry { level, reading: reading.into(), glyphs: glyphs.into() }
  }

  fn catalog() -> Catalog {
    Catalog::new(
      vec![
        entry(Level::Grade8, "일", "一", "한"),
        entry(Level::Grade8, "이", "二", "두"),
        entry(Level::Grade8, "삼", "三", "석"),
        entry(Level::Grade8, "사", "四", "넉"),
        entry(Level::Grade8, "오", "五", "다섯"),
        entry(Level::Grade7, "가", "家", "집"),
        entry(Level::Grade7, "강", "江", "강"),
      ],
      vec![
        word(Level::Grade6, "가족", "家族"),
        word(Level::Grade6, "감동", "感動"),
        word(Level::Grade5, "가격", "價格"),
        word(Level::Grade5, "개선", "改善"),
        word(Level::Grade5, "관객", "觀客"),
        word(Level::Grade5, "객실", "客室"),
        word(Level::Grade8, "학교", "學校"),
      ],
    )
  }

  fn generate_with(kind: QuestionKind, req: QuestionRequest<'_>) -> Vec<Question> {
    let catalog = catalog();
    let prompts = Prompts::default();
    QuestionGenerator::new(&catalog, &prompts).generate(kind, &req, &mut thread_source())
  }

  #[test]
  fn mc_char_has_four_options_with_exactly_one_answer() {
    for _ in 0..30 {
      let qs = generate_with(QuestionKind::McChar, QuestionRequest::new(Level::Grade8, 5));
      assert_eq!(qs.len(), 5);
      for q in &qs {
        let options = q.options.as_ref().expect("options");
        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|o| **o == q.answer).count(), 1);
        let unique: HashSet<&String> = options.iter().collect();
        assert_eq!(unique.len(), 4);
      }
    }
  }

  #[test]
  fn ids_are_sequential_from_one_and_entries_do_not_repeat() {
    let qs = generate_with(QuestionKind::FreeChar, QuestionRequest::new(Level::Grade8, 50));
    assert_eq!(qs.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    let subjects: HashSet<&str> = qs.iter().map(|q| q.subject.as_str()).collect();
    assert_eq!(subjects.len(), 5);
    assert!(qs.iter().all(|q| q.options.is_none()));
  }

  #[test]
  fn small_level_yields_fewer_options() {
    let qs = generate_with(QuestionKind::McChar, QuestionRequest::new(Level::Grade7, 10));
    assert_eq!(qs.len(), 2);
    for q in qs {
      assert_eq!(q.options.expect("options").len(), 2);
    }
  }

  #[test]
  fn subject_selects_a_single_entry() {
    let qs = generate_with(QuestionKind::McChar, QuestionRequest::new(Level::Grade8, 10).with_subject(Some("三")));
    assert_eq!(qs.len(), 1);
    assert_eq!(qs[0].subject, "三");
    assert_eq!(qs[0].answer, "삼, 석");
    assert_eq!(qs[0].prompt, "다음 한자의 음과 뜻을 고르시오: 三");

    let none = generate_with(QuestionKind::FreeChar, QuestionRequest::new(Level::Grade8, 10).with_subject(Some("家")));
    assert!(none.is_empty());
  }

  #[test]
  fn word_subject_selects_a_single_compound() {
    for kind in [QuestionKind::McWord, QuestionKind::FreeWord] {
      let qs = generate_with(kind, QuestionRequest::new(Level::Grade6, 10).with_subject(Some("家族")));
      assert_eq!(qs.len(), 1);
      assert_eq!(qs[0].id, 1);
      assert_eq!(qs[0].subject, "家族");
      assert_eq!(qs[0].answer, "가족");
      assert_eq!(qs[0].options.is_some(), kind.is_multiple_choice());

      let none = generate_with(kind, QuestionRequest::new(Level::Grade6, 10).with_subject(Some("價格")));
      assert!(none.is_empty());
    }
  }

  #[test]
  fn zero_count_or_empty_level_is_empty() {
    assert!(generate_with(QuestionKind::McChar, QuestionRequest::new(Level::Grade8, 0)).is_empty());
    assert!(generate_with(QuestionKind::McChar, QuestionRequest::new(Level::Grade4, 10)).is_empty());
  }

  #[test]
  fn word_questions_are_limited_to_upper_levels() {
    for level in [Level::Pre8, Level::Grade8, Level::Pre7, Level::Grade7, Level::Pre6] {
      assert!(generate_with(QuestionKind::McWord, QuestionRequest::new(level, 10)).is_empty());
      assert!(generate_with(QuestionKind::FreeWord, QuestionRequest::new(level, 10)).is_empty());
    }
  }

  #[test]
  fn scarce_word_level_borrows_distractors_from_other_levels() {
    for _ in 0..30 {
      let qs = generate_with(QuestionKind::McWord, QuestionRequest::new(Level::Grade6, 10));
      assert_eq!(qs.len(), 2);
      for q in &qs {
        let options = q.options.as_ref().expect("options");
        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|o| **o == q.answer).count(), 1);
        assert!(q.subject == "家族" || q.subject == "感動");
      }
    }
  }

  #[test]
  fn deterministic_source_pins_option_order() {
    let catalog = catalog();
    let prompts = Prompts::default();
    let generator = QuestionGenerator::new(&catalog, &prompts);
    let qs = generator.generate(QuestionKind::McWord, &QuestionRequest::new(Level::Grade6, 1), &mut FirstN);
    assert_eq!(
      qs,
      vec![Question {
        id: 1,
        kind: QuestionKind::McWord,
        prompt: "다음 한자어의 독음을 고르시오: 家族".into(),
        options: Some(vec!["가족".into(), "감동".into(), "가격".into(), "개선".into()]),
        answer: "가족".into(),
        subject: "家族".into(),
      }]
    );
  }

  #[test]
  fn free_word_has_reading_answer_and_no_options() {
    let qs = generate_with(QuestionKind::FreeWord, QuestionRequest::new(Level::Grade5, 3));
    assert_eq!(qs.len(), 3);
    for q in qs {
      assert!(q.options.is_none());
      assert!(!q.answer.contains(", "));
      assert!(q.prompt.ends_with(&q.subject));
    }
  }
}
