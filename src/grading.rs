//! Free-text answer grading.
//!
//! Two scoring paths:
//!   - "reading, gloss" pairs (the expected answer contains ", "): each half is
//!     worth 50 points at similarity >= 0.8, 30 at >= 0.6; correct at 80 points.
//!   - single-field answers: similarity maps straight onto a score tier; 0.8 and
//!     above counts as correct.
//! The two paths intentionally keep different tiers.

use tracing::{debug, instrument};

use crate::domain::GradeResult;
use crate::similarity::similarity;

/// Marks an expected answer as a "reading, gloss" pair.
pub const PAIR_DELIMITER: &str = ", ";

const PASS_SCORE: u32 = 80;

#[instrument(level = "debug", target = "grading", skip_all, fields(user_len = user_answer.len(), expected_len = correct_answer.len()))]
pub fn grade(user_answer: &str, correct_answer: &str) -> GradeResult {
  let user = user_answer.trim();
  let expected = correct_answer.trim();

  if user.to_lowercase() == expected.to_lowercase() {
    return GradeResult { correct: true, score: 100, similarity: 1.0 };
  }

  let result = if expected.contains(PAIR_DELIMITER) {
    grade_pair(user, expected)
  } else {
    grade_single(user, expected)
  };
  debug!(target: "grading", correct = result.correct, score = result.score, similarity = result.similarity, "Graded answer");
  result
}

fn grade_pair(user: &str, expected: &str) -> GradeResult {
  let expected_parts: Vec<&str> = expected.split(PAIR_DELIMITER).collect();
  let user_parts: Vec<&str> = user.split(PAIR_DELIMITER).collect();

  // reading
  let reading_sim = similarity(user_parts[0].trim(), expected_parts[0].trim());
  let mut total_similarity = reading_sim;
  let mut score = part_points(reading_sim);

  // gloss; a missing user gloss earns nothing but counts as 1.0 in the average
  match (user_parts.get(1), expected_parts.get(1)) {
    (Some(user_gloss), Some(expected_gloss)) => {
      let gloss_sim = similarity(user_gloss.trim(), expected_gloss.trim());
      total_similarity += gloss_sim;
      score += part_points(gloss_sim);
    }
    _ => total_similarity += 1.0,
  }

  let score = score.min(100);
  GradeResult {
    correct: score >= PASS_SCORE,
    score,
    similarity: total_similarity / 2.0,
  }
}

fn part_points(sim: f64) -> u32 {
  if sim >= 0.8 {
    50
  } else if sim >= 0.6 {
    30
  } else {
    0
  }
}

fn grade_single(user: &str, expected: &str) -> GradeResult {
  let sim = similarity(user, expected);
  let (correct, score) = if sim >= 0.9 {
    (true, 100)
  } else if sim >= 0.8 {
    (true, 90)
  } else if sim >= 0.7 {
    (false, 70)
  } else if sim >= 0.6 {
    (false, 50)
  } else {
    (false, 0)
  };
  GradeResult { correct, score, similarity: sim }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn exact_match_short_circuits() {
    assert_eq!(grade("가, 집", "가, 집"), GradeResult { correct: true, score: 100, similarity: 1.0 });
    assert_eq!(grade("  Hello ", "hello"), GradeResult { correct: true, score: 100, similarity: 1.0 });
  }

  #[test]
  fn unrelated_pair_scores_zero() {
    let r = grade("강, 갑", "가, 집");
    assert!(!r.correct);
    assert_eq!(r.score, 0);
    assert_eq!(r.similarity, 0.0);
  }

  #[test]
  fn pair_with_one_half_right_is_not_enough() {
    // reading exact (50), gloss unrelated (0)
    let r = grade("가, 물", "가, 집");
    assert_eq!(r, GradeResult { correct: false, score: 50, similarity: 0.5 });
  }

  #[test]
  fn pair_with_both_halves_close_passes() {
    // one edit in six characters on both halves -> 50 + 50
    let r = grade("abcdeX, abcdeX", "abcdef, abcdef");
    assert!(r.correct);
    assert_eq!(r.score, 100);
    assert!((r.similarity - 5.0 / 6.0).abs() < 1e-9);
  }

  #[test]
  fn pair_with_middling_halves_gets_partial_credit() {
    // one edit in three characters on both halves -> 30 + 30
    let r = grade("abX, abX", "abc, abc");
    assert_eq!(r.score, 60);
    assert!(!r.correct);
  }

  #[test]
  fn missing_gloss_counts_as_neutral_in_similarity() {
    let r = grade("가", "가, 집");
    assert_eq!(r, GradeResult { correct: false, score: 50, similarity: 1.0 });
  }

  #[test]
  fn extra_parts_are_ignored() {
    let r = grade("가, 집, 덤", "가, 집");
    assert_eq!(r.score, 100);
    assert!(r.correct);
  }

  #[test]
  fn single_field_tiers() {
    let r = grade("abcdefghijX", "abcdefghijk");
    assert_eq!((r.correct, r.score), (true, 100));
    let r = grade("abcdeX", "abcdef");
    assert_eq!((r.correct, r.score), (true, 90));
    let r = grade("abcX", "abcd");
    assert_eq!((r.correct, r.score), (false, 70));
    let r = grade("abX", "abc");
    assert_eq!((r.correct, r.score), (false, 50));
    let r = grade("가족", "국가");
    assert_eq!((r.correct, r.score), (false, 0));
  }

  #[test]
  fn empty_answer_is_wrong() {
    let r = grade("   ", "가족");
    assert_eq!(r, GradeResult { correct: false, score: 0, similarity: 0.0 });
  }
}
