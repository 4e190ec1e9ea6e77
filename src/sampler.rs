//! Distractor selection for multiple-choice questions.
//!
//! Options are compared by their display string, so a distractor can never
//! read the same as the correct answer.

use tracing::debug;

use crate::random::{choose_distinct, RandomSource};

/// Pick up to `k` wrong options for `correct`.
///
/// Draws from `primary` (minus anything equal to `correct`) when it has enough;
/// otherwise takes all of it and tops up from `fallback`, one random draw at a
/// time, skipping `correct` and values already chosen. Returns fewer than `k`
/// when both pools run dry.
pub fn sample_distractors(
  rng: &mut dyn RandomSource,
  correct: &str,
  primary: &[String],
  fallback: &[String],
  k: usize,
) -> Vec<String> {
  let eligible: Vec<&String> = primary.iter().filter(|s| s.as_str() != correct).collect();
  if eligible.len() >= k {
    return choose_distinct(rng, &eligible, k).into_iter().map(|s| (*s).clone()).collect();
  }

  let mut chosen: Vec<String> = eligible.into_iter().cloned().collect();
  let mut remaining: Vec<&String> = fallback
    .iter()
    .filter(|s| s.as_str() != correct && !chosen.contains(*s))
    .collect();

  while chosen.len() < k && !remaining.is_empty() {
    let Some(&i) = rng.draw_distinct(remaining.len(), 1).first() else { break };
    let pick = remaining[i].clone();
    remaining.retain(|s| **s != pick);
    chosen.push(pick);
  }

  debug!(target: "quiz", %correct, wanted = k, got = chosen.len(), "Distractor pool was short; used fallback pool");
  chosen
}
