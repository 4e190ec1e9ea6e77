//! Edit-distance similarity used for tolerant grading.

/// Levenshtein distance over Unicode scalar values (unit cost insert/delete/substitute).
///
/// Keeps one DP row sized to the shorter input.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();
  let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

  if short.is_empty() {
    return long.len();
  }

  let mut prev: Vec<usize> = (0..=short.len()).collect();
  let mut curr = vec![0; short.len() + 1];

  for (i, lc) in long.iter().enumerate() {
    curr[0] = i + 1;
    for (j, sc) in short.iter().enumerate() {
      let substitution = prev[j] + usize::from(lc != sc);
      curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(substitution);
    }
    std::mem::swap(&mut prev, &mut curr);
  }

  prev[short.len()]
}

/// Case-insensitive similarity in `[0, 1]`: `1 - distance / max_len`.
///
/// Either input empty gives 0.0, including when both are empty.
pub fn similarity(a: &str, b: &str) -> f64 {
  if a.is_empty() || b.is_empty() {
    return 0.0;
  }
  let a = a.to_lowercase();
  let b = b.to_lowercase();
  let max_len = a.chars().count().max(b.chars().count());
  let distance = levenshtein_distance(&a, &b);
  1.0 - distance as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn distance_known_values() {
    assert_eq!(levenshtein_distance("", ""), 0);
    assert_eq!(levenshtein_distance("abc", ""), 3);
    assert_eq!(levenshtein_distance("", "abc"), 3);
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    assert_eq!(levenshtein_distance("학교", "학생"), 1);
    assert_eq!(levenshtein_distance("가족", "족가"), 2);
  }

  #[test]
  fn distance_is_symmetric_and_obeys_triangle_inequality() {
    let words = ["", "a", "ab", "kitten", "sitting", "mitten", "가족", "가족들", "국가"];
    for a in words {
      for b in words {
        let ab = levenshtein_distance(a, b);
        assert_eq!(ab, levenshtein_distance(b, a));
        assert_eq!(ab == 0, a == b);
        for c in words {
          assert!(ab <= levenshtein_distance(a, c) + levenshtein_distance(c, b), "{a} {b} {c}");
        }
      }
    }
  }

  #[test]
  fn empty_input_scores_zero() {
    assert_eq!(similarity("", ""), 0.0);
    assert_eq!(similarity("", "abc"), 0.0);
    assert_eq!(similarity("abc", ""), 0.0);
  }

  #[test]
  fn identical_and_case_only_differences_score_one() {
    assert_eq!(similarity("hello", "hello"), 1.0);
    assert_eq!(similarity("Hello", "hELLO"), 1.0);
    assert_eq!(similarity("한", "한"), 1.0);
  }

  #[test]
  fn similarity_is_symmetric_and_bounded() {
    let words = ["a", "ab", "kitten", "sitting", "가족", "국가", "일, 한"];
    for a in words {
      for b in words {
        let s = similarity(a, b);
        assert_eq!(s, similarity(b, a));
        assert!((0.0..=1.0).contains(&s));
      }
    }
  }

  #[test]
  fn similarity_counts_characters_not_bytes() {
    // one substitution over two syllables
    assert_eq!(similarity("학교", "학생"), 0.5);
    assert_eq!(similarity("helo", "hello"), 0.8);
  }
}
