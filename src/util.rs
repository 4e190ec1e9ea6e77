//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// True if the char belongs to a CJK ideograph block.
pub fn is_cjk(ch: char) -> bool {
  ('\u{4E00}'..='\u{9FFF}').contains(&ch)
    || ('\u{3400}'..='\u{4DBF}').contains(&ch)
    || ('\u{20000}'..='\u{2A6DF}').contains(&ch)
    || ('\u{2A700}'..='\u{2CEAF}').contains(&ch)
    || ('\u{F900}'..='\u{FAFF}').contains(&ch)
}

/// Log-safe truncation on a char boundary.
pub fn trunc_for_log(s: &str, max_chars: usize) -> String {
  match s.char_indices().nth(max_chars) {
    None => s.to_string(),
    Some((cut, _)) => format!("{}… ({} bytes total)", &s[..cut], s.len()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fills_placeholders() {
    assert_eq!(fill_template("Q: {subject}?", &[("subject", "家")]), "Q: 家?");
    assert_eq!(fill_template("no placeholders", &[("subject", "家")]), "no placeholders");
  }

  #[test]
  fn detects_han_ideographs() {
    assert!(is_cjk('家'));
    assert!(is_cjk('學'));
    assert!(!is_cjk('가'));
    assert!(!is_cjk('a'));
  }

  #[test]
  fn truncation_respects_char_boundaries() {
    assert_eq!(trunc_for_log("가나다", 5), "가나다");
    assert_eq!(trunc_for_log("가나다", 2), "가나… (9 bytes total)");
  }
}
