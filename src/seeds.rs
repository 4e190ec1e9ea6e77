//! Built-in catalog content so the service is usable without a config file.

use crate::domain::{CharacterEntry, Level, WordEntry};

fn ch(level: Level, reading: &str, glyph: &str, gloss: &str) -> CharacterEntry {
  CharacterEntry { level, reading: reading.into(), glyph: glyph.into(), gloss: gloss.into() }
}

fn word(level: Level, reading: &str, glyphs: &str) -> WordEntry {
  WordEntry { level, reading: reading.into(), glyphs: glyphs.into() }
}

/// A small hand-curated set of characters across the lower and upper grades.
pub fn seed_characters() -> Vec<CharacterEntry> {
  use Level::*;
  vec![
    ch(Pre8, "일", "一", "한"),
    ch(Pre8, "이", "二", "두"),
    ch(Pre8, "삼", "三", "석"),
    ch(Pre8, "사", "四", "넉"),
    ch(Pre8, "오", "五", "다섯"),
    ch(Grade8, "교", "校", "학교"),
    ch(Grade8, "학", "學", "배울"),
    ch(Grade8, "산", "山", "메"),
    ch(Grade8, "수", "水", "물"),
    ch(Grade8, "화", "火", "불"),
    ch(Grade7, "가", "家", "집"),
    ch(Grade7, "강", "江", "강"),
    ch(Grade7, "공", "工", "장인"),
    ch(Grade7, "기", "氣", "기운"),
    ch(Grade6, "각", "各", "각각"),
    ch(Grade6, "감", "感", "느낄"),
    ch(Grade6, "강", "強", "강할"),
    ch(Grade6, "계", "界", "지경"),
    ch(Grade6, "족", "族", "겨레"),
    ch(Grade5, "가", "價", "값"),
    ch(Grade5, "개", "改", "고칠"),
    ch(Grade5, "객", "客", "손"),
    ch(Grade5, "격", "格", "격식"),
  ]
}

pub fn seed_words() -> Vec<WordEntry> {
  use Level::*;
  vec![
    word(Grade6, "가족", "家族"),
    word(Grade6, "감동", "感動"),
    word(Grade6, "세계", "世界"),
    word(Grade6, "강국", "強國"),
    word(Grade5, "가격", "價格"),
    word(Grade5, "개선", "改善"),
    word(Grade5, "관객", "觀客"),
  ]
}
