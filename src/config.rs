//! Loading quiz configuration (prompts, server options, catalog rows) from TOML.
//!
//! See `QuizConfig` for the expected schema.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct QuizConfig {
  #[serde(default)]
  pub prompts: Prompts,
  #[serde(default)]
  pub server: ServerCfg,
  #[serde(default)]
  pub characters: Vec<CharacterRow>,
  #[serde(default)]
  pub words: Vec<WordRow>,
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct ServerCfg {
  /// Allowed CORS origins. Empty means any origin.
  #[serde(default)]
  pub cors_origins: Vec<String>,
}

/// Character row as written in TOML. `level` stays a raw label here so one bad
/// row can be skipped without rejecting the whole file.
#[derive(Clone, Debug, Deserialize)]
pub struct CharacterRow {
  pub level: String,
  pub reading: String,
  pub glyph: String,
  pub gloss: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WordRow {
  pub level: String,
  pub reading: String,
  pub glyphs: String,
}

/// Question text templates. `{subject}` is replaced by the tested glyph(s).
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub mc_char: String,
  pub free_char: String,
  pub mc_word: String,
  pub free_word: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      mc_char: "다음 한자의 음과 뜻을 고르시오: {subject}".into(),
      free_char: "다음 한자의 음과 뜻을 쓰시오: {subject}".into(),
      mc_word: "다음 한자어의 독음을 고르시오: {subject}".into(),
      free_word: "다음 한자어의 독음을 쓰시오: {subject}".into(),
    }
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config file {path}: {source}")]
  Parse {
    path: String,
    #[source]
    source: toml::de::Error,
  },
}

pub fn load_config(path: impl AsRef<Path>) -> Result<QuizConfig, ConfigError> {
  let path = path.as_ref();
  let display = path.display().to_string();
  let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read { path: display.clone(), source })?;
  toml::from_str(&text).map_err(|source| ConfigError::Parse { path: display, source })
}

/// Load `QuizConfig` from QUIZ_CONFIG_PATH. Unset, unreadable or malformed yields None.
pub fn load_config_from_env() -> Option<QuizConfig> {
  let path = std::env::var("QUIZ_CONFIG_PATH").ok()?;
  match load_config(&path) {
    Ok(cfg) => {
      info!(target: "hanja_quiz", %path, characters = cfg.characters.len(), words = cfg.words.len(), "Loaded quiz config (TOML)");
      Some(cfg)
    }
    Err(e) => {
      error!(target: "hanja_quiz", %path, error = %e, "Failed to load quiz config");
      None
    }
  }
}
