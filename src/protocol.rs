//! Public HTTP request/response structs (serde ready).
//! `Question` and `CharacterEntry` from `domain` are sent as-is.

use serde::{Deserialize, Serialize};

use crate::domain::GradeResult;
use crate::generator::DEFAULT_COUNT;

#[derive(Debug, Deserialize)]
pub struct QuestionQuery {
    #[serde(default = "default_count")]
    pub count: usize,
    /// Restrict to one glyph (or glyph sequence for word questions).
    #[serde(default)]
    pub character: Option<String>,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

#[derive(Debug, Deserialize)]
pub struct AnswerCheckIn {
    pub user_answer: String,
    pub correct_answer: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AnswerCheckOut {
    pub is_correct: bool,
    pub score: u32,
    pub similarity: f64,
}

impl From<GradeResult> for AnswerCheckOut {
    fn from(r: GradeResult) -> Self {
        Self { is_correct: r.correct, score: r.score, similarity: r.similarity }
    }
}

#[derive(Serialize)]
pub struct MessageOut {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
