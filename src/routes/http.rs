//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs its parameters and basic result info.

use std::sync::Arc;
use axum::{extract::{Path, Query, State}, Json, response::IntoResponse};
use tracing::{debug, info, instrument};

use crate::domain::{CharacterEntry, Level, Question, QuestionKind};
use crate::generator::QuestionRequest;
use crate::grading;
use crate::protocol::*;
use crate::random::thread_source;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_root() -> impl IntoResponse {
  Json(MessageOut { message: "한자 학습 API".into() })
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip_all)]
pub async fn http_get_grades(State(state): State<Arc<AppState>>) -> Json<Vec<Level>> {
  Json(state.catalog.levels())
}

#[instrument(level = "info", skip_all, fields(%grade))]
pub async fn http_get_hanja_by_grade(
  State(state): State<Arc<AppState>>,
  Path(grade): Path<String>,
) -> Json<Vec<CharacterEntry>> {
  let entries = match Level::parse(&grade) {
    Some(level) => state.catalog.characters_at(level).into_iter().cloned().collect(),
    None => {
      debug!(target: "hanja_quiz", %grade, "Unknown grade requested");
      Vec::new()
    }
  };
  Json(entries)
}

#[instrument(level = "info", skip_all, fields(%character))]
pub async fn http_get_hanja_by_character(
  State(state): State<Arc<AppState>>,
  Path(character): Path<String>,
) -> Json<Option<CharacterEntry>> {
  Json(state.catalog.find_character(&character).cloned())
}

#[instrument(level = "info", skip_all, fields(%grade, count = q.count))]
pub async fn http_post_multiple_choice(
  State(state): State<Arc<AppState>>,
  Path(grade): Path<String>,
  Query(q): Query<QuestionQuery>,
) -> Json<Vec<Question>> {
  Json(questions_for(&state, QuestionKind::McChar, &grade, &q))
}

#[instrument(level = "info", skip_all, fields(%grade, count = q.count))]
pub async fn http_post_subjective(
  State(state): State<Arc<AppState>>,
  Path(grade): Path<String>,
  Query(q): Query<QuestionQuery>,
) -> Json<Vec<Question>> {
  Json(questions_for(&state, QuestionKind::FreeChar, &grade, &q))
}

#[instrument(level = "info", skip_all, fields(%grade, count = q.count))]
pub async fn http_post_word_multiple_choice(
  State(state): State<Arc<AppState>>,
  Path(grade): Path<String>,
  Query(q): Query<QuestionQuery>,
) -> Json<Vec<Question>> {
  Json(questions_for(&state, QuestionKind::McWord, &grade, &q))
}

#[instrument(level = "info", skip_all, fields(%grade, count = q.count))]
pub async fn http_post_word_subjective(
  State(state): State<Arc<AppState>>,
  Path(grade): Path<String>,
  Query(q): Query<QuestionQuery>,
) -> Json<Vec<Question>> {
  Json(questions_for(&state, QuestionKind::FreeWord, &grade, &q))
}

#[instrument(level = "info", skip_all, fields(user_len = body.user_answer.len(), expected_len = body.correct_answer.len()))]
pub async fn http_post_check_answer(Json(body): Json<AnswerCheckIn>) -> Json<AnswerCheckOut> {
  let result = grading::grade(&body.user_answer, &body.correct_answer);
  info!(target: "grading", correct = result.correct, score = result.score, "HTTP check_answer graded");
  Json(result.into())
}

/// Unknown grades answer with an empty list rather than an error.
fn questions_for(state: &AppState, kind: QuestionKind, grade: &str, q: &QuestionQuery) -> Vec<Question> {
  let Some(level) = Level::parse(grade) else {
    debug!(target: "quiz", %grade, ?kind, "Unknown grade requested");
    return Vec::new();
  };
  let req = QuestionRequest::new(level, q.count).with_subject(q.character.as_deref());
  state.generator().generate(kind, &req, &mut thread_source())
}
