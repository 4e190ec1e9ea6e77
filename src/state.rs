//! Application state: the catalog snapshot, prompts and server options.
//!
//! Everything here is built once at startup and never mutated afterwards, so
//! handlers share it through an `Arc` without locks.

use tracing::{info, instrument};

use crate::catalog::Catalog;
use crate::config::{load_config_from_env, Prompts, QuizConfig, ServerCfg};
use crate::generator::QuestionGenerator;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub catalog: Catalog,
    pub prompts: Prompts,
    pub server: ServerCfg,
}

impl AppState {
    /// Build state from env: load config, then the catalog (config rows or seeds).
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_config_from_env();
        Self::from_config(cfg.as_ref())
    }

    pub fn from_config(cfg: Option<&QuizConfig>) -> Self {
        let catalog = Catalog::from_config(cfg);
        let prompts = cfg.map(|c| c.prompts.clone()).unwrap_or_default();
        let server = cfg.map(|c| c.server.clone()).unwrap_or_default();
        info!(target: "hanja_quiz", cors_origins = server.cors_origins.len(), "Application state ready");
        Self { catalog, prompts, server }
    }

    pub fn generator(&self) -> QuestionGenerator<'_> {
        QuestionGenerator::new(&self.catalog, &self.prompts)
    }
}
