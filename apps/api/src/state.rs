use std::sync::Arc;

use crate::enhancement::keyword_matcher::FitScorer;
use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn LanguageModel>,
    /// Pluggable fit scorer. Default: KeywordMatcher bound to KEYWORD_MIN_LENGTH.
    pub fit_scorer: Arc<dyn FitScorer>,
}
