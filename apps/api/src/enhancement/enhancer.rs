//! Resume Enhancement — orchestrates a single enhancement request.
//!
//! Flow: clean inputs → validate → build prompt → LLM call → error-marker check →
//!       segment → original bullets → before/after → JD keyword match.
//!
//! Nothing is persisted. Every value is computed fresh and returned by value.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::enhancement::keyword_matcher::{FitScorer, MatchResult};
use crate::enhancement::original_bullets::{
    compare_bullets, extract_original_bullets, BulletComparison,
};
use crate::enhancement::prompts::build_prompt;
use crate::enhancement::segmenter::{segment, SegmentedReply};
use crate::errors::AppError;
use crate::llm_client::{is_error_reply, LanguageModel};

/// Request body for resume enhancement.
#[derive(Debug, Clone, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub job_role: Option<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub jd_text: Option<String>,
}

/// Everything a presentation layer needs to render one enhancement.
#[derive(Debug, Clone, Serialize)]
pub struct EnhanceResponse {
    pub job_role: String,
    pub segmented: SegmentedReply,
    pub raw_output: String,
    pub original_bullets: Vec<String>,
    pub comparison: Vec<BulletComparison>,
    /// Present only when a job description was supplied.
    pub jd_match: Option<MatchResult>,
}

/// Trims surrounding whitespace; an absent value becomes empty.
pub fn clean_text(text: Option<&str>) -> String {
    text.map(str::trim).unwrap_or_default().to_string()
}

/// Runs the full enhancement pipeline against `model`.
pub async fn enhance_resume(
    model: &dyn LanguageModel,
    scorer: &dyn FitScorer,
    request: EnhanceRequest,
) -> Result<EnhanceResponse, AppError> {
    let job_role = clean_text(request.job_role.as_deref());
    let resume_text = clean_text(request.resume_text.as_deref());
    let jd_text = clean_text(request.jd_text.as_deref());

    if job_role.is_empty() || resume_text.is_empty() {
        return Err(AppError::Validation(
            "Please enter both a target job role and your resume text.".to_string(),
        ));
    }

    let jd = (!jd_text.is_empty()).then_some(jd_text.as_str());
    let prompt = build_prompt(&resume_text, &job_role, jd);

    info!(
        "Requesting enhancement for role '{}' (model: {}, jd: {})",
        job_role,
        model.model_name(),
        jd.is_some()
    );

    let raw_output = model
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_error_reply()))?;

    if is_error_reply(&raw_output) {
        return Err(AppError::Llm(raw_output));
    }

    let segmented = segment(&raw_output);
    if segmented.is_empty() {
        warn!("Model reply contained no recognisable sections");
    }

    let original_bullets = extract_original_bullets(&resume_text);
    let comparison = compare_bullets(&original_bullets, &segmented.bullets);

    let jd_match = jd.map(|jd| scorer.score(jd, &resume_text));
    if let Some(result) = &jd_match {
        info!(
            "JD match ({}): {}/100, {} matched, {} missing",
            scorer.backend(),
            result.score,
            result.matched.len(),
            result.missing.len()
        );
    }

    Ok(EnhanceResponse {
        job_role,
        segmented,
        raw_output,
        original_bullets,
        comparison,
        jd_match,
    })
}
