//! Axum route handlers for the Enhancement API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::Deserialize;

use crate::enhancement::enhancer::{clean_text, enhance_resume, EnhanceRequest, EnhanceResponse};
use crate::enhancement::export::{build_download_payload, download_filename};
use crate::enhancement::keyword_matcher::MatchResult;
use crate::enhancement::segmenter::{segment_opt, SegmentedReply};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SegmentRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JdMatchRequest {
    #[serde(default)]
    pub jd_text: Option<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub job_role: String,
    #[serde(default)]
    pub segmented: SegmentedReply,
    #[serde(default)]
    pub raw_output: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/enhance
///
/// Full pipeline: prompt → model → segment → before/after → JD match.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let response = enhance_resume(state.llm.as_ref(), state.fit_scorer.as_ref(), request).await?;
    Ok(Json(response))
}

/// POST /api/v1/segment
///
/// Segments an already-obtained model reply. No model call.
pub async fn handle_segment(Json(request): Json<SegmentRequest>) -> Json<SegmentedReply> {
    Json(segment_opt(request.text.as_deref()))
}

/// POST /api/v1/jd-match
///
/// Local keyword overlap between a job description and a resume. No model call.
pub async fn handle_jd_match(
    State(state): State<AppState>,
    Json(request): Json<JdMatchRequest>,
) -> Json<MatchResult> {
    let jd_text = clean_text(request.jd_text.as_deref());
    let resume_text = clean_text(request.resume_text.as_deref());
    Json(state.fit_scorer.score(&jd_text, &resume_text))
}

/// POST /api/v1/export
///
/// Returns the plain-text download as an attachment.
pub async fn handle_export(Json(request): Json<ExportRequest>) -> Result<Response, AppError> {
    let job_role = clean_text(Some(request.job_role.as_str()));
    if job_role.is_empty() {
        return Err(AppError::Validation("job_role cannot be empty".to_string()));
    }

    let payload = build_download_payload(&request.segmented, &request.raw_output);
    let filename = download_filename(&job_role, Local::now().naive_local());
    // Header values must be visible ASCII.
    let filename: String = filename
        .chars()
        .filter(|c| c.is_ascii_graphic() && *c != '"')
        .collect();
    let disposition = format!("attachment; filename=\"{filename}\"");

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payload,
    )
        .into_response())
}
