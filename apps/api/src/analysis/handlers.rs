//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::analyze;
use crate::analysis::models::AnalysisReport;
use crate::analysis::vocabulary::SkillDataset;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct JobRolesResponse {
    pub roles: Vec<String>,
}

/// Parsed `multipart/form-data` body of POST /analyze.
#[derive(Debug)]
struct UploadForm {
    file_name: String,
    data: Bytes,
    job_role: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /job-roles
///
/// Lists every role in the skills dataset, in dataset order.
pub async fn handle_job_roles(
    State(state): State<AppState>,
) -> Result<Json<JobRolesResponse>, AppError> {
    let dataset = load_dataset(&state).await?;
    Ok(Json(JobRolesResponse {
        roles: dataset.role_names(),
    }))
}

/// POST /analyze
///
/// Multipart fields: `file` (PDF or text resume) and `job_role`.
/// Dataset load → role lookup → text extraction → pure analysis.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let request_id = Uuid::new_v4();
    let form = read_upload_form(multipart).await?;

    info!(
        %request_id,
        job_role = %form.job_role,
        file_name = %form.file_name,
        bytes = form.data.len(),
        "Resume analysis requested"
    );

    let dataset = load_dataset(&state).await?;

    let role = dataset.role_skills(&form.job_role).ok_or_else(|| {
        warn!(%request_id, job_role = %form.job_role, "Unknown job role");
        AppError::RoleNotFound(form.job_role.clone())
    })?;

    let raw_text = state
        .extractor
        .extract_text(&form.file_name, form.data)
        .await?;

    let vocabulary = dataset.vocabulary();
    let report = analyze(
        &raw_text,
        &form.job_role,
        &role.skills,
        &vocabulary,
        dataset.aliases(),
    );

    info!(
        %request_id,
        overall_score = report.overall_score,
        match_percentage = report.skills_analysis.match_percentage,
        tips = report.improvement_tips.len(),
        "Resume analysis complete"
    );

    Ok(Json(report))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn load_dataset(state: &AppState) -> Result<SkillDataset, AppError> {
    SkillDataset::load(
        &state.config.skills_dataset_path,
        &state.config.alias_dataset_path,
    )
    .await
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut job_role: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid file upload: {e}")))?;
                file = Some((file_name, data));
            }
            Some("job_role") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid job_role field: {e}")))?;
                job_role = Some(text);
            }
            _ => {}
        }
    }

    let (file_name, data) =
        file.ok_or_else(|| AppError::Validation("file is required".to_string()))?;
    // A present but blank role is left to the role lookup.
    let job_role =
        job_role.ok_or_else(|| AppError::Validation("job_role is required".to_string()))?;

    Ok(UploadForm {
        file_name,
        data,
        job_role,
    })
}
