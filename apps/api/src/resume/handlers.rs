use anyhow::Context;
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info};
use uuid::Uuid;

use crate::drafts::{clear_drafts, draft_limit, load_drafts, save_draft};
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::form::counter::counter_for;
use crate::form::notice::{Notice, NoticeLevel};
use crate::form::policy::{form_fields, is_tracked, DEFAULT_POLICY, TRACKED_FIELDS};
use crate::form::shortcuts::resolve_shortcut;
use crate::form::submit::{plan_submission, SubmitPlan};
use crate::form::validator::validate_field;
use crate::resume::builder::build_resume;
use crate::resume::models::{
    DraftUpdate, DraftsResponse, FormSchemaResponse, ResumeData, ResumeSubmission,
    ShortcutRequest, ShortcutResponse, ValidateFieldRequest, ValidateFieldResponse,
};
use crate::state::AppState;

/// GET /api/v1/form
pub async fn handle_form_schema(State(state): State<AppState>) -> Json<FormSchemaResponse> {
    Json(FormSchemaResponse {
        fields: form_fields(),
        default_policy: DEFAULT_POLICY,
        submit_behavior: state.config.submit_behavior,
    })
}

/// POST /api/v1/form/validate
pub async fn handle_validate_field(
    ApiJson(req): ApiJson<ValidateFieldRequest>,
) -> Result<Json<ValidateFieldResponse>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("Field name is required".to_string()));
    }
    let result = validate_field(&req.name, &req.value);
    let counter = counter_for(&req.name, &req.value);
    Ok(Json(ValidateFieldResponse {
        field: req.name,
        result,
        counter,
    }))
}

/// POST /api/v1/form/submit
pub async fn handle_submit_plan(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ResumeSubmission>,
) -> Result<Json<SubmitPlan>, AppError> {
    let plan = plan_submission(req.fields.pairs(), state.config.submit_behavior);
    debug!(
        "Submit plan: proceed={} first_invalid={:?}",
        plan.proceed, plan.validation.first_invalid
    );

    if plan.clear_drafts {
        if let Some(scope) = req.draft_scope {
            clear_drafts(state.drafts.open(scope).as_ref(), TRACKED_FIELDS).await?;
        }
    }
    Ok(Json(plan))
}

/// POST /api/v1/form/shortcut
pub async fn handle_shortcut(ApiJson(req): ApiJson<ShortcutRequest>) -> Json<ShortcutResponse> {
    Json(ShortcutResponse {
        action: resolve_shortcut(&req.key, req.ctrl_or_meta, req.page),
    })
}

/// POST /api/v1/resume
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ResumeSubmission>,
) -> Result<Json<ResumeData>, AppError> {
    let fields = req.fields;
    let data = tokio::task::spawn_blocking(move || build_resume(fields))
        .await
        .context("Resume analysis task failed")??;

    if let Some(scope) = req.draft_scope {
        clear_drafts(state.drafts.open(scope).as_ref(), TRACKED_FIELDS).await?;
        info!("Cleared drafts for scope {scope} after resume {}", data.id);
    }
    Ok(Json(data))
}

/// GET /api/v1/drafts/:scope
pub async fn handle_get_drafts(
    State(state): State<AppState>,
    ApiPath(scope): ApiPath<Uuid>,
) -> Result<Json<DraftsResponse>, AppError> {
    let drafts = load_drafts(state.drafts.open(scope).as_ref(), TRACKED_FIELDS).await?;
    let notice = (!drafts.is_empty()).then(|| {
        Notice::new(
            NoticeLevel::Info,
            format!("Restored saved draft for {} field(s).", drafts.len()),
        )
    });
    Ok(Json(DraftsResponse {
        scope,
        drafts,
        notice,
    }))
}

/// PUT /api/v1/drafts/:scope/:field
pub async fn handle_save_draft(
    State(state): State<AppState>,
    ApiPath((scope, field)): ApiPath<(Uuid, String)>,
    ApiJson(req): ApiJson<DraftUpdate>,
) -> Result<StatusCode, AppError> {
    if !is_tracked(&field) {
        return Err(AppError::NotFound(format!("Unknown form field '{field}'")));
    }
    let limit = draft_limit(&field);
    if req.value.chars().count() > limit {
        return Err(AppError::Validation(format!(
            "Draft for '{field}' must not exceed {limit} characters"
        )));
    }
    save_draft(state.drafts.open(scope).as_ref(), &field, &req.value).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/drafts/:scope
pub async fn handle_clear_drafts(
    State(state): State<AppState>,
    ApiPath(scope): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    clear_drafts(state.drafts.open(scope).as_ref(), TRACKED_FIELDS).await?;
    Ok(StatusCode::NO_CONTENT)
}
