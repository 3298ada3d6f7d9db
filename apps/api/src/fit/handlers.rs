//! Axum route handlers for the Fit API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppJson};
use crate::fit::advice::{pro_tip, SkillAdvice};
use crate::fit::evaluator::{evaluate, FitReport};
use crate::fit::roles::RoleProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FitRequest {
    /// Comma-separated skills as typed by the user. May be empty.
    #[serde(default)]
    pub skills: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct FitResponse {
    pub role: String,
    pub fit_report: FitReport,
    pub advice: Vec<SkillAdvice>,
    pub pro_tip: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleProfile>> {
    Json(state.roles.iter().cloned().collect())
}

/// GET /api/v1/roles/:role
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<RoleProfile>, AppError> {
    state
        .roles
        .get(&role)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Role '{role}' not found")))
}

/// POST /api/v1/fit
///
/// Scores the user's skills against one role and attaches display advice
/// for whatever is missing. Empty `skills` is not an error: it scores 0.
pub async fn handle_fit(
    State(state): State<AppState>,
    AppJson(request): AppJson<FitRequest>,
) -> Result<Json<FitResponse>, AppError> {
    if state.roles.get(&request.role).is_none() {
        return Err(AppError::NotFound(format!(
            "Role '{}' not found",
            request.role
        )));
    }

    let fit_report = evaluate(&request.skills, &request.role, &state.roles);
    debug!(
        role = %request.role,
        score = fit_report.score,
        missing = fit_report.missing.len(),
        "Evaluated skill fit"
    );

    let advice = state.advice.advice_for(&fit_report.missing);
    let pro_tip = pro_tip(&fit_report);

    Ok(Json(FitResponse {
        role: request.role,
        fit_report,
        advice,
        pro_tip,
    }))
}
