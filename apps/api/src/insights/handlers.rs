//! Axum route handlers for the Insights API. All of them answer 404 when no
//! dataset was configured at start-up.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::{AppError, AppJson, AppQuery};
use crate::insights::dataset::{HireOverlap, SkillDataset, SkillRecord};
use crate::state::AppState;

pub const DEFAULT_TOP_LIMIT: usize = 15;
pub const MAX_TOP_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct TopSkillsQuery {
    /// Comma-separated category names; absent or blank means all.
    pub categories: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct HireOverlapRequest {
    pub skills: Vec<String>,
}

fn dataset(state: &AppState) -> Result<&SkillDataset, AppError> {
    state
        .dataset
        .as_deref()
        .ok_or_else(|| AppError::NotFound("Skills dataset is not configured".to_string()))
}

fn parse_categories(raw: Option<&str>) -> Option<Vec<String>> {
    let categories: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    (!categories.is_empty()).then_some(categories)
}

/// GET /api/v1/insights/categories
pub async fn handle_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(dataset(&state)?.categories()))
}

/// GET /api/v1/insights/top-skills?categories=a,b&limit=n
pub async fn handle_top_skills(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TopSkillsQuery>,
) -> Result<Json<Vec<SkillRecord>>, AppError> {
    let dataset = dataset(&state)?;

    let limit = query.limit.unwrap_or(DEFAULT_TOP_LIMIT);
    if limit == 0 || limit > MAX_TOP_LIMIT {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_TOP_LIMIT}"
        )));
    }

    let categories = parse_categories(query.categories.as_deref());
    Ok(Json(dataset.top_skills(categories.as_deref(), limit)))
}

/// POST /api/v1/insights/hire-overlap
pub async fn handle_hire_overlap(
    State(state): State<AppState>,
    AppJson(request): AppJson<HireOverlapRequest>,
) -> Result<Json<HireOverlap>, AppError> {
    Ok(Json(dataset(&state)?.hire_overlap(&request.skills)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories_trims_and_drops_blanks() {
        assert_eq!(
            parse_categories(Some(" Technical, ,Soft ,")),
            Some(vec!["Technical".to_string(), "Soft".to_string()])
        );
    }

    #[test]
    fn test_parse_categories_blank_means_all() {
        assert_eq!(parse_categories(None), None);
        assert_eq!(parse_categories(Some(" , ")), None);
    }
}
