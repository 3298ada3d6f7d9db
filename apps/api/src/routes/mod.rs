pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::fit::handlers as fit;
use crate::insights::handlers as insights;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Fit API
        .route("/api/v1/roles", get(fit::handle_list_roles))
        .route("/api/v1/roles/:role", get(fit::handle_get_role))
        .route("/api/v1/fit", post(fit::handle_fit))
        // Insights API
        .route(
            "/api/v1/insights/categories",
            get(insights::handle_categories),
        )
        .route(
            "/api/v1/insights/top-skills",
            get(insights::handle_top_skills),
        )
        .route(
            "/api/v1/insights/hire-overlap",
            post(insights::handle_hire_overlap),
        )
        .with_state(state)
}
