use std::sync::Arc;

use crate::fit::advice::AdviceBook;
use crate::fit::roles::RoleCatalog;
use crate::insights::dataset::SkillDataset;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is loaded at start-up and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub roles: Arc<RoleCatalog>,
    pub advice: Arc<AdviceBook>,
    /// `None` when `SKILLS_DATA_PATH` is unset; insights endpoints then 404.
    pub dataset: Option<Arc<SkillDataset>>,
}
