mod config;
mod errors;
mod fit;
mod insights;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::fit::roles::RoleConfig;
use crate::insights::dataset::SkillDataset;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillFit API v{}", env!("CARGO_PKG_VERSION"));

    // Role profiles + advice (static for the life of the process)
    let role_config = match &config.role_profiles_path {
        Some(path) => {
            let loaded = RoleConfig::load(path)?;
            info!("Role profiles loaded from {}", path.display());
            loaded
        }
        None => {
            info!("ROLE_PROFILES_PATH not set, using built-in role profiles");
            RoleConfig::builtin()
        }
    };
    info!("{} role profiles available", role_config.catalog.len());

    // Optional skill frequency dataset
    let dataset = match &config.skills_data_path {
        Some(path) => {
            let dataset = SkillDataset::load(path)?;
            info!(
                "Skills dataset loaded from {} ({} records)",
                path.display(),
                dataset.len()
            );
            Some(Arc::new(dataset))
        }
        None => {
            info!("SKILLS_DATA_PATH not set, insights endpoints disabled");
            None
        }
    };

    let state = AppState {
        roles: Arc::new(role_config.catalog),
        advice: Arc::new(role_config.advice),
        dataset,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
