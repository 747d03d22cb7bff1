//! Salary Breakup API server.
//!
//! Loads the template catalogue and serves the breakup endpoints.
//!
//! Environment:
//! - `SALARY_CONFIG_DIR`: configuration directory (default `./config/default`)
//! - `SALARY_BIND_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use salary_breakup::api::{AppState, create_router};
use salary_breakup::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("SALARY_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        std::env::var("SALARY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {}", config_dir))?;
    info!(
        config_dir = %config_dir,
        templates = config.templates().len(),
        pf_employee_limit = %config.statutory().pf_employee_limit,
        esic_employee_limit = %config.statutory().esic_employee_limit,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    info!(addr = %bind_addr, "Salary breakup API listening");

    axum::serve(listener, router).await?;
    Ok(())
}
