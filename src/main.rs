use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use saga_core::config::{hero_default_from_env_value, seed_path_from_env_value};
use saga_core::{CoreConfig, SiteState};

const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Main entry point for the saga site
///
/// Seeds the in-memory catalog and serves the REST API until the process is stopped.
///
/// # Environment Variables
/// - `SAGA_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `SAGA_SEED_CATALOG`: YAML seed catalog to start from (default: the bundled catalog)
/// - `SAGA_HERO_IMAGE`: default hero cover URL (default: the bundled image)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, seeding or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("saga=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = rest_addr_from_env_value(std::env::var("SAGA_REST_ADDR").ok());
    let seed_path = seed_path_from_env_value(std::env::var("SAGA_SEED_CATALOG").ok())?;
    let hero_default = hero_default_from_env_value(std::env::var("SAGA_HERO_IMAGE").ok());

    let cfg = CoreConfig::new(seed_path, hero_default)?;
    let site = SiteState::initialise(&cfg)?;

    tracing::info!("++ Starting saga REST on {}", rest_addr);
    api_rest::serve(&rest_addr, AppState::new(site)).await
}

fn rest_addr_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_REST_ADDR.into())
}
