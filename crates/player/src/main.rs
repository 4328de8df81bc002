//! Kidsapp Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kidsapp_player::config::PlayerConfig;
use kidsapp_player::infrastructure::platform::create_platform;
use kidsapp_player::runner::PlayerSession;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use kidsapp_player::cli::{execute, Cli};

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kidsapp_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = PlayerConfig::from_env();
    tracing::debug!(?config, "Starting Kidsapp Player");

    let platform = create_platform(&config);
    let mut session = PlayerSession::start(platform)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut session, cli.command, &mut out)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Kidsapp Player");

    let platform = create_platform(&PlayerConfig::default());
    match PlayerSession::start(platform) {
        Ok(session) => tracing::info!(
            activities = session.catalog.compose_catalog().len(),
            location = %session.locations.current_location().name,
            "Catalog ready"
        ),
        Err(e) => tracing::error!("Failed to load base catalog: {}", e),
    }
}
