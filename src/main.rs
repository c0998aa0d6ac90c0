use anyhow::{anyhow, Result};
use hostcrab::api::AppState;
use hostcrab::host_store::DynHostStore;
use hostcrab::reload::DynReloader;
use hostcrab::{CommandReloader, Config, FileHostStore, SharedConfig, TokenSigner};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let mut first_args = std::env::args().take(2);
    let (program_name, config_file) = (
        first_args.next().unwrap_or("hostcrab".to_string()),
        first_args.next(),
    );

    let config = config_init(&program_name, config_file)?;

    let file_store = FileHostStore::try_from_file(&config.hosts_path).await?;
    tracing::info!("managing hosts in {}", file_store.path().display());
    let host_store: DynHostStore = Arc::new(RwLock::new(file_store));
    let reloader: DynReloader = Arc::new(CommandReloader::new(&config.reload_command)?);
    let tokens = Arc::new(TokenSigner::new(&config.token_secret, config.token_ttl));

    tracing::info!("API listening on {}", &config.api_bind_addr);
    let state = AppState {
        config,
        host_store,
        reloader,
        tokens,
    };
    hostcrab::api::new(state, shutdown_signal())?.await?;

    tracing::info!("goodbye");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!("unable to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("quitting from signal");
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hostcrab=info,tower_http=info".into()),
        )
        .init();
}

fn config_init(program_name: &str, config_file: Option<String>) -> Result<SharedConfig> {
    match config_file {
        None => Err(anyhow!("usage: {program_name} /path/to/config.json")),
        Some(config_file) => {
            let config = Config::try_from_file(&config_file)?;
            tracing::debug!("loaded config from {config_file}");
            Ok(Arc::new(config))
        }
    }
}
