use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lexi_app::{AppState, routes, telemetry};
use lexi_config::Config;
use lexi_config::log::LogFormat;
use tokio::net::TcpListener;
use tokio::signal;

#[derive(Parser, Debug)]
#[command(name = "lexi", version, about = "English/French translation dictionary server")]
struct Args {
    /// JSON config file; replaces the LEXI_* environment defaults
    #[arg(long, env = "LEXI_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long)]
    listen: Option<SocketAddr>,

    /// Disable cross-origin requests
    #[arg(long)]
    no_cors: bool,

    /// Start with an empty dictionary
    #[arg(long)]
    no_seed: bool,

    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Word list (.csv, .txt, .xlsx, ...) to load before serving; repeatable
    #[arg(long = "import")]
    imports: Vec<PathBuf>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(Config, Vec<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::new(),
        };

        if let Some(listen) = self.listen {
            config.server.listen = listen;
        }
        if self.no_cors {
            config.server.cors = false;
        }
        if self.no_seed {
            config.seed_sample_data = false;
        }
        if let Some(format) = self.log_format {
            config.log.format = format;
        }

        Ok((config, self.imports))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (config, imports) = Args::parse().into_config()?;
    telemetry::init(&config.log);

    let listen = config.server.listen;
    let state = Arc::new(AppState::new(config));
    load_initial_words(&state, &imports).await?;

    let app = routes::build_router(Arc::clone(&state));
    let listener = TcpListener::bind(listen)
        .await
        .with_context(|| format!("failed to bind {listen}"))?;

    tracing::info!(%listen, "lexi listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn load_initial_words(state: &AppState, imports: &[PathBuf]) -> anyhow::Result<()> {
    let mut dictionary = state.dictionary.write().await;

    if state.config.seed_sample_data {
        dictionary.seed_sample_data()?;
    }

    for path in imports {
        let pairs = lexi_import::load_file(path)
            .with_context(|| format!("failed to import {}", path.display()))?;
        let summary = dictionary.import(&pairs, 0)?;
        tracing::info!(path = %path.display(), words = summary.word_count, "imported word list");
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl+c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
