//! LibreCCM Kernel
//!
//! Serves the content type registry and offers CLI listings of it.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use clap::{Parser, Subcommand};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use libreccm_kernel::{AppState, Config, cli, routes};

/// LibreCCM content type registry.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the content type API (default).
    Serve,
    /// List content types that have an authoring kit.
    ContentTypes {
        /// Locale for labels (defaults to DEFAULT_LOCALE).
        #[arg(long)]
        locale: Option<String>,
    },
    /// List installed modules in load order.
    Modules,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(modules_dir = %config.modules_dir.display(), "Configuration loaded");

    let state = AppState::new(&config).context("failed to initialize application state")?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, state).await,
        Command::ContentTypes { locale } => cli::cmd_content_types(&state, locale.as_deref()),
        Command::Modules => cli::cmd_modules(&state),
    }
}

async fn serve(config: &Config, state: AppState) -> Result<()> {
    let cors = build_cors_layer(config);
    let app = routes::app(state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::OPTIONS];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
