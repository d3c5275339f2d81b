use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nepsin_translator::config::{ApiKey, Config};
use nepsin_translator::state::AppState;
use nepsin_translator::{console, routes};

#[derive(Parser)]
#[command(name = "nepsin-translator")]
#[command(about = "Nepali & Sinhala to English translation using Gemini")]
struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run the interactive terminal translator instead of the web UI
    #[arg(long)]
    console: bool,

    /// Override the listen address from the config file
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port from the config file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nepsin_translator=debug,tower_http=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.system_config.host = host;
    }
    if let Some(port) = cli.port {
        config.system_config.port = port;
    }

    // Fatal before any surface starts
    let api_key = ApiKey::from_env(&config.translator_config.api_key_env)?;
    let app_state = AppState::new(config.clone(), api_key);

    if cli.console {
        let stdin = BufReader::new(tokio::io::stdin());
        return console::run(&app_state.translator, stdin, tokio::io::stdout()).await;
    }

    let app = routes::app(app_state);

    let host: std::net::IpAddr = config
        .system_config
        .host
        .parse()
        .map_err(|e| anyhow::anyhow!("host must be a valid IP address: {}", e))?;
    let addr = SocketAddr::from((host, config.system_config.port));
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
