// src/main.rs
//! Userhub server entry point
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use userhub::api::{manifest, AppServer};
use userhub::config::AppEnvConfig;

#[derive(Parser)]
#[command(name = "userhub")]
#[command(about = "User registration and login server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Serve {
        /// Port to bind the server to (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging()?;

    info!("Starting userhub v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppEnvConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    if let Some(Commands::Serve { port: Some(port) }) = args.command {
        info!("Port overridden on the command line: {}", port);
        config.port = port;
    }

    info!(
        "Loaded {} dependencies, token expiry {} minutes",
        manifest::dependency_count(),
        config.auth.token_expiry_minutes
    );

    AppServer::new(config)?.start().await
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=info,h2=info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
