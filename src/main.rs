use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use warroom::api::{self, AppState};
use warroom::config::ServerConfig;
use warroom::{mcp, MemStorage, Storage};

#[derive(Parser)]
#[command(name = "warroom")]
#[command(about = "Business war room dashboard backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Username of the demo user every request acts as
        #[arg(long, default_value = "demo")]
        demo_user: String,

        /// Email of the demo user
        #[arg(long)]
        demo_email: Option<String>,
    },
    /// Start MCP server via stdio
    Mcp {
        /// Username of the demo user tools act as
        #[arg(long, default_value = "demo")]
        demo_user: String,
    },
    /// Check whether a server is listening
    Status {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "warroom=debug,warroom_core=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            demo_user,
            demo_email,
        }) => {
            let defaults = ServerConfig::default();
            let config = ServerConfig {
                host,
                port,
                demo_username: demo_user,
                demo_email: demo_email.or(defaults.demo_email),
                ..defaults
            };
            serve(config.with_env_integrations()).await?;
        }
        Some(Commands::Mcp { demo_user }) => {
            let config = ServerConfig {
                demo_username: demo_user,
                ..Default::default()
            };
            let storage = MemStorage::new();
            let user = storage.create_user(config.demo_user())?;

            mcp::run_stdio_server(Arc::new(storage), user.id).await?;
        }
        Some(Commands::Status { host, port }) => {
            let addr = format!("{}:{}", host, port);
            match tokio::net::TcpStream::connect(&addr).await {
                Ok(_) => println!("War Room server is listening on {}", addr),
                Err(e) => println!("No War Room server on {}: {}", addr, e),
            }
        }
        None => {
            serve(ServerConfig::default().with_env_integrations()).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr()?;
    tracing::info!("Starting War Room server on {}", addr);
    config.warn_missing_integrations();

    let storage = MemStorage::new();
    let user = storage.create_user(config.demo_user())?;
    tracing::info!(user_id = %user.id, username = %user.username, "demo user ready");

    let state = AppState::new(Arc::new(storage), user.id).with_integrations(config.integrations);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("War Room server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
