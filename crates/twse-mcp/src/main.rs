//! TWSE MCP Server - Taiwan Stock Exchange OpenAPI via Model Context Protocol
//!
//! # Usage
//!
//! ## stdio transport (for Claude Desktop, local use)
//! ```bash
//! twse-mcp-server
//! twse-mcp-server --config twse.toml
//! ```
//!
//! ## HTTP transport (for remote hosting)
//! ```bash
//! twse-mcp-server --http --port 8000
//! ```
//!
//! Environment variables (`TWSE_API_BASE_URL`, `TWSE_API_TIMEOUT`,
//! `DISPLAY_LIMIT`, ...) override the config file.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use twse_client::TwseClient;
use twse_mcp::{AppConfig, TwseMcpServer};

/// TWSE MCP Server - Taiwan Stock Exchange OpenAPI tools
#[derive(Parser, Debug)]
#[command(name = "twse-mcp-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Use HTTP transport instead of stdio (for remote hosting)
    #[arg(long)]
    http: bool,

    /// HTTP port (only used with --http)
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// HTTP host to bind to (only used with --http)
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("twse_mcp=debug,twse_client=debug,rmcp=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("twse_mcp=info,twse_client=info,rmcp=warn"))
    };

    // stdout carries the protocol on stdio
    if args.http {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let config = AppConfig::load(args.config.as_deref())?;
    let client = TwseClient::new(&config.client)?;
    tracing::info!(
        base_url = %config.client.base_url,
        interval = ?config.client.request_interval(),
        "Starting TWSE MCP Server"
    );

    let server = TwseMcpServer::new(Arc::new(client), config.display);
    tracing::info!("Registered {} tools", server.registry().len());

    if args.http {
        run_http_server(server, &args.host, args.port).await
    } else {
        run_stdio_server(server).await
    }
}

/// Run the server with stdio transport
async fn run_stdio_server(server: TwseMcpServer) -> anyhow::Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    tracing::info!("Using stdio transport");

    let service = server.serve(stdio()).await?;

    tracing::info!("TWSE MCP Server ready");

    service.waiting().await?;

    Ok(())
}

/// Run the server with HTTP transport (for remote hosting)
#[cfg(feature = "http")]
async fn run_http_server(server: TwseMcpServer, host: &str, port: u16) -> anyhow::Result<()> {
    use axum::Router;
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    };
    use tower_http::cors::{Any, CorsLayer};

    tracing::info!("Using HTTP transport on {}:{}", host, port);

    // Sessions share the registry, the HTTP client and its rate limiter.
    let mcp_service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .nest_service("/mcp", mcp_service)
        .route("/health", axum::routing::get(health_check))
        .layer(cors);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("TWSE MCP Server listening on http://{}/mcp", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to install CTRL+C handler: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}

/// Health check endpoint for HTTP transport
#[cfg(feature = "http")]
async fn health_check() -> &'static str {
    "OK"
}

/// Fallback when HTTP feature is not enabled
#[cfg(not(feature = "http"))]
async fn run_http_server(_server: TwseMcpServer, _host: &str, _port: u16) -> anyhow::Result<()> {
    anyhow::bail!("HTTP transport not available. Rebuild with: cargo build --features http")
}
