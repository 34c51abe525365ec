use ai_use_cases::{config::Config, http::start_http_server, server::UseCasesServer};
use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "ai-use-cases", about = "MCP server for collecting and categorizing AI use cases")]
struct Args {
    /// Transport to serve on: stdio or http
    #[arg(long)]
    transport: Option<String>,

    /// Bind address for the HTTP transport (e.g. 127.0.0.1:3000)
    #[arg(long)]
    bind: Option<std::net::SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    ai_use_cases::load_env();

    let mut config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    if let Some(transport) = args.transport {
        config.runtime.transport = transport;
    }
    if let Some(bind) = args.bind {
        config.runtime.http_bind = bind;
    }

    tracing_subscriber::fmt()
        .with_env_filter(config.runtime.log_level.clone())
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting AI Use Cases MCP Server");

    let server = UseCasesServer::new(&config).await.map_err(|e| {
        eprintln!("Failed to create server: {}", e);
        e
    })?;

    match config.runtime.transport.as_str() {
        "http" => {
            start_http_server(server).await?;
        }
        _ => {
            let service = server.clone().serve(stdio()).await.map_err(|e| {
                eprintln!("Failed to start MCP service: {}", e);
                e
            })?;
            info!("MCP server ready on stdio - waiting for requests");
            service.waiting().await?;
            server.shutdown().await;
        }
    }

    Ok(())
}
