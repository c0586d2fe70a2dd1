//! Huddle entity service.
//!
//! Serves the users/profiles/posts REST API over an in-memory database.
//! Nothing is persisted across restarts.
//!
//! Usage:
//!   huddle-api --port 3000

use anyhow::Result;
use clap::Parser;
use huddle_api::{build_router, AppState};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "huddle-api")]
#[command(about = "REST API over the in-memory Huddle entity store")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let app = build_router(AppState::new());
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!(port = args.port, "huddle-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
