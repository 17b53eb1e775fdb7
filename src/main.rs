use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{error, info};

use wayfarer_core::prelude::*;

mod web;

#[derive(Parser, Debug)]
#[command(
    name = "wayfarer",
    version,
    about = "Shortest-path routing server over OSM road networks"
)]
struct Args {
    /// Path to the road network snapshot
    #[arg(long = "network", value_name = "PATH")]
    network: PathBuf,

    /// Port to listen on
    #[arg(long, default_value_t = 2845)]
    port: u16,

    /// Heuristic used to guide the search
    #[arg(long, value_enum, default_value_t = Heuristic::CrowFlies)]
    heuristic: Heuristic,

    /// Number of ALT landmarks, used with `--heuristic landmarks`
    #[arg(long, default_value_t = 16)]
    landmarks: usize,

    /// Maximum legal road speed in km/h, bounds the crow-flies estimate
    #[arg(long, default_value_t = DEFAULT_MAX_SPEED_KMH)]
    max_speed: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Heuristic {
    /// Plain Dijkstra
    None,
    /// A-star with the straight-line bound
    CrowFlies,
    /// A-star with ALT landmark bounds
    Landmarks,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = ModelConfig::new(args.network.clone());
    let model = create_road_model(&config).context("failed to load the road model")?;

    let policy = match args.heuristic {
        Heuristic::None => HeuristicPolicy::None,
        Heuristic::CrowFlies => HeuristicPolicy::CrowFlies {
            max_speed_kmh: args.max_speed,
        },
        Heuristic::Landmarks => HeuristicPolicy::Landmarks {
            amount: args.landmarks,
        },
    };
    let factory = Arc::new(ComputationFactory::new(Arc::clone(&model.graph), policy));
    let handler = Arc::new(RequestHandler::new(model.graph, factory, model.database));

    let app = web::create_router(web::AppState::new(handler));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Routing server ready and waiting for clients on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("Routing server shut down");
    Ok(())
}

/// Resolves once ctrl-c is received; in-flight requests are allowed to
/// complete.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for the shutdown signal: {e}");
    }
}
