use metro_server::builder::{NetworkSpec, build_network, kyiv_metro};
use metro_server::config::ServerConfig;
use metro_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_server=info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load the network definition (built-in Kyiv metro unless overridden)
    let spec = match &config.network_path {
        Some(path) => {
            info!(path = %path.display(), "Loading network definition");
            NetworkSpec::load(path).expect("Failed to load network definition")
        }
        None => kyiv_metro(),
    };

    let network = build_network(&spec, &config.network).expect("Failed to build network");
    info!(
        stations = network.len(),
        connections = network.edge_count(),
        hop_mins = config.network.hop_mins,
        transfer_mins = config.network.transfer_mins,
        "Network ready"
    );

    // Build app state and router
    let state = AppState::new(network);
    let app = create_router(state);

    // Bind and serve
    let addr = config.bind;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");

    info!("Metro planner listening on http://{addr}");
    info!("  GET /health                          - Health check");
    info!("  GET /stations                        - List stations");
    info!("  GET /route?from=&to=&mode=           - Find a route (fastest|bfs|dfs)");
    info!("  GET /analysis?top=                   - Network statistics");

    axum::serve(listener, app).await.expect("Server error");
}
