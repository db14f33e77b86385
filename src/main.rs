mod config;
mod connection;
mod event;
mod handlers;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "startup configuration invalid");
            std::process::exit(1);
        }
    };

    let state = state::AppState::new(config);
    let addr = state.config.bind_addr();

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "socketdemo listening");
    axum::serve(listener, app).await.expect("server failed");
}
