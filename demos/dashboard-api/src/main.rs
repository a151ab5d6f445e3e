mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = std::env::var("DASHBOARD_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    tracing::info!(%data_dir, "loading dashboard tables");
    let dashboard = ecommerce_dashboard::AsyncDashboard::builder()
        .data_dir(&data_dir)
        .build()
        .await
        .expect("Failed to load dashboard tables");

    let state = Arc::new(AppState { dashboard });

    let app = Router::new()
        .route("/api/bounds", get(routes::bounds::get_bounds))
        .route("/api/report", get(routes::report::get_report))
        .route("/api/report/narrative", get(routes::report::get_narrative))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = "0.0.0.0:3000";
    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
