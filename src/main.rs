use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wortkarten::{config, handlers, state::AppState, storage::Store};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wortkarten=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let (library_path, state_path) = config::load_data_paths();
  let scheduler = config::load_scheduler_config();

  let store = Store::open(&library_path, state_path).expect("Failed to open document store");
  tracing::info!("Loaded library with {} words", store.library.len());

  let app_state = AppState::new(store, scheduler);

  let app = handlers::api_router(app_state)
    .fallback_service(ServeDir::new("public"))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http());

  let bind_addr = config::server_bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", config::SERVER_PORT);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
