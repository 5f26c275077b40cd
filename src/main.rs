use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod auth;
mod config;
mod database;
mod error;
mod handlers;
mod middleware;
mod services;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT settings.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();
    tracing::info!("Starting Movie API in {:?} mode", config.environment);

    // Create the movies table up front so a fresh database works out of the box
    if let Err(e) = crate::database::manager::DatabaseManager::ensure_schema().await {
        tracing::warn!("schema bootstrap failed, requests may error until the database is reachable: {}", e);
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("MOVIE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Movie API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::public::home::message))
        .route("/health", get(handlers::public::home::health))
        .merge(login_routes())
        .merge(movie_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn login_routes() -> Router {
    use axum::routing::post;
    use handlers::public::login;

    Router::new().route("/login", post(login::login))
}

fn movie_routes() -> Router {
    use axum::handler::Handler;
    use handlers::{protected, public::movies};

    // The full listing is the only endpoint behind the bearer-token gate;
    // the remaining movie operations are intentionally unauthenticated.
    let gated_list = protected::movies::list
        .layer(axum::middleware::from_fn(middleware::auth::admin_gate));

    Router::new()
        .route("/movies", get(gated_list).post(movies::create))
        .route("/movies/", get(movies::by_category))
        .route(
            "/movies/:id",
            get(movies::show).put(movies::update).delete(movies::remove),
        )
}
