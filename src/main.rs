use crate::config::AppConfig;
use crate::database::mongo::MongoRepository;
use crate::database::LocationRepository;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::routing::get_service;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
mod database;
mod domain;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn LocationRepository>,
    pub config: Arc<AppConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pinpoint_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // load centralized config
    let config = AppConfig::from_env();
    let shared_config = Arc::new(config.clone());

    // connect before accepting any traffic; the repository pings the database,
    // so a bad URI or an unreachable server fails here, not mid-request
    let repo = match MongoRepository::connect(&config.mongo_uri).await {
        Ok(repo) => repo,
        Err(e) => {
            tracing::error!("MongoDB connection error: {e:#}");
            std::process::exit(1);
        }
    };
    tracing::info!("MongoDB connected");

    let app_state = AppState {
        repo: Arc::new(repo),
        config: shared_config.clone(),
    };

    let app = build_app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on port {}", config.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

// router assembly, shared with the API tests
pub fn build_app(state: AppState) -> Router {
    let pages = state.config.pages_path.clone();

    // anything that isn't a named route is looked up in the pages directory,
    // and only then falls through to the plain-text 404; non-GET methods take
    // the same fall-through instead of a bare 405
    let static_pages = ServeDir::new(&pages)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found_handler.into_service());

    // api router, where features are composed
    let api_router = features::locations::locations_router();

    Router::new()
        .nest("/api", api_router)
        .route("/", page_route(pages.join("index.html")))
        .route("/list", page_route(pages.join("list.html")))
        .route("/about", page_route(pages.join("about.html")))
        .fallback_service(static_pages)
        .with_state(state)
}

// pages answer GET (and HEAD) only; any other method is an unmatched route
fn page_route(file: std::path::PathBuf) -> axum::routing::MethodRouter<AppState> {
    get_service(ServeFile::new(file)).fallback(not_found_handler)
}

async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
