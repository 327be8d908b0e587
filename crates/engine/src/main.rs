//! Blockbustr Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blockbustr_engine::infrastructure::{
    clock::SystemClock,
    library::{SqliteCollectionRepo, SqliteMovieRepo},
    openai::{OpenAiClient, DEFAULT_OPENAI_BASE_URL},
    ports::{ClockPort, SettingsRepo},
    settings::SqliteSettingsRepo,
    tmdb::{TmdbClient, DEFAULT_TMDB_BASE_URL},
};
use blockbustr_engine::{api, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blockbustr_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Blockbustr Engine");

    // Load configuration
    let openai_url =
        std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.into());
    let tmdb_url = std::env::var("TMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_TMDB_BASE_URL.into());
    let library_db = std::env::var("LIBRARY_DB").unwrap_or_else(|_| "blockbustr.db".into());
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .unwrap_or(3000);

    // Clock for storage timestamps
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

    // Local storage
    let settings_repo: Arc<dyn SettingsRepo> =
        Arc::new(SqliteSettingsRepo::new(&library_db, clock.clone()).await?);
    let movie_repo = Arc::new(SqliteMovieRepo::new(&library_db).await?);
    let collection_repo = Arc::new(SqliteCollectionRepo::new(&library_db).await?);

    // External service clients
    let openai = Arc::new(OpenAiClient::new(&openai_url, settings_repo.clone()));
    let tmdb = Arc::new(TmdbClient::new(&tmdb_url));

    // Create application
    let app = Arc::new(App::new(
        openai.clone(),
        openai,
        tmdb,
        movie_repo,
        collection_repo,
        settings_repo,
    ));

    // CORS for the desktop/web frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = api::routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app);

    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
