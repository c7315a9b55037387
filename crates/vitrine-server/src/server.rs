//! API server setup and shared state.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use vitrine_render::BundleBuilder;
use vitrine_store::{ProjectStore, StoreError};

use crate::routes;

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory holding the project collection
    pub data_dir: PathBuf,

    /// Directory published sites are written to and served from
    pub publish_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4400,
            data_dir: PathBuf::from("data"),
            publish_dir: PathBuf::from("sites"),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {0}: {1}")]
    InvalidAddr(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Server error: {0}")]
    Serve(String),

    #[error("Failed to open store: {0}")]
    Store(#[from] StoreError),
}

struct StateInner {
    store: ProjectStore,
    builder: BundleBuilder,
    publish_dir: PathBuf,
}

/// Shared handler state: the open store, the bundle builder and the publish
/// directory. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

impl AppState {
    /// Build state from an open store and a publish directory.
    pub fn new(store: ProjectStore, publish_dir: PathBuf) -> Self {
        Self {
            inner: Arc::new(StateInner {
                store,
                builder: BundleBuilder::new(),
                publish_dir,
            }),
        }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.inner.store
    }

    pub fn builder(&self) -> &BundleBuilder {
        &self.inner.builder
    }

    pub fn publish_dir(&self) -> &PathBuf {
        &self.inner.publish_dir
    }
}

/// Build the application router. Published sites are served as static files
/// under `/sites`; everything else is the JSON API.
pub fn router(state: AppState) -> Router {
    let publish_dir = state.publish_dir().clone();

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route(
            "/api/projects",
            post(routes::create_project).get(routes::list_projects),
        )
        .route(
            "/api/projects/{id}",
            get(routes::get_project).put(routes::update_project),
        )
        .route("/api/projects/{id}/export.zip", get(routes::export_project))
        .route("/api/projects/{id}/publish", post(routes::publish_project))
        .route("/api/generate-image", post(routes::generate_image))
        .nest_service("/sites", ServeDir::new(publish_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The API server.
pub struct ApiServer {
    config: ServerConfig,
}

impl ApiServer {
    /// Create a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Open the store, bind and serve until shutdown.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr_str = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = addr_str
            .parse()
            .map_err(|e: std::net::AddrParseError| ServerError::InvalidAddr(addr_str, e.to_string()))?;

        let store = ProjectStore::open(&self.config.data_dir)?;
        let state = AppState::new(store, self.config.publish_dir.clone());

        let app = router(state);

        tracing::info!("Starting vitrine API at http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Serve(e.to_string()))?;

        Ok(())
    }
}
