//! Static server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

/// Port used when nothing else selects one.
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration for the static server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory to serve
    pub root: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// IP address to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
            port: DEFAULT_PORT,
            host: "127.0.0.1".to_string(),
            open: false,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Directory not found: {}. Run 'folio render' first.", .0.display())]
    RootNotFound(PathBuf),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Server error: {0}")]
    ServeError(String),
}

/// Static file server.
pub struct StaticServer {
    config: ServerConfig,
}

impl StaticServer {
    /// Create a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Bind and serve until Ctrl+C.
    pub async fn start(self) -> Result<(), ServerError> {
        if !self.config.root.is_dir() {
            return Err(ServerError::RootNotFound(self.config.root.clone()));
        }

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        let url = format!("http://localhost:{}", self.config.port);
        tracing::info!("Resume website running at {}", url);
        tracing::info!("Serving {}", self.config.root.display());
        tracing::info!("Press Ctrl+C to stop the server");

        if self.config.open {
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        axum::serve(listener, router(self.config.root))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        Ok(())
    }
}

/// Build the router for a static root.
///
/// `/` serves `index.html`; other paths resolve to files under the root.
/// Anything unmatched, whatever the method, gets a plain-text 404.
pub fn router(root: PathBuf) -> Router {
    let files = ServeDir::new(&root)
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(index_handler).fallback(not_found))
        .fallback_service(files)
        .with_state(Arc::new(root))
}

/// Handler for the root page.
async fn index_handler(State(root): State<Arc<PathBuf>>) -> Response {
    let index_path = root.join("index.html");

    match tokio::fs::read_to_string(&index_path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", index_path.display(), e);
            not_found().await.into_response()
        }
    }
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutting down");
    }
}
