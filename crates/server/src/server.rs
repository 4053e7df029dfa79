use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use std::sync::Arc;

use crate::{product, user};
use catalog::Catalog;

#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<Catalog>,
}

async fn hello() -> &'static str {
    "Hello World"
}

/// Build the application router.
///
/// Public so HTTP-level tests can drive it without binding a socket.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/login", post(user::login))
        .route("/api/products", get(product::list))
        .route("/api/products/add", post(product::add))
        .route("/api/products/{id}", get(product::get))
        .route("/api/products/update/{id}", put(product::update))
        .route("/api/products/delete/{id}", delete(product::delete))
        // The original service ran behind a permissive CORS policy; keep it.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(catalog: Catalog) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:5000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(catalog, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    catalog: Catalog,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        catalog: Arc::new(catalog),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    catalog: Catalog,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(catalog, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
