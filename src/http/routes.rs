//! Route table and server loop.

use super::AppState;
use super::handlers::{auth, health, messages, statuses, tasks, users};
use axum::Router;
use axum::routing::{get, patch, post};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/users", get(users::list))
        .route("/users/me", get(users::me))
        .route("/users/{id}", patch(users::update))
        .route("/statuses", get(statuses::list))
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route("/tasks/{id}", get(tasks::get).patch(tasks::update))
        .route("/tasks/{id}/status", patch(tasks::update_status))
        .route(
            "/tasks/{id}/messages",
            get(messages::list).post(messages::post),
        )
        .with_state(state)
}

/// Serves `router` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(address) = listener.local_addr() {
        info!(%address, "http server listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("http server stopped");
    Ok(())
}
