//! Shared handler state.

use crate::auth::TokenService;
use crate::bootstrap::Services;
use std::sync::Arc;

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Application services.
    pub services: Services,
    /// Bearer token issuer and verifier.
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// Creates handler state.
    #[must_use]
    pub const fn new(services: Services, tokens: Arc<TokenService>) -> Self {
        Self { services, tokens }
    }
}
