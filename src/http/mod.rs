//! JSON-over-HTTP transport.
//!
//! Handlers parse requests, resolve the bearer token to a current user, call
//! one application service, and map its error kind onto a status code.
//! Errors render as `{"error": CODE, "message": text}`.

mod error;
mod extract;
mod handlers;
mod routes;
mod state;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use extract::AuthenticatedUser;
pub use routes::{router, serve};
pub use state::AppState;
