//! HTTP surface for the student registry.
//!
//! Builds the axum [`Router`](axum::Router) that maps method + path + JSON
//! body onto registry operations and registry errors onto status codes.

mod error;
mod middleware;
mod routes;
mod types;

pub use middleware::REQUEST_ID_HEADER;
pub use routes::router;
pub use types::{ErrorResponse, HealthResponse};
