//! HTTP surface of the catalog, built on `axum`.
//!
//! Handlers receive an [`AppState`] holding the [`Catalog`](crate::catalog::Catalog)
//! handle; there is no global state.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::{Server, ServerConfig};
pub use state::AppState;
