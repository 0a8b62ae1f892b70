//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`CatalogSystem`] - Spawns the actors behind a [`Catalog`](crate::catalog::Catalog) and shuts them down
//! - [`AppConfig`] - Settings read from the environment
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//! - [`seed_demo_data`] - Fills an empty catalog with demo records

pub mod catalog_system;
pub mod config;
pub mod seed;
pub mod tracing;

pub use catalog_system::*;
pub use config::*;
pub use seed::*;
pub use self::tracing::*;
