//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber once, at startup.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` / `Shutdown`, with `entity_type`
//! - **Entity Operations**: `Created`, `Deleted` and `Action ok` at `info`; every
//!   request at `debug`
//! - **Client Calls**: typed client methods run inside `#[instrument]` spans
//! - **HTTP**: one span per request from `tower_http`'s `TraceLayer`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Default: info, plus request/response lines from tower_http
//! cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # Quiet HTTP, verbose actors
//! RUST_LOG=pizza_catalog::framework=debug,tower_http=warn cargo run
//! ```
//!
//! With the defaults, creating an association logs:
//!
//! ```text
//! DEBUG request{method=POST uri=/restaurant_pizzas version=HTTP/1.1}: started processing request
//! INFO request{..}:create_restaurant_pizza{..}: Action ok entity_type="Restaurant" id=restaurant_1
//! DEBUG request{..}: finished processing request latency=1 ms status=201
//! ```
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
