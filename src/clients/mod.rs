//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod pizza_client;
pub mod restaurant_client;

pub use actor_client::*;
pub use pizza_client::*;
pub use restaurant_client::*;
