//! # Pizza Actor
//!
//! Owns the pizza menu. The simplest actor in the system: no dependencies
//! (`Context = ()`) and no custom actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Pizza`]
//! - [`error`] - [`PizzaError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use pizza_catalog::pizza_actor;
//! use pizza_catalog::model::PizzaCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = pizza_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = PizzaCreate {
//!         name: "Emma".to_string(),
//!         ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
//!     };
//!     let pizza = client.create_pizza(params).await?;
//!     assert_eq!(pizza.name, "Emma");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PizzaClient;
use crate::framework::ResourceActor;
use crate::model::Pizza;

/// Creates a new Pizza actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Pizza>, PizzaClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PizzaClient::new(generic_client))
}
