//! # Restaurant Actor
//!
//! Owns restaurants together with the pizzas they offer ([`RestaurantPizza`] associations).
//!
//! ## Overview
//!
//! A restaurant is the aggregate root of its associations. Because one actor processes
//! every restaurant message sequentially:
//!
//! - adding an association (reference check + id + insert) is one message, and
//! - deleting a restaurant removes it and all of its associations in one message.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Restaurant`]
//! - [`error`] - [`RestaurantError`] type for type-safe error handling
//! - [`actions`] - [`RestaurantAction`] and its [`PizzaAdded`] result
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor depends on the Pizza actor (to resolve `pizza_id`) and on a shared
//! [`AssociationIds`] sequence, injected through [`RestaurantContext`] at `run()` time.
//! The Pizza actor depends on nothing, so the graph is acyclic.
//!
//! ## Usage
//!
//! ```rust
//! use pizza_catalog::model::{PizzaCreate, Price, RestaurantCreate};
//! use pizza_catalog::restaurant_actor::{self, AssociationIds, RestaurantContext};
//! use pizza_catalog::pizza_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (pizza_actor, pizzas) = pizza_actor::new(32);
//!     let (restaurant_actor, restaurants) = restaurant_actor::new(32);
//!
//!     tokio::spawn(pizza_actor.run(()));
//!     tokio::spawn(restaurant_actor.run(RestaurantContext {
//!         pizzas: pizzas.clone(),
//!         association_ids: AssociationIds::new(),
//!     }));
//!
//!     let pizza = pizzas
//!         .create_pizza(PizzaCreate { name: "Geri".into(), ingredients: "Dough, Cheese".into() })
//!         .await?;
//!     let restaurant = restaurants
//!         .create_restaurant(RestaurantCreate { name: "Kiki's Pizza".into(), address: "address3".into() })
//!         .await?;
//!
//!     let added = restaurants.add_pizza(restaurant.id, pizza.id, Price::new(10)?).await?;
//!     assert_eq!(added.pizza, pizza);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{PizzaClient, RestaurantClient};
use crate::framework::ResourceActor;
use crate::model::{Restaurant, RestaurantPizzaId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Sequence of association ids, shared by every restaurant so ids are unique
/// across the whole catalog. Starts at 1.
#[derive(Debug, Clone)]
pub struct AssociationIds(Arc<AtomicU32>);

impl AssociationIds {
    pub fn new() -> Self {
        Self(Arc::new(AtomicU32::new(1)))
    }

    pub fn next_id(&self) -> RestaurantPizzaId {
        RestaurantPizzaId(self.0.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for AssociationIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Runtime dependencies of the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantContext {
    pub pizzas: PizzaClient,
    pub association_ids: AssociationIds,
}

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RestaurantClient::new(generic_client))
}
