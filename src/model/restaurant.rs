//! Represents a restaurant in the catalog.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! A restaurant is the aggregate root of its [`RestaurantPizza`] associations: they are stored
//! inside it, so creating one and deleting the restaurant along with all of them are each a
//! single message to the restaurant actor.
//!
//! See [`impl ActorEntity for Restaurant`](#impl-ActorEntity-for-Restaurant) for details on:
//! - Creation parameters ([`RestaurantCreate`])
//! - Custom actions ([`RestaurantAction`](crate::restaurant_actor::RestaurantAction))
use crate::model::RestaurantPizza;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(pub u32);

impl From<u32> for RestaurantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    /// Associations in creation order.
    pub restaurant_pizzas: Vec<RestaurantPizza>,
}

impl Restaurant {
    /// Creates a restaurant with no associations yet.
    pub fn new(id: RestaurantId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            restaurant_pizzas: Vec::new(),
        }
    }
}

/// Payload for creating a new restaurant.
#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub address: String,
}
