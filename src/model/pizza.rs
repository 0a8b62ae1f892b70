//! Represents a pizza on the catalog menu.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Pizzas are referenced by [`RestaurantPizza`](crate::model::RestaurantPizza) records and
//! are never deleted, so a reference that resolved once keeps resolving.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Pizzas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PizzaId(pub u32);

impl From<u32> for PizzaId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PizzaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pizza_{}", self.0)
    }
}

/// Wire shape: `{id, name, ingredients}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    /// Free-form, comma separated ingredient names.
    pub ingredients: String,
}

impl Pizza {
    pub fn new(id: PizzaId, name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ingredients: ingredients.into(),
        }
    }
}

/// Payload for creating a new pizza.
#[derive(Debug, Clone, Deserialize)]
pub struct PizzaCreate {
    pub name: String,
    pub ingredients: String,
}
