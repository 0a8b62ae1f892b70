//! # Catalog
//!
//! The entity store as the rest of the application sees it: one cloneable handle over
//! the Restaurant and Pizza actors, speaking in [`CatalogError`] instead of per-actor errors.
//!
//! Associations live inside their restaurant, so every association query is answered by
//! the Restaurant actor and every mutation is a single message to it.

use crate::clients::{ActorClient, PizzaClient, RestaurantClient};
use crate::model::{
    Pizza, PizzaCreate, PizzaId, PriceOutOfRange, Restaurant, RestaurantCreate, RestaurantId,
    RestaurantPizza, RestaurantPizzaCreate, RestaurantPizzaId,
};
use crate::pizza_actor::PizzaError;
use crate::restaurant_actor::{PizzaAdded, RestaurantError};
use crate::serialization::{RestaurantDetail, RestaurantPizzaWithPizza};
use std::collections::HashMap;
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Restaurant,
    Pizza,
    RestaurantPizza,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Restaurant => "Restaurant",
            EntityKind::Pizza => "Pizza",
            EntityKind::RestaurantPizza => "RestaurantPizza",
        };
        f.write_str(name)
    }
}

/// Errors of the catalog operations.
///
/// `NotFound` is about the id that was asked for; `ReferenceNotFound` is about an id
/// an association points at. Both display as `"<Entity> not found"`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("{entity} not found")]
    NotFound { entity: EntityKind, id: String },

    #[error("{entity} not found")]
    ReferenceNotFound { entity: EntityKind, id: String },

    #[error(transparent)]
    Restaurant(RestaurantError),

    #[error(transparent)]
    Pizza(PizzaError),

    #[error(transparent)]
    InvalidPrice(#[from] PriceOutOfRange),
}

impl CatalogError {
    fn not_found(entity: EntityKind, id: impl Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    fn reference_not_found(entity: EntityKind, id: impl Display) -> Self {
        Self::ReferenceNotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<RestaurantError> for CatalogError {
    fn from(e: RestaurantError) -> Self {
        match e {
            RestaurantError::NotFound(id) => Self::NotFound {
                entity: EntityKind::Restaurant,
                id,
            },
            RestaurantError::PizzaNotFound(id) => Self::reference_not_found(EntityKind::Pizza, id),
            RestaurantError::PizzaLookup(e) => Self::Pizza(e),
            other => Self::Restaurant(other),
        }
    }
}

impl From<PizzaError> for CatalogError {
    fn from(e: PizzaError) -> Self {
        match e {
            PizzaError::NotFound(id) => Self::NotFound {
                entity: EntityKind::Pizza,
                id,
            },
            other => Self::Pizza(other),
        }
    }
}

/// Handle to the catalog. Cheap to clone; every clone talks to the same actors.
#[derive(Clone)]
pub struct Catalog {
    restaurants: RestaurantClient,
    pizzas: PizzaClient,
}

impl Catalog {
    pub fn new(restaurants: RestaurantClient, pizzas: PizzaClient) -> Self {
        Self {
            restaurants,
            pizzas,
        }
    }

    pub async fn get_restaurant(&self, id: RestaurantId) -> Result<Restaurant, CatalogError> {
        self.restaurants
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Restaurant, id))
    }

    /// Restaurants in creation order.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CatalogError> {
        Ok(self.restaurants.list().await?)
    }

    /// Removes the restaurant together with all of its associations.
    #[instrument(skip(self))]
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<(), CatalogError> {
        Ok(self.restaurants.delete(id).await?)
    }

    pub async fn create_restaurant(
        &self,
        params: RestaurantCreate,
    ) -> Result<Restaurant, CatalogError> {
        Ok(self.restaurants.create_restaurant(params).await?)
    }

    /// Pizzas in creation order.
    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, CatalogError> {
        Ok(self.pizzas.list().await?)
    }

    pub async fn get_pizza(&self, id: PizzaId) -> Result<Pizza, CatalogError> {
        self.pizzas
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Pizza, id))
    }

    pub async fn create_pizza(&self, params: PizzaCreate) -> Result<Pizza, CatalogError> {
        Ok(self.pizzas.create_pizza(params).await?)
    }

    /// Associations of one restaurant; empty when the restaurant does not exist.
    pub async fn list_restaurant_pizzas_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<RestaurantPizza>, CatalogError> {
        Ok(self
            .restaurants
            .get(restaurant_id)
            .await?
            .map(|restaurant| restaurant.restaurant_pizzas)
            .unwrap_or_default())
    }

    /// Every association in the catalog, in creation order.
    ///
    /// Taken from a single `List` of the restaurant actor, so the result is a
    /// consistent snapshot.
    pub async fn list_all_restaurant_pizzas(&self) -> Result<Vec<RestaurantPizza>, CatalogError> {
        let mut all: Vec<RestaurantPizza> = self
            .restaurants
            .list()
            .await?
            .into_iter()
            .flat_map(|restaurant| restaurant.restaurant_pizzas)
            .collect();
        all.sort_by_key(|restaurant_pizza| restaurant_pizza.id);
        Ok(all)
    }

    pub async fn get_restaurant_pizza(
        &self,
        id: RestaurantPizzaId,
    ) -> Result<RestaurantPizza, CatalogError> {
        self.list_all_restaurant_pizzas()
            .await?
            .into_iter()
            .find(|restaurant_pizza| restaurant_pizza.id == id)
            .ok_or_else(|| CatalogError::not_found(EntityKind::RestaurantPizza, id))
    }

    /// Stores a validated association.
    ///
    /// Both references are resolved inside the restaurant actor while it handles the
    /// request, so nothing is stored when either is missing. A missing restaurant is
    /// reported before a missing pizza.
    #[instrument(skip(self))]
    pub async fn create_restaurant_pizza(
        &self,
        params: RestaurantPizzaCreate,
    ) -> Result<PizzaAdded, CatalogError> {
        let RestaurantPizzaCreate {
            price,
            restaurant_id,
            pizza_id,
        } = params;

        let added = self
            .restaurants
            .add_pizza(restaurant_id, pizza_id, price)
            .await
            .map_err(|e| match e {
                RestaurantError::NotFound(id) => CatalogError::ReferenceNotFound {
                    entity: EntityKind::Restaurant,
                    id,
                },
                other => CatalogError::from(other),
            })?;
        debug!(id = %added.restaurant_pizza.id, "Association stored");
        Ok(added)
    }

    /// The restaurant with each association joined to its current pizza.
    pub async fn restaurant_detail(
        &self,
        id: RestaurantId,
    ) -> Result<RestaurantDetail, CatalogError> {
        let restaurant = self.get_restaurant(id).await?;
        let pizzas: HashMap<PizzaId, Pizza> = self
            .list_pizzas()
            .await?
            .into_iter()
            .map(|pizza| (pizza.id, pizza))
            .collect();

        let restaurant_pizzas = restaurant
            .restaurant_pizzas
            .iter()
            .map(|restaurant_pizza| {
                pizzas
                    .get(&restaurant_pizza.pizza_id)
                    .cloned()
                    .map(|pizza| RestaurantPizzaWithPizza::new(restaurant_pizza, pizza))
                    .ok_or_else(|| {
                        CatalogError::reference_not_found(EntityKind::Pizza, restaurant_pizza.pizza_id)
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RestaurantDetail::new(&restaurant, restaurant_pizzas))
    }
}
