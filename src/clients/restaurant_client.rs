//! # Restaurant Client
//!
//! Provides a high-level API for interacting with the `Restaurant` actor,
//! including the `AddPizza` action that creates associations.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{PizzaId, Price, Restaurant, RestaurantCreate, RestaurantId};
use crate::restaurant_actor::{PizzaAdded, RestaurantAction, RestaurantError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    /// Creates a restaurant and returns it as stored.
    #[instrument(skip(self))]
    pub async fn create_restaurant(
        &self,
        params: RestaurantCreate,
    ) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get(id)
            .await?
            .ok_or_else(|| RestaurantError::NotFound(id.to_string()))
    }

    /// Offers `pizza_id` at `restaurant_id` for `price`.
    ///
    /// Fails with [`RestaurantError::NotFound`] when the restaurant does not exist and
    /// [`RestaurantError::PizzaNotFound`] when the pizza does not.
    #[instrument(skip(self))]
    pub async fn add_pizza(
        &self,
        restaurant_id: RestaurantId,
        pizza_id: PizzaId,
        price: Price,
    ) -> Result<PizzaAdded, RestaurantError> {
        debug!("Adding pizza {} to {} at {}", pizza_id, restaurant_id, price);
        self.inner
            .perform_action(restaurant_id, RestaurantAction::AddPizza { price, pizza_id })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => RestaurantError::NotFound(id),
            other => other
                .into_entity_error::<RestaurantError>()
                .unwrap_or_else(|e| RestaurantError::ActorCommunicationError(e.to_string())),
        }
    }
}
