//! ActorEntity trait implementation for the Restaurant domain type.
//!
//! Includes the `AddPizza` action, which resolves the pizza through the
//! [`PizzaClient`](crate::clients::PizzaClient) injected in the context.

use super::actions::{PizzaAdded, RestaurantAction};
use super::error::RestaurantError;
use super::RestaurantContext;
use crate::clients::ActorClient;
use crate::framework::ActorEntity;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantPizza};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Action = RestaurantAction;
    type ActionResult = PizzaAdded;
    type Context = RestaurantContext;
    type Error = RestaurantError;

    /// Creates a new Restaurant from creation parameters.
    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(RestaurantError::ValidationError(
                "name must not be blank".into(),
            ));
        }
        Ok(Self::new(id, name, params.address))
    }

    /// The associations go with the restaurant: they are part of the record the
    /// actor removes right after this hook.
    async fn on_delete(&self, _ctx: &RestaurantContext) -> Result<(), Self::Error> {
        info!(
            restaurant_id = %self.id,
            associations = self.restaurant_pizzas.len(),
            "Cascading delete"
        );
        Ok(())
    }

    /// Handles custom actions for the Restaurant entity.
    ///
    /// # Actions
    /// - `AddPizza`: looks the pizza up, assigns a fresh association id and appends
    ///   the association. Nothing is appended if the pizza is missing.
    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        ctx: &RestaurantContext,
    ) -> Result<PizzaAdded, Self::Error> {
        match action {
            RestaurantAction::AddPizza { price, pizza_id } => {
                let pizza = ctx
                    .pizzas
                    .get(pizza_id)
                    .await?
                    .ok_or(RestaurantError::PizzaNotFound(pizza_id))?;

                let restaurant_pizza = RestaurantPizza {
                    id: ctx.association_ids.next_id(),
                    price,
                    restaurant_id: self.id,
                    pizza_id,
                };
                debug!(?restaurant_pizza, "Adding pizza");
                self.restaurant_pizzas.push(restaurant_pizza.clone());

                Ok(PizzaAdded {
                    restaurant_pizza,
                    pizza,
                    restaurant: self.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_create_params_starts_without_associations() {
        let params = RestaurantCreate {
            name: " Sanjay's Pizza ".into(),
            address: "address2".into(),
        };
        let restaurant = Restaurant::from_create_params(RestaurantId(2), params).unwrap();
        assert_eq!(restaurant.name, "Sanjay's Pizza");
        assert!(restaurant.restaurant_pizzas.is_empty());
    }

    #[test]
    fn test_from_create_params_rejects_blank_name() {
        let params = RestaurantCreate {
            name: String::new(),
            address: "address2".into(),
        };
        assert!(matches!(
            Restaurant::from_create_params(RestaurantId(2), params),
            Err(RestaurantError::ValidationError(_))
        ));
    }
}
