//! ActorEntity trait implementation for the Pizza domain type.
//!
//! Pizzas carry no custom actions and no dependencies; the actor only creates,
//! lists and looks them up.

use super::error::PizzaError;
use crate::framework::ActorEntity;
use crate::model::{Pizza, PizzaCreate, PizzaId};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Pizza {
    type Id = PizzaId;
    type Create = PizzaCreate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = PizzaError;

    /// Creates a new Pizza from creation parameters.
    ///
    /// Rejects a blank name; ingredients are free-form and may be empty.
    fn from_create_params(id: PizzaId, params: PizzaCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(PizzaError::ValidationError("name must not be blank".into()));
        }
        Ok(Self::new(id, name, params.ingredients))
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_create_params_trims_name() {
        let params = PizzaCreate {
            name: "  Melanie ".into(),
            ingredients: "Dough, Sauce, Ricotta, Red peppers, Mustard".into(),
        };
        let pizza = Pizza::from_create_params(PizzaId(3), params).unwrap();
        assert_eq!(pizza, Pizza::new(PizzaId(3), "Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"));
    }

    #[test]
    fn test_from_create_params_rejects_blank_name() {
        let params = PizzaCreate {
            name: "   ".into(),
            ingredients: String::new(),
        };
        assert!(matches!(
            Pizza::from_create_params(PizzaId(1), params),
            Err(PizzaError::ValidationError(_))
        ));
    }
}
