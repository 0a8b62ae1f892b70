//! Custom actions for the Restaurant actor.
//!
//! Associations live inside their restaurant, so adding one is an action on the
//! restaurant rather than a create on a separate actor. That keeps the reference
//! check, the id assignment and the insert in one message.

use crate::model::{Pizza, PizzaId, Price, Restaurant, RestaurantPizza};

/// Custom actions for Restaurant entities.
#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Offers a pizza at this restaurant for the given price.
    ///
    /// # Errors
    /// Fails with [`RestaurantError::PizzaNotFound`](super::RestaurantError::PizzaNotFound)
    /// when the pizza does not exist; the restaurant is left unchanged.
    AddPizza { price: Price, pizza_id: PizzaId },
}

/// Outcome of [`RestaurantAction::AddPizza`]: the new association together with
/// the entities it references, as they were when it was created.
#[derive(Debug, Clone, PartialEq)]
pub struct PizzaAdded {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}
