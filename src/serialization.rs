//! Wire shapes returned by the HTTP layer.
//!
//! [`Pizza`] and [`RestaurantPizza`] serialize as-is; the views here cover the
//! projections of a restaurant and the nested forms.

use crate::model::{Pizza, PizzaId, Price, Restaurant, RestaurantId, RestaurantPizza, RestaurantPizzaId};
use crate::restaurant_actor::PizzaAdded;
use serde::Serialize;

/// `{id, name, address}` without associations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantSummary {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
        }
    }
}

/// An association embedding the pizza it references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantPizzaWithPizza {
    pub id: RestaurantPizzaId,
    pub price: Price,
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
    pub pizza: Pizza,
}

impl RestaurantPizzaWithPizza {
    pub fn new(restaurant_pizza: &RestaurantPizza, pizza: Pizza) -> Self {
        Self {
            id: restaurant_pizza.id,
            price: restaurant_pizza.price,
            restaurant_id: restaurant_pizza.restaurant_id,
            pizza_id: restaurant_pizza.pizza_id,
            pizza,
        }
    }
}

/// A restaurant with every association it holds, each joined with its pizza.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantDetail {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

impl RestaurantDetail {
    pub fn new(restaurant: &Restaurant, restaurant_pizzas: Vec<RestaurantPizzaWithPizza>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
            restaurant_pizzas,
        }
    }
}

/// Response body of a successful `POST /restaurant_pizzas`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantPizzaCreated {
    pub id: RestaurantPizzaId,
    pub price: Price,
    pub pizza_id: PizzaId,
    pub restaurant_id: RestaurantId,
    pub pizza: Pizza,
    pub restaurant: RestaurantSummary,
}

impl From<PizzaAdded> for RestaurantPizzaCreated {
    fn from(added: PizzaAdded) -> Self {
        let PizzaAdded {
            restaurant_pizza,
            pizza,
            restaurant,
        } = added;
        Self {
            id: restaurant_pizza.id,
            price: restaurant_pizza.price,
            pizza_id: restaurant_pizza.pizza_id,
            restaurant_id: restaurant_pizza.restaurant_id,
            pizza,
            restaurant: RestaurantSummary::from(&restaurant),
        }
    }
}

/// `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"errors": ["...", ...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}
