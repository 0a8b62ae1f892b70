//! Demo data for a freshly started server.

use crate::catalog::{Catalog, CatalogError};
use crate::model::{PizzaCreate, Price, RestaurantCreate, RestaurantPizzaCreate};
use tracing::info;

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const OFFERS: [(usize, usize, i64); 4] = [(0, 0, 1), (0, 1, 4), (1, 1, 5), (2, 2, 12)];

/// Inserts the demo restaurants, pizzas and associations.
///
/// Meant for an empty catalog: associations refer to the records created here.
pub async fn seed_demo_data(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let restaurant = catalog
            .create_restaurant(RestaurantCreate {
                name: name.to_string(),
                address: address.to_string(),
            })
            .await?;
        restaurants.push(restaurant.id);
    }

    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let pizza = catalog
            .create_pizza(PizzaCreate {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            })
            .await?;
        pizzas.push(pizza.id);
    }

    for (restaurant, pizza, price) in OFFERS {
        catalog
            .create_restaurant_pizza(RestaurantPizzaCreate {
                price: Price::new(price)?,
                restaurant_id: restaurants[restaurant],
                pizza_id: pizzas[pizza],
            })
            .await?;
    }

    info!(
        restaurants = restaurants.len(),
        pizzas = pizzas.len(),
        restaurant_pizzas = OFFERS.len(),
        "Seeded demo data"
    );
    Ok(())
}
