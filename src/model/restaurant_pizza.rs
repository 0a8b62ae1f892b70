//! The priced association between a restaurant and a pizza.
//!
//! Associations are owned by their [`Restaurant`](crate::model::Restaurant): they are created
//! through the restaurant's `AddPizza` action and disappear with it.
use crate::model::{PizzaId, RestaurantId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lowest price a restaurant may charge for a pizza.
pub const MIN_PRICE: i64 = 1;
/// Highest price a restaurant may charge for a pizza.
pub const MAX_PRICE: i64 = 30;

/// Type-safe identifier for RestaurantPizza associations.
///
/// Unique across all restaurants, not just within one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantPizzaId(pub u32);

impl From<u32> for RestaurantPizzaId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantPizzaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_pizza_{}", self.0)
    }
}

/// Returned when a price falls outside `[MIN_PRICE, MAX_PRICE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Price must be between {} and {}, got {}", MIN_PRICE, MAX_PRICE, .0)]
pub struct PriceOutOfRange(pub i64);

/// A price in whole currency units, always within `[MIN_PRICE, MAX_PRICE]`.
///
/// The only way to obtain a `Price` is [`Price::new`] (or `TryFrom`), so holding one
/// is proof the bound was checked. Out-of-range input is rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(u8);

impl Price {
    pub fn new(value: i64) -> Result<Self, PriceOutOfRange> {
        if (MIN_PRICE..=MAX_PRICE).contains(&value) {
            // In range, so it fits a u8.
            Ok(Self(value as u8))
        } else {
            Err(PriceOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = PriceOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw association record.
///
/// Wire shape: `{id, price, restaurant_id, pizza_id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantPizza {
    pub id: RestaurantPizzaId,
    pub price: Price,
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
}

/// Validated request to associate a pizza with a restaurant.
///
/// Produced by [`crate::validation::validate_submission`]; the references are
/// resolved when the association is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestaurantPizzaCreate {
    pub price: Price,
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_inclusive_bounds() {
        for value in MIN_PRICE..=MAX_PRICE {
            let price = Price::new(value).expect("in-range price");
            assert_eq!(i64::from(price.get()), value);
        }
    }

    #[test]
    fn test_price_rejects_out_of_range_without_clamping() {
        for value in [i64::MIN, -1, 0, 31, 100, i64::MAX] {
            assert_eq!(Price::new(value), Err(PriceOutOfRange(value)));
        }
    }

    #[test]
    fn test_price_serializes_as_plain_integer() {
        let price = Price::try_from(12).unwrap();
        assert_eq!(serde_json::to_value(price).unwrap(), serde_json::json!(12));
    }
}
