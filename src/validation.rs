//! # Association Validator
//!
//! Turns a raw `POST /restaurant_pizzas` body into a [`RestaurantPizzaCreate`].
//!
//! Checks run in order and the first failing step wins:
//!
//! 1. every field is present (`null` counts as absent), otherwise [`ValidationError::MissingField`]
//!    naming all of the missing ones;
//! 2. `price` is a JSON integer inside `[MIN_PRICE, MAX_PRICE]`;
//! 3. `pizza_id` and `restaurant_id` are non-negative integers that fit an id.
//!
//! Whether the ids resolve is decided by the restaurant actor when the association is
//! stored, so that the lookup and the insert happen in the same message.

use crate::model::{PizzaId, Price, RestaurantId, RestaurantPizzaCreate, MAX_PRICE, MIN_PRICE};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Raw fields of an association request, before any check has run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantPizzaSubmission {
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub pizza_id: Option<Value>,
    #[serde(default)]
    pub restaurant_id: Option<Value>,
}

impl RestaurantPizzaSubmission {
    /// Reads the submission out of a JSON body. Anything but an object is rejected.
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        if !body.is_object() {
            return Err(ValidationError::NotAnObject);
        }
        serde_json::from_value(body).map_err(|_| ValidationError::NotAnObject)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingField(Vec<&'static str>),

    #[error("Price must be an integer between {} and {}", MIN_PRICE, MAX_PRICE)]
    InvalidPrice,

    #[error("{0} must be a non-negative integer id")]
    InvalidId(&'static str),
}

impl ValidationError {
    /// One message per problem, as listed in the `errors` array of a 400 response.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ValidationError::MissingField(fields) => fields
                .iter()
                .map(|field| format!("{field} is required"))
                .collect(),
            other => vec![other.to_string()],
        }
    }
}

/// Validates a submission without touching any store.
pub fn validate_submission(
    submission: &RestaurantPizzaSubmission,
) -> Result<RestaurantPizzaCreate, ValidationError> {
    let (Some(price), Some(pizza_id), Some(restaurant_id)) = (
        &submission.price,
        &submission.pizza_id,
        &submission.restaurant_id,
    ) else {
        let missing = [
            ("price", &submission.price),
            ("pizza_id", &submission.pizza_id),
            ("restaurant_id", &submission.restaurant_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| field)
        .collect();
        return Err(ValidationError::MissingField(missing));
    };

    let price = price
        .as_i64()
        .and_then(|value| Price::new(value).ok())
        .ok_or(ValidationError::InvalidPrice)?;

    Ok(RestaurantPizzaCreate {
        price,
        pizza_id: PizzaId(parse_id("pizza_id", pizza_id)?),
        restaurant_id: RestaurantId(parse_id("restaurant_id", restaurant_id)?),
    })
}

fn parse_id(field: &'static str, value: &Value) -> Result<u32, ValidationError> {
    value
        .as_u64()
        .and_then(|id| u32::try_from(id).ok())
        .ok_or(ValidationError::InvalidId(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(body: Value) -> RestaurantPizzaSubmission {
        RestaurantPizzaSubmission::from_json(body).unwrap()
    }

    #[test]
    fn test_valid_submission() {
        let validated =
            validate_submission(&submission(json!({"price": 10, "pizza_id": 2, "restaurant_id": 3})))
                .unwrap();
        assert_eq!(validated.price.get(), 10);
        assert_eq!(validated.pizza_id, PizzaId(2));
        assert_eq!(validated.restaurant_id, RestaurantId(3));
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let err = validate_submission(&submission(json!({"price": null, "pizza_id": 1}))).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(vec!["price", "restaurant_id"]));
        assert_eq!(
            err.messages(),
            vec!["price is required".to_string(), "restaurant_id is required".to_string()]
        );
    }

    #[test]
    fn test_missing_field_wins_over_bad_price() {
        let err = validate_submission(&submission(json!({"price": 99, "pizza_id": 1}))).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(vec!["restaurant_id"]));
    }

    #[test]
    fn test_price_bounds() {
        for price in [MIN_PRICE, 15, MAX_PRICE] {
            let body = json!({"price": price, "pizza_id": 1, "restaurant_id": 1});
            assert!(validate_submission(&submission(body)).is_ok(), "price {price}");
        }
        for price in [json!(0), json!(31), json!(-5), json!(10.5), json!("10"), json!(true)] {
            let body = json!({"price": price, "pizza_id": 1, "restaurant_id": 1});
            assert_eq!(
                validate_submission(&submission(body)),
                Err(ValidationError::InvalidPrice)
            );
        }
    }

    #[test]
    fn test_price_is_checked_before_ids() {
        let body = json!({"price": 31, "pizza_id": "x", "restaurant_id": -1});
        assert_eq!(
            validate_submission(&submission(body)),
            Err(ValidationError::InvalidPrice)
        );
    }

    #[test]
    fn test_invalid_ids() {
        let body = json!({"price": 5, "pizza_id": -1, "restaurant_id": 1});
        assert_eq!(
            validate_submission(&submission(body)),
            Err(ValidationError::InvalidId("pizza_id"))
        );

        let body = json!({"price": 5, "pizza_id": 1, "restaurant_id": u64::from(u32::MAX) + 1});
        assert_eq!(
            validate_submission(&submission(body)),
            Err(ValidationError::InvalidId("restaurant_id"))
        );
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        for body in [json!([10, 1, 1]), json!("price"), json!(null), json!(3)] {
            assert!(matches!(
                RestaurantPizzaSubmission::from_json(body),
                Err(ValidationError::NotAnObject)
            ));
        }
    }
}
