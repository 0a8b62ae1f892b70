//! Error types for the Restaurant actor.

use crate::model::PizzaId;
use crate::pizza_actor::PizzaError;
use thiserror::Error;

/// Errors that can occur during restaurant operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The requested restaurant was not found.
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    /// The restaurant data provided is invalid.
    #[error("Restaurant validation error: {0}")]
    ValidationError(String),

    /// The pizza an association should reference does not exist.
    #[error("Pizza not found: {0}")]
    PizzaNotFound(PizzaId),

    /// The pizza actor could not be asked whether the pizza exists.
    #[error("Pizza lookup failed: {0}")]
    PizzaLookup(#[from] PizzaError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
