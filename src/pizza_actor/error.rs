//! Error types for the Pizza actor.

use thiserror::Error;

/// Errors that can occur during pizza operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PizzaError {
    /// The requested pizza was not found.
    #[error("Pizza not found: {0}")]
    NotFound(String),

    /// The pizza data provided is invalid.
    #[error("Pizza validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
