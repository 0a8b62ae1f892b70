//! # Framework Errors
//!
//! Common error types used throughout the actor framework.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the concrete entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns the original error unchanged when it is not an entity error of type `E`.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(concrete) => Ok(*concrete),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_into_entity_error_recovers_concrete_type() {
        let error = FrameworkError::EntityError(Box::new(Boom));
        assert_eq!(error.into_entity_error::<Boom>().unwrap(), Boom);
    }

    #[test]
    fn test_into_entity_error_keeps_other_variants() {
        let error = FrameworkError::NotFound("pizza_1".into());
        match error.into_entity_error::<Boom>() {
            Err(FrameworkError::NotFound(id)) => assert_eq!(id, "pizza_1"),
            other => panic!("unexpected result: {:?}", other),
        }

        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            foreign.into_entity_error::<Boom>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
