//! # Pizza Client
//!
//! Provides a high-level API for interacting with the `Pizza` actor.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Pizza, PizzaCreate};
use crate::pizza_actor::PizzaError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Pizza actor.
#[derive(Clone)]
pub struct PizzaClient {
    inner: ResourceClient<Pizza>,
}

impl PizzaClient {
    pub fn new(inner: ResourceClient<Pizza>) -> Self {
        Self { inner }
    }

    /// Creates a pizza and returns it as stored.
    #[instrument(skip(self))]
    pub async fn create_pizza(&self, params: PizzaCreate) -> Result<Pizza, PizzaError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get(id)
            .await?
            .ok_or_else(|| PizzaError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ActorClient<Pizza> for PizzaClient {
    type Error = PizzaError;

    fn inner(&self) -> &ResourceClient<Pizza> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => PizzaError::NotFound(id),
            other => other
                .into_entity_error::<PizzaError>()
                .unwrap_or_else(|e| PizzaError::ActorCommunicationError(e.to_string())),
        }
    }
}
