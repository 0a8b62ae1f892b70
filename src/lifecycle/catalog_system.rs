use crate::catalog::Catalog;
use crate::restaurant_actor::{AssociationIds, RestaurantContext};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Starts, wires and stops the actors behind a [`Catalog`].
///
/// # Architecture
///
/// - **Pizza actor**: owns the menu, no dependencies
/// - **Restaurant actor**: owns restaurants and their associations; looks pizzas up
///   through a [`PizzaClient`](crate::clients::PizzaClient) in its context
///
/// # Example
///
/// ```rust
/// use pizza_catalog::lifecycle::CatalogSystem;
///
/// #[tokio::main]
/// async fn main() {
///     let system = CatalogSystem::new(32);
///     let restaurants = system.catalog.list_restaurants().await.unwrap();
///     assert!(restaurants.is_empty());
///
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct CatalogSystem {
    /// Handle shared with the HTTP layer.
    pub catalog: Catalog,

    /// Actor tasks, restaurant first, in shutdown order.
    handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl CatalogSystem {
    /// Creates and spawns both actors, each with a channel of `buffer_size` slots.
    ///
    /// # Panics
    ///
    /// Panics if `buffer_size` is zero, like [`tokio::sync::mpsc::channel`].
    pub fn new(buffer_size: usize) -> Self {
        // 1. Create actors (no dependencies yet)
        let (pizza_actor, pizza_client) = crate::pizza_actor::new(buffer_size);
        let (restaurant_actor, restaurant_client) = crate::restaurant_actor::new(buffer_size);

        // 2. Start actors with injected context
        let pizza_handle = tokio::spawn(pizza_actor.run(()));
        let restaurant_handle = tokio::spawn(restaurant_actor.run(RestaurantContext {
            pizzas: pizza_client.clone(),
            association_ids: AssociationIds::new(),
        }));

        Self {
            catalog: Catalog::new(restaurant_client, pizza_client),
            handles: vec![("Restaurant", restaurant_handle), ("Pizza", pizza_handle)],
        }
    }

    /// Gracefully shuts down both actors.
    ///
    /// Drops this system's catalog handle and waits for the actors to drain their
    /// queues. The Restaurant actor holds a Pizza client, so it has to stop before
    /// the Pizza actor can. Every other `Catalog` clone must be dropped first, or this
    /// waits for them.
    ///
    /// Every actor is awaited even after one has failed; the first failure is returned.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down catalog...");
        drop(self.catalog);

        join_actors(self.handles).await?;

        info!("Catalog shutdown complete.");
        Ok(())
    }
}

/// Awaits each handle in order, logging every failed task.
async fn join_actors(handles: Vec<(&'static str, JoinHandle<()>)>) -> Result<(), JoinError> {
    let mut first_error = None;
    for (name, handle) in handles {
        if let Err(e) = handle.await {
            error!(actor = name, error = %e, "Actor task failed");
            first_error.get_or_insert(e);
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
