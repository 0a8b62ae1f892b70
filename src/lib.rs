//! # Pizza Catalog
//!
//! A small REST service over a catalog of restaurants, pizzas and the price at which
//! a restaurant offers a pizza.
//!
//! ## Design
//!
//! ### Resource-oriented actors
//! Each entity kind is owned by one [`ResourceActor`](framework::ResourceActor) running in
//! its own Tokio task. Messages are processed one at a time, so entity state needs no locks
//! and every create, delete or action is applied as a single unit.
//!
//! ### Restaurants own their associations
//! A [`RestaurantPizza`](model::RestaurantPizza) is stored inside its
//! [`Restaurant`](model::Restaurant). Adding one is a restaurant action that resolves the
//! pizza before inserting; deleting a restaurant drops its associations in the same message.
//!
//! ### Prices are checked once
//! [`Price`](model::Price) can only hold a value in `[1, 30]`, so anything past the
//! [`validation`] step carries an in-range price.
//!
//! ### Errors per layer
//! Each layer has its own `thiserror` enum ([`FrameworkError`](framework::FrameworkError),
//! [`RestaurantError`](restaurant_actor::RestaurantError), [`CatalogError`](catalog::CatalogError),
//! [`ApiError`](api::ApiError)) and converts the one below it.
//!
//! ## Module Tour
//!
//! - [`framework`] - generic actor, client, entity trait and test mocks
//! - [`model`] - `Restaurant`, `Pizza`, `RestaurantPizza` and their ids
//! - [`pizza_actor`], [`restaurant_actor`] - the two entity actors
//! - [`clients`] - typed clients wrapping the generic one
//! - [`catalog`] - the store contract used by the HTTP layer
//! - [`validation`] - checks on a submitted association
//! - [`serialization`] - response shapes
//! - [`api`] - axum router, handlers and server
//! - [`lifecycle`] - system startup/shutdown, configuration, tracing and seed data
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl localhost:5555/restaurants
//! ```

pub mod api;
pub mod catalog;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod pizza_actor;
pub mod restaurant_actor;
pub mod serialization;
pub mod validation;
