//! Request handlers: extract, call the [`Catalog`](crate::catalog::Catalog), shape the response.

use super::error::ApiError;
use super::state::AppState;
use crate::catalog::EntityKind;
use crate::model::{Pizza, RestaurantId, RestaurantPizza};
use crate::serialization::{RestaurantDetail, RestaurantPizzaCreated, RestaurantSummary};
use crate::validation::{validate_submission, RestaurantPizzaSubmission};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde_json::Value;
use tracing::debug;

pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let restaurants = state.catalog.list_restaurants().await?;
    Ok(Json(restaurants.iter().map(RestaurantSummary::from).collect()))
}

pub async fn get_restaurant(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<RestaurantDetail>, ApiError> {
    let detail = state.catalog.restaurant_detail(restaurant_id(id)?).await?;
    Ok(Json(detail))
}

pub async fn delete_restaurant(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete_restaurant(restaurant_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_pizzas(State(state): State<AppState>) -> Result<Json<Vec<Pizza>>, ApiError> {
    Ok(Json(state.catalog.list_pizzas().await?))
}

pub async fn list_restaurant_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantPizza>>, ApiError> {
    Ok(Json(state.catalog.list_all_restaurant_pizzas().await?))
}

pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaCreated>), ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
    debug!(%body, "create_restaurant_pizza called");

    let submission = RestaurantPizzaSubmission::from_json(body)?;
    let params = validate_submission(&submission)?;
    let added = state.catalog.create_restaurant_pizza(params).await?;

    Ok((StatusCode::CREATED, Json(RestaurantPizzaCreated::from(added))))
}

/// A path segment that is not an id cannot name a restaurant.
fn restaurant_id(path: Result<Path<u32>, PathRejection>) -> Result<RestaurantId, ApiError> {
    path.map(|Path(id)| RestaurantId(id))
        .map_err(|_| ApiError::not_found(EntityKind::Restaurant))
}
