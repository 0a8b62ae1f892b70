use super::handlers;
use super::state::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Creates the router with every catalog endpoint.
///
/// | Method & Path               | Handler                                   |
/// |-----------------------------|-------------------------------------------|
/// | `GET /`                     | [`handlers::index`]                       |
/// | `GET /restaurants`          | [`handlers::list_restaurants`]            |
/// | `GET /restaurants/{id}`     | [`handlers::get_restaurant`]              |
/// | `DELETE /restaurants/{id}`  | [`handlers::delete_restaurant`]           |
/// | `GET /pizzas`               | [`handlers::list_pizzas`]                 |
/// | `GET /restaurant_pizzas`    | [`handlers::list_restaurant_pizzas`]      |
/// | `POST /restaurant_pizzas`   | [`handlers::create_restaurant_pizza`]     |
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/restaurants", get(handlers::list_restaurants))
        .route(
            "/restaurants/{id}",
            get(handlers::get_restaurant).delete(handlers::delete_restaurant),
        )
        .route("/pizzas", get(handlers::list_pizzas))
        .route(
            "/restaurant_pizzas",
            get(handlers::list_restaurant_pizzas).post(handlers::create_restaurant_pizza),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
