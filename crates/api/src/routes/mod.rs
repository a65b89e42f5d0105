pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /breeds          list (GET), add (POST), modify (PUT, id in body)
/// /breeds/{id}     get (GET), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/breeds",
            get(handlers::breeds::list_breeds)
                .post(handlers::breeds::add_breed)
                .put(handlers::breeds::modify_breed),
        )
        .route(
            "/breeds/{id}",
            get(handlers::breeds::get_breed).delete(handlers::breeds::delete_breed),
        )
}
