use axum::Router;

use crate::state::AppState;

pub mod catalog;
pub mod categories;
pub mod doc;
pub mod health;
pub mod ingredients;
pub mod pages;
pub mod params;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/ingredients", ingredients::router())
        .nest("/catalog", catalog::router())
}
