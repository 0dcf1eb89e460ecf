//! Resource CRUD routes: `/{path}` and `/{path}/:id` for each resource.

use crate::handlers::resource::{create, delete as delete_handler, list, read, update};
use crate::resources::{Customers, Orders, Products, Resource};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes<R: Resource>(state: AppState) -> Router {
    let path = R::descriptor().path;
    Router::new()
        .route(&format!("/{}", path), get(list::<R>).post(create::<R>))
        .route(
            &format!("/{}/:id", path),
            get(read::<R>).put(update::<R>).delete(delete_handler::<R>),
        )
        .with_state(state)
}

/// Customers, orders and products.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes::<Customers>(state.clone()))
        .merge(resource_routes::<Orders>(state.clone()))
        .merge(resource_routes::<Products>(state))
}
