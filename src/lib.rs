//! Tienda API: customers, orders and products over PostgreSQL, one generic CRUD template per resource.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod resources;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{ResourceDescriptor, Settings};
pub use error::{AppError, ConfigError};
pub use migration::ensure_schema;
pub use resources::{Customers, Orders, Products, Resource};
pub use routes::{api_routes, app, common_routes_with_ready, resource_routes};
pub use service::{CrudService, Page};
pub use state::AppState;
pub use store::{ensure_database_exists, Gateway, PgGateway};
