//! CrudService: generic CRUD using safe SQL builder.

mod crud;
mod pagination;
mod validation;
pub use crud::CrudService;
pub use pagination::{Page, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
pub use validation::RequestValidator;
