pub mod auth;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;

pub use errors::ApiError;
pub use handlers::AppState;
pub use routes::create_router;
