pub mod routes;
pub mod startup;
pub mod state;
pub mod extract;
pub mod errors;
pub mod metrics;
pub mod openapi;

pub use routes::build_router;
pub use startup::run_with_config;
pub use state::AppState;
