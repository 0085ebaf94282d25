pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;
pub mod openapi;
pub mod observability;

pub use startup::{load_config, run};
pub use state::ServerState;
