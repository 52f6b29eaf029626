//! Workload relay web front end.
//!
//! Serves the submission form and relays a fixed workload-creation request to
//! the tenant's remote config API.

pub mod config;
pub mod handlers;
pub mod server;
pub mod templates;

pub use config::RelayConfig;
pub use server::{router, AppState, RelayServer};
