use axum::Router;

use crate::registry::{ActivityRegistry, default_activities};
use crate::server::{AppState, create_app};

/// Static assets shipped with the crate
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Create a test AppState holding a fresh copy of the built-in seed
pub fn create_test_state() -> AppState {
    AppState {
        registry: ActivityRegistry::new(default_activities()),
    }
}

/// Create the full application router over `state`
pub fn create_test_app(state: AppState) -> Router {
    create_app(state, STATIC_DIR)
}
