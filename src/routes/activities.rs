use crate::handlers::{list_activities, signup_for_activity, unregister_from_activity};
use crate::server::AppState;
use axum::{Router, routing::get, routing::post};

/// Create the activity routes with state
pub fn routes() -> Router<AppState> {
    Router::new().nest("/activities", activity_routes())
}

fn activity_routes() -> Router<AppState> {
    Router::new().route("/", get(list_activities)).route(
        "/{activity_name}/signup",
        post(signup_for_activity).delete(unregister_from_activity),
    )
}
