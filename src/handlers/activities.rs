use std::collections::HashMap;

use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::Json,
};
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{Activity, ErrorResponse, MessageResponse, SignupParams};
use crate::registry::{ActivityTable, RegistryError};
use crate::server::AppState;

/// List activities
///
/// Returns every activity keyed by name, in seed order.
#[utoipa::path(
    get,
    path = "/activities",
    tag = "activities",
    responses(
        (status = 200, description = "All activities keyed by name", body = HashMap<String, Activity>)
    )
)]
#[axum::debug_handler]
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityTable> {
    Json(state.registry.list().await)
}

/// Sign up for an activity
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    tag = "activities",
    params(
        ("activity_name" = String, Path, description = "Activity name, e.g. `Chess Club`"),
        SignupParams
    ),
    responses(
        (status = 200, description = "Student signed up", body = MessageResponse),
        (status = 400, description = "Student is already signed up", body = ErrorResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse),
        (status = 422, description = "Missing email query parameter", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    activity_name: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(activity_name) = activity_name?;
    let params = signup_params(query)?;

    match state.registry.signup(&activity_name, &params.email).await {
        Ok(activity) => {
            info!(
                activity = %activity_name,
                email = %params.email,
                spots_left = activity.spots_left(),
                "Signed up participant"
            );
            Ok(Json(MessageResponse::signed_up(&params.email, &activity_name)))
        }
        Err(e) => Err(rejected(e)),
    }
}

/// Unregister from an activity
#[utoipa::path(
    delete,
    path = "/activities/{activity_name}/signup",
    tag = "activities",
    params(
        ("activity_name" = String, Path, description = "Activity name, e.g. `Chess Club`"),
        SignupParams
    ),
    responses(
        (status = 200, description = "Student unregistered", body = MessageResponse),
        (status = 400, description = "Student is not signed up", body = ErrorResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse),
        (status = 422, description = "Missing email query parameter", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    activity_name: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(activity_name) = activity_name?;
    let params = signup_params(query)?;

    match state.registry.unregister(&activity_name, &params.email).await {
        Ok(_) => {
            info!(activity = %activity_name, email = %params.email, "Unregistered participant");
            Ok(Json(MessageResponse::unregistered(
                &params.email,
                &activity_name,
            )))
        }
        Err(e) => Err(rejected(e)),
    }
}

fn signup_params(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<SignupParams, AppError> {
    let Query(pairs) = query?;
    SignupParams::from_pairs(pairs).ok_or_else(|| {
        AppError::InvalidQuery("Failed to deserialize query string: missing field `email`".to_string())
    })
}

fn rejected(err: RegistryError) -> AppError {
    warn!("Rejected registry change: {:?}", err);
    AppError::from(err)
}
