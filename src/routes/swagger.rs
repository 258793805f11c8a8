use crate::handlers::activities;
use crate::handlers::root;
use crate::models::{Activity, ErrorResponse, MessageResponse};

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::redirect_to_index,
        activities::list_activities,
        activities::signup_for_activity,
        activities::unregister_from_activity
    ),
    components(schemas(Activity, MessageResponse, ErrorResponse)),
    tags(
        (name = "activities", description = "Extracurricular activity signups"),
        (name = "static", description = "Static landing page")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server"),
    )
)]
pub struct ApiDoc;
