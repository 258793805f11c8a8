use axum::response::Redirect;

/// Landing page served by the static file service
pub const INDEX_PATH: &str = "/static/index.html";

/// Redirect to the landing page
///
/// Uses 307 so the client keeps the request method.
#[utoipa::path(
    get,
    path = "/",
    tag = "static",
    responses(
        (status = 307, description = "Redirect to the static landing page")
    )
)]
pub async fn redirect_to_index() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}
