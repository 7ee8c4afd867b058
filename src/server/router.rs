use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{health, hotel},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel Directory API",
        description = "Tenant lookup, directory content and health of the hotel guest directory"
    ),
    tags(
        (name = "hotel", description = "Hotels and their directory content"),
        (name = "health", description = "Process health"),
    )
)]
pub struct ApiDoc;

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(hotel::get_hotels))
        .routes(routes!(hotel::get_current_hotel))
        .routes(routes!(hotel::get_hotel_directory))
        .routes(routes!(health::get_health))
}

/// Routes of the JSON API and health endpoint, with Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
