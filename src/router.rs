//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations, and
//! Swagger UI is served at `/api/docs` for interactive exploration.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Registers the `bearer` HTTP security scheme the endpoint annotations
/// reference.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Create a member account
/// - `POST /api/auth/login` - Exchange credentials for tokens
/// - `POST /api/auth/refresh` - Rotate a refresh token
/// - `POST /api/auth/logout` - Invalidate the stored refresh token
/// - `GET/POST /api/maps`, `GET/PUT/DELETE /api/maps/{id}` - Map CRUD
/// - `GET /api/maps/{map_id}/objects` - Objects owned by one map
/// - `GET/POST /api/objects`, `GET/PUT/DELETE /api/objects/{id}` - Celestial
///   object CRUD
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Orrery", description = "Orrery API"), modifiers(&SecurityAddon), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::map::MAP_TAG, description = "Map API routes"),
        (name = controller::celestial::CELESTIAL_TAG, description = "Celestial object API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::refresh))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::map::get_maps,
            controller::map::create_map
        ))
        .routes(routes!(
            controller::map::get_map,
            controller::map::update_map,
            controller::map::delete_map
        ))
        .routes(routes!(controller::celestial::get_map_objects))
        .routes(routes!(
            controller::celestial::get_objects,
            controller::celestial::create_object
        ))
        .routes(routes!(
            controller::celestial::get_object,
            controller::celestial::update_object,
            controller::celestial::delete_object
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
