//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the API router with all endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /people`, `GET /people/{id}` - Character catalog
/// - `GET /planet`, `GET /planet/{id}` - Planet catalog
/// - `GET /users` - All users, plus a fresh token for an authenticated caller
/// - `GET /users/favorites` - Current user's favorites
/// - `POST|DELETE /favorite/planet/{id}` - Add or remove a favorite planet
/// - `POST|DELETE /favorite/people/{id}` - Add or remove a favorite character
/// - `GET /token` - Reissue an access token
/// - `POST /login` - Password login
///
/// # Returns
/// A `Router<AppState>` still awaiting its state.
pub fn router() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Character and planet catalog with per-user favorites"), tags(
        (name = controller::character::CHARACTER_TAG, description = "Character catalog"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog"),
        (name = controller::user::USER_TAG, description = "Users and their favorites"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite management"),
        (name = controller::auth::AUTH_TAG, description = "Access tokens"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::delete_favorite_character
        ))
        .routes(routes!(controller::auth::refresh_token))
        .routes(routes!(controller::auth::login))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application service.
///
/// Attaches state, permissive CORS and request tracing, and strips trailing slashes
/// before routing so `/people/` and `/people` resolve to the same handler.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
