//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which
/// are collected into a unified OpenAPI document served at
/// `/api/docs/openapi.json`, with Swagger UI at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Fleetcert", description = "Fleetcert API"), tags(
        (name = controller::drone::DRONE_TAG, description = "Drone and compliance checklist routes"),
        (name = controller::report::REPORT_TAG, description = "Compliance report payload routes"),
        (name = controller::team::TEAM_TAG, description = "Team roster routes"),
        (name = controller::subcontractor::SUBCONTRACTOR_TAG, description = "Subcontractor agreement routes"),
        (name = controller::battery::BATTERY_TAG, description = "Battery roster routes"),
        (name = controller::order::ORDER_TAG, description = "Sales order routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::drone::create_drone))
        .routes(routes!(controller::drone::get_drones))
        .routes(routes!(controller::drone::get_drone_checklist))
        .routes(routes!(controller::drone::delete_drone))
        .routes(routes!(controller::drone::assign_manager))
        .routes(routes!(controller::drone::update_uploads))
        .routes(routes!(controller::drone::update_web_portal))
        .routes(routes!(controller::drone::update_units))
        .routes(routes!(controller::drone::append_recurring_record))
        .routes(routes!(controller::drone::delete_recurring_record))
        .routes(routes!(controller::drone::mark_personnel_reported))
        .routes(routes!(controller::report::get_one_time_report))
        .routes(routes!(controller::report::get_recurring_report))
        .routes(routes!(controller::team::create_team_member))
        .routes(routes!(controller::team::get_team_members))
        .routes(routes!(controller::team::update_team_member))
        .routes(routes!(controller::team::delete_team_member))
        .routes(routes!(controller::subcontractor::create_subcontractor))
        .routes(routes!(controller::subcontractor::get_subcontractors))
        .routes(routes!(controller::subcontractor::update_subcontractor))
        .routes(routes!(controller::subcontractor::delete_subcontractor))
        .routes(routes!(controller::battery::create_battery))
        .routes(routes!(controller::battery::get_batteries))
        .routes(routes!(controller::battery::delete_battery))
        .routes(routes!(controller::order::create_order))
        .routes(routes!(controller::order::get_orders))
        .routes(routes!(controller::order::get_order))
        .routes(routes!(controller::order::update_order))
        .routes(routes!(controller::order::delete_order))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
