use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        cobranza::{
            CreateDuesDto, CreatedDuesDto, DueDto, DueWithMemberDto, UpdateDueDto, UpdatedDuesDto,
        },
        socio::MemberDto,
    },
    server::{
        controller::{
            cobranza::{create_dues, get_dues, update_due},
            socio::get_members,
        },
        state::AppState,
    },
};

/// Plain-text answer of the health endpoint.
pub const HEALTH_MESSAGE: &str = "Socios Alas Rojas - Backend OK";

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Socios Alas Rojas API",
        version = "0.1.0",
        description = "Membership dues and payment tracking"
    ),
    paths(
        crate::server::controller::socio::get_members,
        crate::server::controller::cobranza::get_dues,
        crate::server::controller::cobranza::create_dues,
        crate::server::controller::cobranza::update_due,
    ),
    components(
        schemas(
            ErrorDto, MemberDto, DueDto, DueWithMemberDto,
            CreateDuesDto, CreatedDuesDto, UpdateDueDto, UpdatedDuesDto
        )
    ),
    tags(
        (name = "socios", description = "Club members"),
        (name = "cobranzas", description = "Monthly dues and payments")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/api/docs/openapi.json", get(openapi))
        .route("/api/socios", get(get_members))
        .route("/api/cobranzas", get(get_dues).post(create_dues))
        .route("/api/cobranzas/{id}", put(update_due))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health() -> &'static str {
    HEALTH_MESSAGE
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
