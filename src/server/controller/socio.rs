use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, socio::MemberDto},
    server::{error::AppError, service::socio::MemberService, state::AppState},
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static SOCIO_TAG: &str = "socios";

/// List all members.
///
/// Returns every member ordered by member number.
///
/// # Returns
/// - `200 OK` - List of members
/// - `500 Internal Server Error` - Database error or a member with an unknown plan
#[utoipa::path(
    get,
    path = "/api/socios",
    tag = SOCIO_TAG,
    responses(
        (status = 200, description = "Successfully retrieved members", body = Vec<MemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members = MemberService::new(&state.db).list().await?;

    let members: Vec<MemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok(Json(members))
}
