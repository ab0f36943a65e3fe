use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        cobranza::{
            CreateDuesDto, CreatedDuesDto, DueWithMemberDto, ListDuesQuery, UpdateDueDto,
            UpdatedDuesDto,
        },
    },
    server::{
        error::AppError,
        model::cobranza::{ApplyPaymentParams, GenerateDuesParams},
        service::{cobranza::DueService, generation::ChargeGenerationService},
        state::AppState,
        util::parse::parse_limit,
    },
};

/// Tag for grouping due record endpoints in OpenAPI documentation
pub static COBRANZA_TAG: &str = "cobranzas";

/// List due records.
///
/// Returns due records joined with the member's name and plan, newest period first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `limit`; an empty value is treated as absent
///
/// # Returns
/// - `200 OK` - List of due records
/// - `400 Bad Request` - `limit` is not a positive integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cobranzas",
    tag = COBRANZA_TAG,
    params(ListDuesQuery),
    responses(
        (status = 200, description = "Successfully retrieved due records", body = Vec<DueWithMemberDto>),
        (status = 400, description = "Invalid limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dues(
    State(state): State<AppState>,
    Query(query): Query<ListDuesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let limit = parse_limit(query.limit.as_deref())?;

    let dues = DueService::new(&state.db).list(limit).await?;

    let dues: Vec<DueWithMemberDto> = dues.into_iter().map(|d| d.into_dto()).collect();

    Ok(Json(dues))
}

/// Generate due records for a member.
///
/// Creates the missing monthly records of the member's billing cycle group for the given
/// period and year. Records that already exist are left untouched.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Member number, optional period (`1`-`12`, `S1`, `S2`) and year
///
/// # Returns
/// - `201 Created` - Number of months processed and the created records
/// - `400 Bad Request` - Missing fields, invalid period or unknown member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cobranzas",
    tag = COBRANZA_TAG,
    request_body = CreateDuesDto,
    responses(
        (status = 201, description = "Successfully generated due records", body = CreatedDuesDto),
        (status = 400, description = "Invalid request or unknown member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dues(
    State(state): State<AppState>,
    payload: Result<Json<CreateDuesDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = GenerateDuesParams::from_dto(payload)?;

    let generated = ChargeGenerationService::new(&state.db)
        .generate(params, Utc::now().date_naive())
        .await?;

    Ok((StatusCode::CREATED, Json(generated.into_dto())))
}

/// Register a payment on a due record.
///
/// The payment applies to every record in the same billing cycle group as the addressed
/// record: only that month for monthly plans, the half-year for semestral plans and the
/// whole year for annual plans.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Due record id
/// - `payload` - Payment flag, optional payment date and optional amount
///
/// # Returns
/// - `200 OK` - Number of updated records and the records of the group
/// - `400 Bad Request` - Invalid id, flag, date or amount
/// - `404 Not Found` - No due record with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/cobranzas/{id}",
    tag = COBRANZA_TAG,
    params(
        ("id" = i32, Path, description = "Due record id")
    ),
    request_body = UpdateDueDto,
    responses(
        (status = 200, description = "Successfully updated due records", body = UpdatedDuesDto),
        (status = 400, description = "Invalid payment data", body = ErrorDto),
        (status = 404, description = "Due record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_due(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateDueDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let params = ApplyPaymentParams::from_dto(id, payload)?;

    let update = DueService::new(&state.db).apply_payment(params).await?;

    Ok(Json(update.into_dto()))
}
