use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A due record as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DueDto {
    pub id: i32,
    pub nro_socio: i32,
    pub mes: i32,
    pub anio: i32,
    pub monto: Decimal,
    pub pago: bool,
    pub fecha_pago: Option<DateTime<Utc>>,
}

/// A due record joined with the fields of the member it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DueWithMemberDto {
    pub id: i32,
    pub mes: i32,
    pub anio: i32,
    pub fecha_pago: Option<DateTime<Utc>>,
    pub pago: bool,
    pub monto: Decimal,
    pub nro_socio: i32,
    pub nombre: String,
    pub apellido: Option<String>,
    pub tipo_pago: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListDuesQuery {
    /// Maximum number of records to return, must be a positive integer.
    #[param(value_type = Option<u64>)]
    pub limit: Option<String>,
}

/// Integer field sent either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntOrText {
    Int(i64),
    Text(String),
}

/// Request body for generating dues.
///
/// `mes` accepts `1`-`12`, `"S1"` or `"S2"`; when absent the period is derived from the
/// member's plan and the current date.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateDuesDto {
    #[schema(value_type = Option<i32>)]
    pub nro_socio: Option<IntOrText>,
    #[schema(value_type = Option<String>)]
    pub mes: Option<IntOrText>,
    #[schema(value_type = Option<i32>)]
    pub anio: Option<IntOrText>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedDuesDto {
    pub message: String,
    pub meses_procesados: u64,
    pub data: Vec<DueDto>,
}

/// Request body for registering a payment.
///
/// `pago` is kept as a raw JSON value so a non-boolean can be answered with a precise
/// validation message instead of a generic body rejection.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateDueDto {
    #[schema(value_type = bool)]
    pub pago: Option<serde_json::Value>,
    /// RFC 3339 timestamp or `YYYY-MM-DD` date.
    #[serde(alias = "fecha_registro")]
    pub fecha_pago: Option<String>,
    pub monto: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatedDuesDto {
    pub message: String,
    pub count: u64,
    pub data: Vec<DueDto>,
}
