use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
    pub nro_socio: i32,
    pub nombre: String,
    pub apellido: Option<String>,
    /// `mensual`, `semestral` or `anual`.
    pub tipo_pago: String,
}
