use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Store constraint violations that are caused by the request rather than the server.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConstraintError {
    /// Referenced member does not exist.
    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    /// A due record already exists for the member and period.
    #[error("Unique violation: {0}")]
    Unique(String),

    /// A paid record is missing its payment date, or a month is out of range.
    #[error("Check violation: {0}")]
    Check(String),
}

impl ConstraintError {
    /// Classifies a store error as a constraint violation.
    ///
    /// Unique and foreign key violations are reported by the driver through
    /// `DbErr::sql_err`. Check constraints have no dedicated error kind, so the
    /// driver message is matched for SQLite (`CHECK constraint failed`) and
    /// Postgres (`violates check constraint`).
    ///
    /// # Returns
    /// - `Some(ConstraintError)` - The error is a constraint violation
    /// - `None` - Any other store error
    pub fn classify(err: &DbErr) -> Option<Self> {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return Some(Self::ForeignKey(msg))
            }
            Some(SqlErr::UniqueConstraintViolation(msg)) => return Some(Self::Unique(msg)),
            _ => {}
        }

        let msg = err.to_string();
        if msg.contains("CHECK constraint failed") || msg.contains("violates check constraint") {
            return Some(Self::Check(msg));
        }

        None
    }

    /// Client-facing message for the violated constraint.
    pub fn message(&self) -> &'static str {
        match self {
            Self::ForeignKey(_) => "El socio indicado no existe",
            Self::Unique(_) => "Ya existe una cobranza para ese socio y período",
            Self::Check(_) => {
                "Datos inválidos: el mes debe estar entre 1 y 12 y un pago requiere fecha de pago"
            }
        }
    }
}

/// Converts constraint violations into 400 Bad Request responses.
///
/// The driver detail is logged at debug level; the client only receives the
/// constraint-specific message.
impl IntoResponse for ConstraintError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}
