use thiserror::Error;

/// Internal issues with the codebase or stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored payment plan is not one of `mensual`, `semestral` or `anual`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown payment plan '{value}' for member {nro_socio}")]
    UnknownPlanType {
        /// Member owning the invalid plan
        nro_socio: i32,
        /// The stored plan value
        value: String,
    },

    /// Due record references a member that could not be loaded alongside it.
    #[error("Due record {due_id} has no matching member {nro_socio}")]
    MissingMember {
        /// The due record id
        due_id: i32,
        /// The member number stored on the record
        nro_socio: i32,
    },

    /// Stored month is outside 1..=12.
    #[error("Due record {due_id} has invalid month {month}")]
    InvalidStoredMonth {
        /// The due record id
        due_id: i32,
        /// The stored month
        month: i32,
    },
}
