//! Domain models and operation parameters for the server layer.
//!
//! Repositories hand entity models to services, which convert them into these domain
//! types at the boundary. Controllers turn DTOs into parameter types here and domain
//! results back into DTOs.

pub mod billing;
pub mod cobranza;
pub mod socio;
