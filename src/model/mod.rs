//! Request and response DTOs exchanged over the JSON API.

pub mod api;
pub mod cobranza;
pub mod socio;
