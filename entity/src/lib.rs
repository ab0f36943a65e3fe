//! SeaORM entities for the `socios` and `cobranzas` tables.

pub mod prelude;

pub mod cobranza;
pub mod socio;
