pub mod cobranza;
pub mod socio;
