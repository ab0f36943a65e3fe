mod cobranza;
mod socio;
