//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for members and
//! due records. Repositories use SeaORM entity models internally and are generic over
//! `ConnectionTrait`, so the same queries run on the connection pool or inside a
//! `DatabaseTransaction` opened by a service.

pub mod cobranza;
pub mod socio;

#[cfg(test)]
mod test;
