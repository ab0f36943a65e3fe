//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Resolving billing cycle groups and deciding which records to create
//! - **Orchestration**: Coordinating repository calls inside a single transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod cobranza;
pub mod generation;
pub mod socio;
