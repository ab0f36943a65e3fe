//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories for due records take the owning member number
//! so foreign key relationships stay explicit in each test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let member = factory::socio::create_member(&db).await?;
//!     let due = factory::cobranza::create_due(&db, member.nro_socio, 3, 2024).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let member = factory::socio::MemberFactory::new(&db)
//!     .nro_socio(42)
//!     .tipo_pago("semestral")
//!     .build()
//!     .await?;
//!
//! let due = factory::cobranza::DueFactory::new(&db, member.nro_socio)
//!     .period(3, 2024)
//!     .monto(Decimal::new(100, 0))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `socio` - Create member entities
//! - `cobranza` - Create due record entities
//! - `helpers` - Unique id generation and multi-row helpers

pub mod cobranza;
pub mod helpers;
pub mod socio;

pub use cobranza::create_due;
pub use helpers::create_year_of_dues;
pub use socio::{create_member, create_member_with_plan};
