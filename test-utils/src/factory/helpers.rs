//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique member numbers in tests.
static COUNTER: std::sync::atomic::AtomicI32 = std::sync::atomic::AtomicI32::new(1);

/// Gets the next unique counter value for test data.
///
/// Values increase monotonically across every factory in the test binary so
/// that member numbers never collide within a shared database.
///
/// # Returns
/// - `i32` - Next unique counter value
pub fn next_id() -> i32 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one unpaid due record per month, January through December.
///
/// # Arguments
/// - `db` - Database connection
/// - `nro_socio` - Member owning the records; must already exist
/// - `anio` - Year of the records
///
/// # Returns
/// - `Ok(Vec<entity::cobranza::Model>)` - Created records ordered by month
/// - `Err(DbErr)` - Database error during insert
pub async fn create_year_of_dues(
    db: &DatabaseConnection,
    nro_socio: i32,
    anio: i32,
) -> Result<Vec<entity::cobranza::Model>, DbErr> {
    let mut dues = Vec::with_capacity(12);

    for mes in 1..=12 {
        dues.push(crate::factory::cobranza::create_due(db, nro_socio, mes, anio).await?);
    }

    Ok(dues)
}
