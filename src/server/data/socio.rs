//! Member data repository for database operations.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Repository providing read access to members.
///
/// Members are maintained outside of this application, so the repository is read-only.
pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every member ordered by member number.
    ///
    /// # Returns
    /// - `Ok(Vec<entity::socio::Model>)` - All members (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::socio::Model>, DbErr> {
        entity::prelude::Socio::find()
            .order_by_asc(entity::socio::Column::NroSocio)
            .all(self.db)
            .await
    }

    /// Finds a member by member number.
    ///
    /// # Returns
    /// - `Ok(Some(entity::socio::Model))` - Member found
    /// - `Ok(None)` - No member with that number
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_number(
        &self,
        nro_socio: i32,
    ) -> Result<Option<entity::socio::Model>, DbErr> {
        entity::prelude::Socio::find_by_id(nro_socio)
            .one(self.db)
            .await
    }
}
