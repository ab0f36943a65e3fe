//! Member factory for creating test `socios` rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::socio::MemberFactory;
///
/// let member = MemberFactory::new(&db)
///     .nro_socio(42)
///     .tipo_pago("anual")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    nro_socio: i32,
    nombre: String,
    apellido: Option<String>,
    tipo_pago: String,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - nro_socio: auto-incremented
    /// - nombre: `"Socio {id}"`
    /// - apellido: `"Apellido {id}"`
    /// - tipo_pago: `"mensual"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nro_socio: id,
            nombre: format!("Socio {}", id),
            apellido: Some(format!("Apellido {}", id)),
            tipo_pago: "mensual".to_string(),
        }
    }

    pub fn nro_socio(mut self, nro_socio: i32) -> Self {
        self.nro_socio = nro_socio;
        self
    }

    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = nombre.into();
        self
    }

    pub fn apellido(mut self, apellido: Option<String>) -> Self {
        self.apellido = apellido;
        self
    }

    /// Sets the payment plan, stored verbatim so tests can also insert invalid values.
    pub fn tipo_pago(mut self, tipo_pago: impl Into<String>) -> Self {
        self.tipo_pago = tipo_pago.into();
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::socio::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::socio::Model, DbErr> {
        entity::socio::ActiveModel {
            nro_socio: ActiveValue::Set(self.nro_socio),
            nombre: ActiveValue::Set(self.nombre),
            apellido: ActiveValue::Set(self.apellido),
            tipo_pago: ActiveValue::Set(self.tipo_pago),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a monthly member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::socio::Model, DbErr> {
    MemberFactory::new(db).build().await
}

/// Creates a member with the given payment plan (`mensual`, `semestral` or `anual`).
pub async fn create_member_with_plan(
    db: &DatabaseConnection,
    tipo_pago: &str,
) -> Result<entity::socio::Model, DbErr> {
    MemberFactory::new(db).tipo_pago(tipo_pago).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn creates_member_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Socio).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let member = create_member(db).await?;

        assert_eq!(member.tipo_pago, "mensual");
        assert!(member.nombre.starts_with("Socio "));

        let stored = Socio::find_by_id(member.nro_socio).one(db).await?;
        assert_eq!(stored, Some(member));

        Ok(())
    }

    #[tokio::test]
    async fn creates_member_with_custom_fields() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Socio).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let member = MemberFactory::new(db)
            .nro_socio(9001)
            .nombre("Ana")
            .apellido(None)
            .tipo_pago("anual")
            .build()
            .await?;

        assert_eq!(member.nro_socio, 9001);
        assert_eq!(member.nombre, "Ana");
        assert_eq!(member.apellido, None);
        assert_eq!(member.tipo_pago, "anual");

        Ok(())
    }
}
