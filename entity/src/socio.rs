use sea_orm::entity::prelude::*;

/// Club member. Rows are maintained outside of this application.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "socios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub nro_socio: i32,
    pub nombre: String,
    pub apellido: Option<String>,
    /// One of `mensual`, `semestral` or `anual`.
    pub tipo_pago: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cobranza::Entity")]
    Cobranza,
}

impl Related<super::cobranza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cobranza.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
