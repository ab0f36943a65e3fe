use sea_orm::entity::prelude::*;

/// Charge and payment state of one member for one month.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cobranzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nro_socio: i32,
    pub mes: i32,
    pub anio: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub monto: Decimal,
    pub pago: bool,
    pub fecha_pago: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::socio::Entity",
        from = "Column::NroSocio",
        to = "super::socio::Column::NroSocio",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Socio,
}

impl Related<super::socio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Socio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
