use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_socios_table::Socios;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cobranzas::Table)
                    .if_not_exists()
                    .col(pk_auto(Cobranzas::Id))
                    .col(integer(Cobranzas::NroSocio))
                    .col(integer(Cobranzas::Mes))
                    .col(integer(Cobranzas::Anio))
                    .col(decimal_len(Cobranzas::Monto, 10, 2).default(0))
                    .col(boolean(Cobranzas::Pago).default(false))
                    .col(timestamp_with_time_zone_null(Cobranzas::FechaPago))
                    .check(Expr::cust("mes BETWEEN 1 AND 12"))
                    .check(Expr::cust("pago = FALSE OR fecha_pago IS NOT NULL"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cobranzas_nro_socio")
                            .from(Cobranzas::Table, Cobranzas::NroSocio)
                            .to(Socios::Table, Socios::NroSocio)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cobranzas_socio_periodo")
                    .table(Cobranzas::Table)
                    .col(Cobranzas::NroSocio)
                    .col(Cobranzas::Mes)
                    .col(Cobranzas::Anio)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cobranzas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cobranzas {
    Table,
    Id,
    NroSocio,
    Mes,
    Anio,
    Monto,
    Pago,
    FechaPago,
}
