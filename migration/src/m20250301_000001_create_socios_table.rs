use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Socios::Table)
                    .if_not_exists()
                    .col(integer(Socios::NroSocio).primary_key())
                    .col(string(Socios::Nombre))
                    .col(string_null(Socios::Apellido))
                    .col(string(Socios::TipoPago).default("mensual"))
                    .check(Expr::cust(
                        "tipo_pago IN ('mensual', 'semestral', 'anual')",
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Socios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Socios {
    Table,
    NroSocio,
    Nombre,
    Apellido,
    TipoPago,
}
