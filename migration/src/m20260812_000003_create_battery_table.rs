use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Battery::Table)
                    .if_not_exists()
                    .col(pk_auto(Battery::Id))
                    .col(integer(Battery::OrganizationId))
                    .col(string(Battery::Model))
                    .col(string(Battery::Capacity))
                    .col(string(Battery::BatteryNumberA))
                    .col(string(Battery::BatteryNumberB))
                    .col(timestamp(Battery::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Battery::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Battery {
    Table,
    Id,
    OrganizationId,
    Model,
    Capacity,
    BatteryNumberA,
    BatteryNumberB,
    CreatedAt,
}
