use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260812_000001_create_team_member_table::TeamMember;

static FK_DRONE_ACCOUNTABLE_MANAGER_ID: &str = "fk_drone_accountable_manager_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drone::Table)
                    .if_not_exists()
                    .col(pk_auto(Drone::Id))
                    .col(integer(Drone::OrganizationId))
                    .col(string(Drone::ModelName))
                    .col(string_null(Drone::Image))
                    .col(integer_null(Drone::AccountableManagerId))
                    .col(json(Drone::Uploads))
                    .col(json(Drone::ManufacturedUnits))
                    .col(json(Drone::RecurringData))
                    .col(integer(Drone::Version))
                    .col(timestamp(Drone::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DRONE_ACCOUNTABLE_MANAGER_ID)
                    .from_tbl(Drone::Table)
                    .from_col(Drone::AccountableManagerId)
                    .to_tbl(TeamMember::Table)
                    .to_col(TeamMember::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DRONE_ACCOUNTABLE_MANAGER_ID)
                    .table(Drone::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Drone::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Drone {
    Table,
    Id,
    OrganizationId,
    ModelName,
    Image,
    AccountableManagerId,
    Uploads,
    ManufacturedUnits,
    RecurringData,
    Version,
    CreatedAt,
}
