use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMember::Id))
                    .col(integer(TeamMember::OrganizationId))
                    .col(string_uniq(TeamMember::AccessId))
                    .col(string(TeamMember::Name))
                    .col(string(TeamMember::Phone))
                    .col(string(TeamMember::Email))
                    .col(string(TeamMember::Position))
                    .col(timestamp(TeamMember::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamMember {
    Table,
    Id,
    OrganizationId,
    AccessId,
    Name,
    Phone,
    Email,
    Position,
    CreatedAt,
}
