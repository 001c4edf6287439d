use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subcontractor::Table)
                    .if_not_exists()
                    .col(pk_auto(Subcontractor::Id))
                    .col(integer(Subcontractor::OrganizationId))
                    .col(string(Subcontractor::CompanyName))
                    .col(string_len(Subcontractor::ContractorType, 16))
                    .col(string(Subcontractor::ContactPerson))
                    .col(string(Subcontractor::Email))
                    .col(string(Subcontractor::Phone))
                    .col(date(Subcontractor::AgreementDate))
                    .col(timestamp(Subcontractor::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subcontractor::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Subcontractor {
    Table,
    Id,
    OrganizationId,
    CompanyName,
    ContractorType,
    ContactPerson,
    Email,
    Phone,
    AgreementDate,
    CreatedAt,
}
