use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalesOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(SalesOrder::Id))
                    .col(integer(SalesOrder::OrganizationId))
                    .col(string(SalesOrder::ContractNumber))
                    .col(string(SalesOrder::ClientName))
                    .col(string(SalesOrder::ClientSegment))
                    .col(date(SalesOrder::OrderDate))
                    .col(integer(SalesOrder::Quantity))
                    .col(string(SalesOrder::UnitPrice))
                    .col(string(SalesOrder::AdvanceReceived))
                    .col(string(SalesOrder::PaymentStatus))
                    .col(string(SalesOrder::DroneModel))
                    .col(string(SalesOrder::PayloadType))
                    .col(integer(SalesOrder::EnduranceMinutes))
                    .col(integer(SalesOrder::BatteryCount))
                    .col(string(SalesOrder::TypeCertificationStatus))
                    .col(string(SalesOrder::UinAllocationStatus))
                    .col(string(SalesOrder::RptoTrainingStatus))
                    .col(string(SalesOrder::InsuranceStatus))
                    .col(string(SalesOrder::DeliveryStatus))
                    .col(date_null(SalesOrder::DeliveryDate))
                    .col(string(SalesOrder::DeploymentLocation))
                    .col(string(SalesOrder::SupportContract))
                    .col(timestamp(SalesOrder::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalesOrder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SalesOrder {
    Table,
    Id,
    OrganizationId,
    ContractNumber,
    ClientName,
    ClientSegment,
    OrderDate,
    Quantity,
    UnitPrice,
    AdvanceReceived,
    PaymentStatus,
    DroneModel,
    PayloadType,
    EnduranceMinutes,
    BatteryCount,
    TypeCertificationStatus,
    UinAllocationStatus,
    RptoTrainingStatus,
    InsuranceStatus,
    DeliveryStatus,
    DeliveryDate,
    DeploymentLocation,
    SupportContract,
    CreatedAt,
}
