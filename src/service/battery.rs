//! Battery fleet management.

use sea_orm::DatabaseConnection;

use crate::{
    data::BatteryRepository,
    error::Error,
    model::battery::{BatteryDto, CreateBatteryDto},
};

/// Service for the organization's battery roster.
pub struct BatteryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BatteryService<'a> {
    /// Creates a new instance of [`BatteryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a battery unit.
    pub async fn create(
        &self,
        organization_id: i32,
        dto: CreateBatteryDto,
    ) -> Result<BatteryDto, Error> {
        let battery_repo = BatteryRepository::new(self.db);

        let battery = battery_repo
            .create(
                organization_id,
                &dto.model,
                &dto.capacity,
                &dto.battery_number_a,
                &dto.battery_number_b,
            )
            .await?;

        Ok(BatteryDto::from(battery))
    }

    /// Lists an organization's batteries with their composite keys.
    pub async fn list(&self, organization_id: i32) -> Result<Vec<BatteryDto>, Error> {
        let battery_repo = BatteryRepository::new(self.db);

        let batteries = battery_repo.list(organization_id).await?;

        Ok(batteries.into_iter().map(BatteryDto::from).collect())
    }

    /// Removes a battery unit. Battery-safety records referencing its
    /// composite key keep the key as plain text.
    pub async fn delete(&self, battery_id: i32) -> Result<(), Error> {
        let battery_repo = BatteryRepository::new(self.db);

        let result = battery_repo.delete(battery_id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Battery", battery_id));
        }

        Ok(())
    }
}
