use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use entity::battery::Column;

pub struct BatteryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BatteryRepository<'a> {
    /// Creates a new instance of [`BatteryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        organization_id: i32,
        model: &str,
        capacity: &str,
        battery_number_a: &str,
        battery_number_b: &str,
    ) -> Result<entity::battery::Model, DbErr> {
        let battery = entity::battery::ActiveModel {
            organization_id: ActiveValue::Set(organization_id),
            model: ActiveValue::Set(model.to_string()),
            capacity: ActiveValue::Set(capacity.to_string()),
            battery_number_a: ActiveValue::Set(battery_number_a.to_string()),
            battery_number_b: ActiveValue::Set(battery_number_b.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        battery.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::battery::Model>, DbErr> {
        entity::prelude::Battery::find_by_id(id).one(self.db).await
    }

    pub async fn list(&self, organization_id: i32) -> Result<Vec<entity::battery::Model>, DbErr> {
        entity::prelude::Battery::find()
            .filter(Column::OrganizationId.eq(organization_id))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a battery
    ///
    /// Returns OK regardless of the battery existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Battery::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Schema};

    use fleetcert_test_utils::TestSetup;

    use super::BatteryRepository;

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = TestSetup::new().await.unwrap();

        let db = test.state.db;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmt = schema.create_table_from_entity(entity::prelude::Battery);
        db.execute(&stmt).await?;

        Ok(db)
    }

    /// Expect the composite key to join the two cell identifiers
    #[tokio::test]
    async fn test_composite_key() -> Result<(), DbErr> {
        let db = setup().await?;
        let repository = BatteryRepository::new(&db);

        let battery = repository
            .create(1, "LiPo 6S", "22000mAh", "BAT-A001", "BAT-B001")
            .await?;

        assert_eq!(battery.composite_key(), "BAT-A001BAT-B001");

        Ok(())
    }
}
