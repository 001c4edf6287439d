use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, ExprTrait, QueryFilter, QueryOrder, Value,
};

use entity::drone::{Column, DroneUploads, ManufacturedUnits, RecurringData};

pub struct DroneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneRepository<'a> {
    /// Creates a new instance of [`DroneRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new drone with empty compliance aggregates at version 1.
    pub async fn create(
        &self,
        organization_id: i32,
        model_name: &str,
        image: Option<String>,
    ) -> Result<entity::drone::Model, DbErr> {
        let drone = entity::drone::ActiveModel {
            organization_id: ActiveValue::Set(organization_id),
            model_name: ActiveValue::Set(model_name.to_string()),
            image: ActiveValue::Set(image),
            accountable_manager_id: ActiveValue::Set(None),
            uploads: ActiveValue::Set(DroneUploads::default()),
            manufactured_units: ActiveValue::Set(ManufacturedUnits::default()),
            recurring_data: ActiveValue::Set(RecurringData::default()),
            version: ActiveValue::Set(1),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        drone.insert(self.db).await
    }

    /// Fetches a drone snapshot by id.
    pub async fn get(&self, id: i32) -> Result<Option<entity::drone::Model>, DbErr> {
        entity::prelude::Drone::find_by_id(id).one(self.db).await
    }

    /// Lists an organization's drones in registration order.
    pub async fn list(&self, organization_id: i32) -> Result<Vec<entity::drone::Model>, DbErr> {
        entity::prelude::Drone::find()
            .filter(Column::OrganizationId.eq(organization_id))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a drone
    ///
    /// Returns OK regardless of the drone existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Drone::delete_by_id(id).exec(self.db).await
    }

    /// Nominates (or re-nominates) the accountable manager.
    pub async fn set_accountable_manager(
        &self,
        id: i32,
        expected_version: i32,
        manager_id: Option<i32>,
    ) -> Result<Option<entity::drone::Model>, DbErr> {
        self.versioned_write(id, expected_version, Column::AccountableManagerId, manager_id.into())
            .await
    }

    /// Replaces the uploads aggregate.
    pub async fn set_uploads(
        &self,
        id: i32,
        expected_version: i32,
        uploads: DroneUploads,
    ) -> Result<Option<entity::drone::Model>, DbErr> {
        self.versioned_write(id, expected_version, Column::Uploads, uploads.into())
            .await
    }

    /// Replaces the manufactured-unit list.
    pub async fn set_manufactured_units(
        &self,
        id: i32,
        expected_version: i32,
        units: ManufacturedUnits,
    ) -> Result<Option<entity::drone::Model>, DbErr> {
        self.versioned_write(id, expected_version, Column::ManufacturedUnits, units.into())
            .await
    }

    /// Replaces the recurring-data aggregate.
    pub async fn set_recurring_data(
        &self,
        id: i32,
        expected_version: i32,
        data: RecurringData,
    ) -> Result<Option<entity::drone::Model>, DbErr> {
        self.versioned_write(id, expected_version, Column::RecurringData, data.into())
            .await
    }

    /// Writes one aggregate column conditionally on the version token.
    ///
    /// The update matches the row only while its version still equals
    /// `expected_version`, and bumps the version in the same statement.
    /// Returns the refreshed model, or `None` when no row matched (missing
    /// drone or stale token; callers distinguish the two with a follow-up
    /// read).
    async fn versioned_write(
        &self,
        id: i32,
        expected_version: i32,
        column: Column,
        value: Value,
    ) -> Result<Option<entity::drone::Model>, DbErr> {
        let result = entity::prelude::Drone::update_many()
            .col_expr(column, Expr::value(value))
            .col_expr(Column::Version, Expr::col(Column::Version).add(1))
            .filter(Column::Id.eq(id))
            .filter(Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get(id).await
    }
}
