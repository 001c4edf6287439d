use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use entity::sales_order::Column;

pub struct SalesOrderRepository<'a> {
    db: &'a DatabaseConnection,
}

/// The full order form, accepted for both create and update.
pub struct SalesOrderFields {
    pub contract_number: String,
    pub client_name: String,
    pub client_segment: String,
    pub order_date: NaiveDate,
    pub quantity: i32,
    pub unit_price: String,
    pub advance_received: String,
    pub payment_status: String,
    pub drone_model: String,
    pub payload_type: String,
    pub endurance_minutes: i32,
    pub battery_count: i32,
    pub type_certification_status: String,
    pub uin_allocation_status: String,
    pub rpto_training_status: String,
    pub insurance_status: String,
    pub delivery_status: String,
    pub delivery_date: Option<NaiveDate>,
    pub deployment_location: String,
    pub support_contract: String,
}

impl SalesOrderFields {
    fn apply(self, order: &mut entity::sales_order::ActiveModel) {
        order.contract_number = ActiveValue::Set(self.contract_number);
        order.client_name = ActiveValue::Set(self.client_name);
        order.client_segment = ActiveValue::Set(self.client_segment);
        order.order_date = ActiveValue::Set(self.order_date);
        order.quantity = ActiveValue::Set(self.quantity);
        order.unit_price = ActiveValue::Set(self.unit_price);
        order.advance_received = ActiveValue::Set(self.advance_received);
        order.payment_status = ActiveValue::Set(self.payment_status);
        order.drone_model = ActiveValue::Set(self.drone_model);
        order.payload_type = ActiveValue::Set(self.payload_type);
        order.endurance_minutes = ActiveValue::Set(self.endurance_minutes);
        order.battery_count = ActiveValue::Set(self.battery_count);
        order.type_certification_status = ActiveValue::Set(self.type_certification_status);
        order.uin_allocation_status = ActiveValue::Set(self.uin_allocation_status);
        order.rpto_training_status = ActiveValue::Set(self.rpto_training_status);
        order.insurance_status = ActiveValue::Set(self.insurance_status);
        order.delivery_status = ActiveValue::Set(self.delivery_status);
        order.delivery_date = ActiveValue::Set(self.delivery_date);
        order.deployment_location = ActiveValue::Set(self.deployment_location);
        order.support_contract = ActiveValue::Set(self.support_contract);
    }
}

impl<'a> SalesOrderRepository<'a> {
    /// Creates a new instance of [`SalesOrderRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        organization_id: i32,
        fields: SalesOrderFields,
    ) -> Result<entity::sales_order::Model, DbErr> {
        let mut order = entity::sales_order::ActiveModel {
            organization_id: ActiveValue::Set(organization_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        fields.apply(&mut order);

        order.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::sales_order::Model>, DbErr> {
        entity::prelude::SalesOrder::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        organization_id: i32,
    ) -> Result<Vec<entity::sales_order::Model>, DbErr> {
        entity::prelude::SalesOrder::find()
            .filter(Column::OrganizationId.eq(organization_id))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        order: entity::sales_order::Model,
        fields: SalesOrderFields,
    ) -> Result<entity::sales_order::Model, DbErr> {
        let mut order: entity::sales_order::ActiveModel = order.into();
        fields.apply(&mut order);

        order.update(self.db).await
    }

    /// Deletes an order
    ///
    /// Returns OK regardless of the order existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SalesOrder::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
