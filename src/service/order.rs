//! Sales order management.
//!
//! Status fields are validated against their closed vocabularies before any
//! write, and every returned row carries the derived badge class per status
//! column so clients render without duplicating the mapping.

use sea_orm::DatabaseConnection;

use crate::{
    data::{SalesOrderFields, SalesOrderRepository},
    error::{Error, ValidationError},
    model::order::{OrderBadgesDto, SalesOrderDto, SalesOrderFormDto},
    service::checklist::badge::{badge_color, order_field_values},
};

/// Service for customer sales orders.
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new instance of [`OrderService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a sales order after vocabulary validation.
    pub async fn create(
        &self,
        organization_id: i32,
        form: SalesOrderFormDto,
    ) -> Result<SalesOrderDto, Error> {
        validate_form(&form)?;

        let order_repo = SalesOrderRepository::new(self.db);
        let order = order_repo
            .create(organization_id, fields_from_form(form))
            .await?;

        Ok(to_dto(order))
    }

    /// Lists an organization's orders with derived badges.
    pub async fn list(&self, organization_id: i32) -> Result<Vec<SalesOrderDto>, Error> {
        let order_repo = SalesOrderRepository::new(self.db);

        let orders = order_repo.list(organization_id).await?;

        Ok(orders.into_iter().map(to_dto).collect())
    }

    /// Fetches one order with derived badges.
    pub async fn get(&self, order_id: i32) -> Result<SalesOrderDto, Error> {
        let order_repo = SalesOrderRepository::new(self.db);

        let order = order_repo
            .get(order_id)
            .await?
            .ok_or(Error::NotFound("Sales order", order_id))?;

        Ok(to_dto(order))
    }

    /// Replaces an order's form fields after vocabulary validation.
    pub async fn update(
        &self,
        order_id: i32,
        form: SalesOrderFormDto,
    ) -> Result<SalesOrderDto, Error> {
        validate_form(&form)?;

        let order_repo = SalesOrderRepository::new(self.db);
        let order = order_repo
            .get(order_id)
            .await?
            .ok_or(Error::NotFound("Sales order", order_id))?;

        let updated = order_repo.update(order, fields_from_form(form)).await?;

        Ok(to_dto(updated))
    }

    /// Removes an order.
    pub async fn delete(&self, order_id: i32) -> Result<(), Error> {
        let order_repo = SalesOrderRepository::new(self.db);

        let result = order_repo.delete(order_id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Sales order", order_id));
        }

        Ok(())
    }
}

/// Rejects the form if any status field holds a value outside its closed
/// vocabulary.
fn validate_form(form: &SalesOrderFormDto) -> Result<(), ValidationError> {
    let statuses: [(&'static str, &str); 7] = [
        ("client_segment", &form.client_segment),
        ("payment_status", &form.payment_status),
        ("type_certification_status", &form.type_certification_status),
        ("uin_allocation_status", &form.uin_allocation_status),
        ("rpto_training_status", &form.rpto_training_status),
        ("insurance_status", &form.insurance_status),
        ("delivery_status", &form.delivery_status),
    ];

    for (field, value) in statuses {
        let allowed = order_field_values(field).unwrap_or(&[]);
        if !allowed.contains(&value) {
            return Err(ValidationError::UnknownStatus {
                field,
                value: value.to_string(),
            });
        }
    }

    Ok(())
}

fn fields_from_form(form: SalesOrderFormDto) -> SalesOrderFields {
    SalesOrderFields {
        contract_number: form.contract_number,
        client_name: form.client_name,
        client_segment: form.client_segment,
        order_date: form.order_date,
        quantity: form.quantity,
        unit_price: form.unit_price,
        advance_received: form.advance_received,
        payment_status: form.payment_status,
        drone_model: form.drone_model,
        payload_type: form.payload_type,
        endurance_minutes: form.endurance_minutes,
        battery_count: form.battery_count,
        type_certification_status: form.type_certification_status,
        uin_allocation_status: form.uin_allocation_status,
        rpto_training_status: form.rpto_training_status,
        insurance_status: form.insurance_status,
        delivery_status: form.delivery_status,
        delivery_date: form.delivery_date,
        deployment_location: form.deployment_location,
        support_contract: form.support_contract,
    }
}

fn to_dto(order: entity::sales_order::Model) -> SalesOrderDto {
    let badges = OrderBadgesDto {
        client_segment: badge_color(&order.client_segment).as_str().to_string(),
        payment_status: badge_color(&order.payment_status).as_str().to_string(),
        type_certification_status: badge_color(&order.type_certification_status)
            .as_str()
            .to_string(),
        uin_allocation_status: badge_color(&order.uin_allocation_status)
            .as_str()
            .to_string(),
        rpto_training_status: badge_color(&order.rpto_training_status)
            .as_str()
            .to_string(),
        insurance_status: badge_color(&order.insurance_status).as_str().to_string(),
        delivery_status: badge_color(&order.delivery_status).as_str().to_string(),
    };

    SalesOrderDto {
        id: order.id,
        contract_number: order.contract_number,
        client_name: order.client_name,
        client_segment: order.client_segment,
        order_date: order.order_date,
        quantity: order.quantity,
        unit_price: order.unit_price,
        advance_received: order.advance_received,
        payment_status: order.payment_status,
        drone_model: order.drone_model,
        payload_type: order.payload_type,
        endurance_minutes: order.endurance_minutes,
        battery_count: order.battery_count,
        type_certification_status: order.type_certification_status,
        uin_allocation_status: order.uin_allocation_status,
        rpto_training_status: order.rpto_training_status,
        insurance_status: order.insurance_status,
        delivery_status: order.delivery_status,
        delivery_date: order.delivery_date,
        deployment_location: order.deployment_location,
        support_contract: order.support_contract,
        created_at: order.created_at,
        badges,
    }
}
