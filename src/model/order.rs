//! Sales order DTOs.
//!
//! Status fields draw from closed per-field vocabularies and are rendered with
//! the same badge-color rule as the checklist statuses, so the DTO carries the
//! derived badge class for each status column.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A customer sales order.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SalesOrderDto {
    /// Order id.
    pub id: i32,
    /// Contract number.
    pub contract_number: String,
    /// Client name.
    pub client_name: String,
    /// Client segment.
    pub client_segment: String,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Units ordered.
    pub quantity: i32,
    /// Price per unit.
    pub unit_price: String,
    /// Advance received.
    pub advance_received: String,
    /// Billing state.
    pub payment_status: String,
    /// Drone model ordered.
    pub drone_model: String,
    /// Payload configuration.
    pub payload_type: String,
    /// Flight endurance in minutes.
    pub endurance_minutes: i32,
    /// Batteries included per unit.
    pub battery_count: i32,
    /// Type certification progress.
    pub type_certification_status: String,
    /// UIN allocation progress.
    pub uin_allocation_status: String,
    /// RPTO pilot training progress.
    pub rpto_training_status: String,
    /// Insurance progress.
    pub insurance_status: String,
    /// Delivery readiness.
    pub delivery_status: String,
    /// Delivery date, once known.
    pub delivery_date: Option<NaiveDate>,
    /// Where the units deploy.
    pub deployment_location: String,
    /// Support/AMC arrangement.
    pub support_contract: String,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Derived badge classes for the status columns.
    pub badges: OrderBadgesDto,
}

/// Badge color class per status column of an order row.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderBadgesDto {
    /// Badge for the client segment column.
    pub client_segment: String,
    /// Badge for the payment status column.
    pub payment_status: String,
    /// Badge for the type certification column.
    pub type_certification_status: String,
    /// Badge for the UIN allocation column.
    pub uin_allocation_status: String,
    /// Badge for the RPTO training column.
    pub rpto_training_status: String,
    /// Badge for the insurance column.
    pub insurance_status: String,
    /// Badge for the delivery column.
    pub delivery_status: String,
}

/// Form payload shared by order create and update; status fields must come
/// from their closed vocabularies.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SalesOrderFormDto {
    /// Contract number.
    pub contract_number: String,
    /// Client name.
    pub client_name: String,
    /// Client segment.
    pub client_segment: String,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Units ordered.
    pub quantity: i32,
    /// Price per unit.
    pub unit_price: String,
    /// Advance received.
    pub advance_received: String,
    /// Billing state.
    pub payment_status: String,
    /// Drone model ordered.
    pub drone_model: String,
    /// Payload configuration.
    pub payload_type: String,
    /// Flight endurance in minutes.
    pub endurance_minutes: i32,
    /// Batteries included per unit.
    pub battery_count: i32,
    /// Type certification progress.
    pub type_certification_status: String,
    /// UIN allocation progress.
    pub uin_allocation_status: String,
    /// RPTO pilot training progress.
    pub rpto_training_status: String,
    /// Insurance progress.
    pub insurance_status: String,
    /// Delivery readiness.
    pub delivery_status: String,
    /// Delivery date, once known.
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    /// Where the units deploy.
    pub deployment_location: String,
    /// Support/AMC arrangement.
    pub support_contract: String,
}
