//! Customer sales order.
//!
//! Independent of the drone checklist; the business fields group into four
//! logical sections (financial, technical, regulatory, operational) and the
//! status fields draw from closed per-field vocabularies that share the
//! checklist's badge-color mapping.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "sales_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub organization_id: i32,
    // Financial
    pub contract_number: String,
    pub client_name: String,
    pub client_segment: String,
    pub order_date: Date,
    pub quantity: i32,
    pub unit_price: String,
    pub advance_received: String,
    pub payment_status: String,
    // Technical
    pub drone_model: String,
    pub payload_type: String,
    pub endurance_minutes: i32,
    pub battery_count: i32,
    // Regulatory
    pub type_certification_status: String,
    pub uin_allocation_status: String,
    pub rpto_training_status: String,
    pub insurance_status: String,
    // Operational
    pub delivery_status: String,
    pub delivery_date: Option<Date>,
    pub deployment_location: String,
    pub support_contract: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
