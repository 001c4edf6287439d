//! Organization-wide subcontractor agreement.
//!
//! Subcontractors are not tied to a drone; the one-time checklist only asks
//! whether the organization has at least one agreement on file.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "subcontractor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub organization_id: i32,
    pub company_name: String,
    pub contractor_type: ContractorType,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub agreement_date: Date,
    pub created_at: DateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ContractorType {
    #[sea_orm(string_value = "Design")]
    Design,
    #[sea_orm(string_value = "Manufacturing")]
    Manufacturing,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
