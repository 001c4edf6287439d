//! Subcontractor DTOs.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use entity::subcontractor::ContractorType;

/// An organization-wide subcontractor agreement.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SubcontractorDto {
    /// Subcontractor id.
    pub id: i32,
    /// Company name.
    pub company_name: String,
    /// Design or Manufacturing.
    #[schema(value_type = String)]
    pub contractor_type: ContractorType,
    /// Contact person.
    pub contact_person: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Date the agreement was signed.
    pub agreement_date: NaiveDate,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

impl From<entity::subcontractor::Model> for SubcontractorDto {
    fn from(subcontractor: entity::subcontractor::Model) -> Self {
        Self {
            id: subcontractor.id,
            company_name: subcontractor.company_name,
            contractor_type: subcontractor.contractor_type,
            contact_person: subcontractor.contact_person,
            email: subcontractor.email,
            phone: subcontractor.phone,
            agreement_date: subcontractor.agreement_date,
            created_at: subcontractor.created_at,
        }
    }
}

/// Payload for recording a subcontractor agreement.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSubcontractorDto {
    /// Company name.
    pub company_name: String,
    /// Design or Manufacturing.
    #[schema(value_type = String)]
    pub contractor_type: ContractorType,
    /// Contact person.
    pub contact_person: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Date the agreement was signed.
    pub agreement_date: NaiveDate,
}
