//! Subcontractor agreement management.

use sea_orm::DatabaseConnection;

use crate::{
    data::{SubcontractorFields, SubcontractorRepository},
    error::Error,
    model::subcontractor::{CreateSubcontractorDto, SubcontractorDto},
};

/// Service for organization-wide subcontractor agreements.
pub struct SubcontractorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubcontractorService<'a> {
    /// Creates a new instance of [`SubcontractorService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a subcontractor agreement.
    pub async fn create(
        &self,
        organization_id: i32,
        dto: CreateSubcontractorDto,
    ) -> Result<SubcontractorDto, Error> {
        let subcontractor_repo = SubcontractorRepository::new(self.db);

        let subcontractor = subcontractor_repo
            .create(organization_id, fields_from_dto(dto))
            .await?;

        Ok(SubcontractorDto::from(subcontractor))
    }

    /// Lists an organization's subcontractors.
    pub async fn list(&self, organization_id: i32) -> Result<Vec<SubcontractorDto>, Error> {
        let subcontractor_repo = SubcontractorRepository::new(self.db);

        let subcontractors = subcontractor_repo.list(organization_id).await?;

        Ok(subcontractors
            .into_iter()
            .map(SubcontractorDto::from)
            .collect())
    }

    /// Replaces a subcontractor's agreement details.
    pub async fn update(
        &self,
        subcontractor_id: i32,
        dto: CreateSubcontractorDto,
    ) -> Result<SubcontractorDto, Error> {
        let subcontractor_repo = SubcontractorRepository::new(self.db);

        let subcontractor = subcontractor_repo
            .get(subcontractor_id)
            .await?
            .ok_or(Error::NotFound("Subcontractor", subcontractor_id))?;

        let updated = subcontractor_repo
            .update(subcontractor, fields_from_dto(dto))
            .await?;

        Ok(SubcontractorDto::from(updated))
    }

    /// Removes a subcontractor agreement.
    pub async fn delete(&self, subcontractor_id: i32) -> Result<(), Error> {
        let subcontractor_repo = SubcontractorRepository::new(self.db);

        let result = subcontractor_repo.delete(subcontractor_id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Subcontractor", subcontractor_id));
        }

        Ok(())
    }
}

fn fields_from_dto(dto: CreateSubcontractorDto) -> SubcontractorFields {
    SubcontractorFields {
        company_name: dto.company_name,
        contractor_type: dto.contractor_type,
        contact_person: dto.contact_person,
        email: dto.email,
        phone: dto.phone,
        agreement_date: dto.agreement_date,
    }
}
