use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use entity::subcontractor::{Column, ContractorType};

pub struct SubcontractorRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Fields accepted for subcontractor create and update.
pub struct SubcontractorFields {
    pub company_name: String,
    pub contractor_type: ContractorType,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub agreement_date: NaiveDate,
}

impl<'a> SubcontractorRepository<'a> {
    /// Creates a new instance of [`SubcontractorRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        organization_id: i32,
        fields: SubcontractorFields,
    ) -> Result<entity::subcontractor::Model, DbErr> {
        let subcontractor = entity::subcontractor::ActiveModel {
            organization_id: ActiveValue::Set(organization_id),
            company_name: ActiveValue::Set(fields.company_name),
            contractor_type: ActiveValue::Set(fields.contractor_type),
            contact_person: ActiveValue::Set(fields.contact_person),
            email: ActiveValue::Set(fields.email),
            phone: ActiveValue::Set(fields.phone),
            agreement_date: ActiveValue::Set(fields.agreement_date),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        subcontractor.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::subcontractor::Model>, DbErr> {
        entity::prelude::Subcontractor::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        organization_id: i32,
    ) -> Result<Vec<entity::subcontractor::Model>, DbErr> {
        entity::prelude::Subcontractor::find()
            .filter(Column::OrganizationId.eq(organization_id))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        subcontractor: entity::subcontractor::Model,
        fields: SubcontractorFields,
    ) -> Result<entity::subcontractor::Model, DbErr> {
        let mut subcontractor: entity::subcontractor::ActiveModel = subcontractor.into();
        subcontractor.company_name = ActiveValue::Set(fields.company_name);
        subcontractor.contractor_type = ActiveValue::Set(fields.contractor_type);
        subcontractor.contact_person = ActiveValue::Set(fields.contact_person);
        subcontractor.email = ActiveValue::Set(fields.email);
        subcontractor.phone = ActiveValue::Set(fields.phone);
        subcontractor.agreement_date = ActiveValue::Set(fields.agreement_date);

        subcontractor.update(self.db).await
    }

    /// Deletes a subcontractor
    ///
    /// Returns OK regardless of the subcontractor existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Subcontractor::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
