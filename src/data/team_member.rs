use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use entity::team_member::Column;

pub struct TeamMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamMemberRepository<'a> {
    /// Creates a new instance of [`TeamMemberRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a roster member. The access id is assigned here and never
    /// updated afterwards.
    pub async fn create(
        &self,
        organization_id: i32,
        access_id: String,
        name: &str,
        phone: &str,
        email: &str,
        position: &str,
    ) -> Result<entity::team_member::Model, DbErr> {
        let member = entity::team_member::ActiveModel {
            organization_id: ActiveValue::Set(organization_id),
            access_id: ActiveValue::Set(access_id),
            name: ActiveValue::Set(name.to_string()),
            phone: ActiveValue::Set(phone.to_string()),
            email: ActiveValue::Set(email.to_string()),
            position: ActiveValue::Set(position.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        member.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        organization_id: i32,
    ) -> Result<Vec<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(Column::OrganizationId.eq(organization_id))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the mutable contact fields of a roster member.
    pub async fn update(
        &self,
        member: entity::team_member::Model,
        name: &str,
        phone: &str,
        email: &str,
        position: &str,
    ) -> Result<entity::team_member::Model, DbErr> {
        let mut member: entity::team_member::ActiveModel = member.into();
        member.name = ActiveValue::Set(name.to_string());
        member.phone = ActiveValue::Set(phone.to_string());
        member.email = ActiveValue::Set(email.to_string());
        member.position = ActiveValue::Set(position.to_string());

        member.update(self.db).await
    }

    /// Deletes a roster member
    ///
    /// Returns OK regardless of the member existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TeamMember::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
