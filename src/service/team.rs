//! Team roster management.

use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;

use crate::{
    data::TeamMemberRepository,
    error::Error,
    model::team::{CreateTeamMemberDto, TeamMemberDto, UpdateTeamMemberDto},
};

/// Service for organization roster members.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    /// Creates a new instance of [`TeamService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a roster member with a freshly generated access id.
    pub async fn create(
        &self,
        organization_id: i32,
        dto: CreateTeamMemberDto,
    ) -> Result<TeamMemberDto, Error> {
        let team_member_repo = TeamMemberRepository::new(self.db);

        let member = team_member_repo
            .create(
                organization_id,
                generate_access_id(),
                &dto.name,
                &dto.phone,
                &dto.email,
                &dto.position,
            )
            .await?;

        Ok(TeamMemberDto::from(member))
    }

    /// Lists an organization's roster members.
    pub async fn list(&self, organization_id: i32) -> Result<Vec<TeamMemberDto>, Error> {
        let team_member_repo = TeamMemberRepository::new(self.db);

        let members = team_member_repo.list(organization_id).await?;

        Ok(members.into_iter().map(TeamMemberDto::from).collect())
    }

    /// Updates a member's contact fields; the access id is never touched.
    pub async fn update(
        &self,
        member_id: i32,
        dto: UpdateTeamMemberDto,
    ) -> Result<TeamMemberDto, Error> {
        let team_member_repo = TeamMemberRepository::new(self.db);

        let member = team_member_repo
            .get(member_id)
            .await?
            .ok_or(Error::NotFound("Team member", member_id))?;

        let updated = team_member_repo
            .update(member, &dto.name, &dto.phone, &dto.email, &dto.position)
            .await?;

        Ok(TeamMemberDto::from(updated))
    }

    /// Removes a roster member.
    pub async fn delete(&self, member_id: i32) -> Result<(), Error> {
        let team_member_repo = TeamMemberRepository::new(self.db);

        let result = team_member_repo.delete(member_id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Team member", member_id));
        }

        Ok(())
    }
}

/// Generates an opaque roster credential of the form `AC-` plus ten
/// alphanumeric characters.
fn generate_access_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect();

    format!("AC-{suffix}")
}
