//! Team member DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An organization roster member.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberDto {
    /// Member id.
    pub id: i32,
    /// Opaque credential assigned at creation; immutable.
    pub access_id: String,
    /// Full name.
    pub name: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Position held in the organization.
    pub position: String,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

impl From<entity::team_member::Model> for TeamMemberDto {
    fn from(member: entity::team_member::Model) -> Self {
        Self {
            id: member.id,
            access_id: member.access_id,
            name: member.name,
            phone: member.phone,
            email: member.email,
            position: member.position,
            created_at: member.created_at,
        }
    }
}

/// Payload for adding a roster member; the access id is generated server-side.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamMemberDto {
    /// Full name.
    pub name: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Position held in the organization.
    pub position: String,
}

/// Payload for updating a roster member; the access id never changes.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeamMemberDto {
    /// Full name.
    pub name: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Position held in the organization.
    pub position: String,
}
